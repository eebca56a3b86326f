use embedded_hal::delay::DelayNs;

use super::{LinkController, LinkError};
use crate::{transceiver::Transceiver, types::Mode};

impl<T, D> LinkController<T, D>
where
    T: Transceiver,
    D: DelayNs,
{
    /// Power down the radio.
    ///
    /// The radio's configuration is retained, but it can neither send nor receive.
    /// Use [`LinkController::power_up()`] to resume.
    pub fn power_down(&mut self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        self.radio.power_down().map_err(LinkError::Radio)?;
        self.state = self.state.with_powered(false).with_mode(Mode::Idle);
        log_debug!("radio powered down");
        Ok(())
    }

    /// Power up the radio and restore the idle mode of the link's role.
    ///
    /// This always waits
    /// [`LinkConfig::power_up_settle_us()`](fn@crate::LinkConfig::power_up_settle_us)
    /// for the radio to stabilize before returning.
    pub fn power_up(&mut self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        self.radio.power_up().map_err(LinkError::Radio)?;
        self.delay_impl
            .delay_us(self.config.power_up_settle_us());
        self.state.set_powered(true);
        let mode = self.state.role().idle_mode();
        self.enter_mode(mode).map_err(LinkError::Radio)
    }
}
