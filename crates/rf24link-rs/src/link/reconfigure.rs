use embedded_hal::delay::DelayNs;

use super::{LinkController, LinkError};
use crate::{
    transceiver::Transceiver,
    types::{Address, Mode, Role, MAX_RF_CHANNEL},
};

impl<T, D> LinkController<T, D>
where
    T: Transceiver,
    D: DelayNs,
{
    /// Move the link to a different logical `channel`.
    ///
    /// The radio's channel is `channel` multiplied by
    /// [`LinkConfig::channel_stride()`](fn@crate::LinkConfig::channel_stride),
    /// limited to 125. Both peers of a link must use the same logical channel.
    ///
    /// The radio stops listening and settles before and after the channel
    /// changes. Afterward, the radio enters the idle mode of the given `role`
    /// (which becomes the link's role).
    pub fn set_channel(
        &mut self,
        channel: u8,
        role: Role,
    ) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        self.enter_mode(Mode::Transmitting)
            .map_err(LinkError::Radio)?;
        let settle = self.config.channel_settle_us();
        self.delay_impl.delay_us(settle);
        let rf_channel = (channel as u16 * self.config.channel_stride() as u16)
            .min(MAX_RF_CHANNEL as u16) as u8;
        self.radio
            .set_channel(rf_channel)
            .map_err(LinkError::Radio)?;
        self.delay_impl.delay_us(settle);
        self.channel = Some(channel);
        self.state.set_role(role);
        self.enter_mode(role.idle_mode())
            .map_err(LinkError::Radio)?;
        log_debug!("logical channel {} mapped to {}", channel, rf_channel);
        self.dump_details().map_err(LinkError::Radio)
    }

    /// Replace the link's addresses and reapply the pipe configuration for `role`.
    ///
    /// Both FIFOs are flushed first. Afterward, only the new addresses are in use.
    /// Any failure reported by the radio is returned as [`LinkError::Reconfigure`].
    pub fn switch_address(
        &mut self,
        write_address: &Address,
        read_address: &Address,
        role: Role,
    ) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        self.stop_and_flush().map_err(LinkError::Reconfigure)?;
        self.tx_address = *write_address;
        self.rx_address = *read_address;
        self.apply_role(role).map_err(LinkError::Reconfigure)?;
        self.dump_details().map_err(LinkError::Reconfigure)
    }

    /// Reapply the link's whole configuration using the stored addresses.
    ///
    /// This can recover a radio in an unexpected state without forgetting
    /// the link's addresses.
    /// Any failure reported by the radio is returned as [`LinkError::Reconfigure`].
    pub fn reset(&mut self, role: Role) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        self.stop_and_flush().map_err(LinkError::Reconfigure)?;
        self.apply_baseline().map_err(LinkError::Reconfigure)?;
        self.apply_role(role).map_err(LinkError::Reconfigure)?;
        log_debug!("link reset as {}", role);
        self.dump_details().map_err(LinkError::Reconfigure)
    }

    /// Discard the radio's RX and TX FIFOs.
    pub fn flush_buffers(&mut self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        self.radio.flush_rx().map_err(LinkError::Radio)?;
        self.radio.flush_tx().map_err(LinkError::Radio)
    }

    /// Print the radio's configuration (using the radio driver's own output).
    pub fn print_details(&mut self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        self.radio.print_details().map_err(LinkError::Radio)
    }

    fn stop_and_flush(&mut self) -> Result<(), T::TransceiverErrorType> {
        self.enter_mode(Mode::Transmitting)?;
        self.delay_impl.delay_us(self.config.address_settle_us());
        self.radio.flush_rx()?;
        self.radio.flush_tx()
    }
}
