use embedded_hal::delay::DelayNs;

mod bit_fields;
mod power;
mod receive;
mod reconfigure;
mod send;
use bit_fields::LinkState;

use crate::{
    config::LinkConfig,
    transceiver::Transceiver,
    types::{Address, Mode, PowerState, Role, ADDRESS_LENGTH, MAX_PAYLOAD_LENGTH, READ_PIPE},
};

/// The ways a link operation can fail.
///
/// Not receiving data (or an ACK payload) is not an error;
/// it is reported as a length of `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkError<E> {
    /// The radio failed to initialize or configure during
    /// [`LinkController::begin()`].
    ///
    /// The link is unusable; this is a fatal condition for most applications.
    BringUp(E),
    /// The radio failed during a send, receive, channel change, flush, or power transition.
    Radio(E),
    /// The radio failed while reapplying the link's configuration in
    /// [`LinkController::switch_address()`] or [`LinkController::reset()`].
    Reconfigure(E),
    /// [`LinkController::begin()`] has not succeeded yet.
    NotInitialized,
    /// The radio is powered down. Use [`LinkController::power_up()`] first.
    PoweredDown,
    /// A payload's length is not in range [1, 32].
    PayloadLength(usize),
    /// A received payload does not fit in the given buffer.
    ///
    /// The payload has been discarded from the radio's RX FIFO.
    /// An ACK payload that doesn't fit is discarded without this error.
    BufferTooSmall { needed: usize, available: usize },
}

/// A half-duplex, point-to-point link between two radios.
///
/// The controller exclusively owns the transceiver (and a delay provider for
/// settling the radio between reconfiguration steps). One peer takes the
/// [`Role::Sender`] role, the other the [`Role::Receiver`] role. Data sent to a
/// receiver is answered with the ACK payload that the receiver queued while
/// reading the *previous* payload.
///
/// ```ignore
/// use rf24::radio::RF24;
/// use rf24link::{LinkController, Role};
///
/// let radio = RF24::new(ce_pin, spi_device, delay_impl);
/// let mut link = LinkController::new(radio, link_delay_impl);
/// link.begin(&[1, 2, 3, 4, 5], &[6, 7, 8, 9, 10], Role::Sender)?;
/// let mut ack = [0u8; 32];
/// let ack_len = link.send(b"Hello!", &mut ack)?;
/// ```
pub struct LinkController<T, D> {
    radio: T,
    delay_impl: D,
    config: LinkConfig,
    tx_address: Address,
    rx_address: Address,
    channel: Option<u8>,
    state: LinkState,
}

impl<T, D> LinkController<T, D>
where
    T: Transceiver,
    D: DelayNs,
{
    /// Instantiate a [`LinkController`] with the default [`LinkConfig`].
    ///
    /// The `radio`'s hardware is not touched until [`LinkController::begin()`] is called.
    pub fn new(radio: T, delay_impl: D) -> Self {
        Self::with_config(radio, delay_impl, LinkConfig::default())
    }

    /// Instantiate a [`LinkController`] with a custom `config`.
    pub fn with_config(radio: T, delay_impl: D, config: LinkConfig) -> Self {
        Self {
            radio,
            delay_impl,
            config,
            tx_address: [0; ADDRESS_LENGTH],
            rx_address: [0; ADDRESS_LENGTH],
            channel: None,
            state: LinkState::new(),
        }
    }

    /// Bring up the radio and configure the link.
    ///
    /// - `write_address` is used for transmitting.
    /// - `read_address` is opened for receiving on pipe 1.
    /// - `role` selects the idle mode and acknowledgement policy.
    ///
    /// If this fails, all other operations will return [`LinkError::NotInitialized`].
    /// This function reconfigures the radio completely; call it once and use
    /// [`LinkController::switch_address()`] or [`LinkController::reset()`] afterward.
    pub fn begin(
        &mut self,
        write_address: &Address,
        read_address: &Address,
        role: Role,
    ) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.state = LinkState::new();
        self.channel = None;
        self.radio.init().map_err(LinkError::BringUp)?;
        // init() leaves the radio powered up with auto-ack enabled
        self.state = self.state.with_powered(true).with_auto_ack(true);

        self.tx_address = *write_address;
        self.rx_address = *read_address;
        self.apply_baseline().map_err(LinkError::BringUp)?;
        self.apply_role(role).map_err(LinkError::BringUp)?;
        self.state.set_initialized(true);
        log_debug!("link started as {}", role);
        Ok(())
    }

    /// Consume the controller and give back the transceiver and delay provider.
    pub fn release(self) -> (T, D) {
        (self.radio, self.delay_impl)
    }

    /// The role last applied by [`LinkController::begin()`] or a reconfiguration.
    pub fn role(&self) -> Role {
        self.state.role()
    }

    /// The radio's current mode.
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn power_state(&self) -> PowerState {
        if self.state.powered() {
            PowerState::Up
        } else {
            PowerState::Down
        }
    }

    /// The logical channel set by [`LinkController::set_channel()`].
    ///
    /// Returns [`None`] if the radio still uses its default channel.
    pub fn channel(&self) -> Option<u8> {
        self.channel
    }

    /// The address of the write pipe (as given to [`LinkController::begin()`]
    /// or [`LinkController::switch_address()`]).
    pub fn tx_address(&self) -> &Address {
        &self.tx_address
    }

    /// The address of the read pipe.
    pub fn rx_address(&self) -> &Address {
        &self.rx_address
    }

    /// Is the auto-ack feature enabled?
    ///
    /// This is `false` after [`LinkController::send_only()`].
    pub fn auto_ack(&self) -> bool {
        self.state.auto_ack()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized()
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    fn check_initialized(&self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        if !self.state.initialized() {
            return Err(LinkError::NotInitialized);
        }
        Ok(())
    }

    fn check_ready(&self) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        if !self.state.powered() {
            return Err(LinkError::PoweredDown);
        }
        Ok(())
    }

    /// Apply the radio settings shared by both roles.
    fn apply_baseline(&mut self) -> Result<(), T::TransceiverErrorType> {
        self.radio.set_pa_level(self.config.pa_level())?;
        self.radio.set_dynamic_payloads(true)?;
        self.radio.set_ack_payloads(true)?;
        self.radio.set_payload_length(self.config.payload_length())?;
        self.radio.set_data_rate(self.config.data_rate())
    }

    /// Open the pipes with the stored addresses and enter the `role`'s idle mode.
    fn apply_role(&mut self, role: Role) -> Result<(), T::TransceiverErrorType> {
        self.state.set_role(role);
        if role == Role::Receiver {
            self.apply_auto_ack(true)?;
        }
        self.radio.open_tx_pipe(&self.tx_address)?;
        self.radio.open_rx_pipe(READ_PIPE, &self.rx_address)?;
        self.enter_mode(role.idle_mode())?;
        if role == Role::Sender {
            self.radio.set_auto_retries(
                self.config.auto_retry_delay(),
                self.config.auto_retry_count(),
            )?;
        }
        Ok(())
    }

    /// Enabling auto-ack also restores the ACK payloads feature
    /// because the radio disables both together.
    fn apply_auto_ack(&mut self, enable: bool) -> Result<(), T::TransceiverErrorType> {
        self.radio.set_auto_ack(enable)?;
        if enable {
            self.radio.set_ack_payloads(true)?;
        }
        self.state.set_auto_ack(enable);
        Ok(())
    }

    fn enter_mode(&mut self, mode: Mode) -> Result<(), T::TransceiverErrorType> {
        match mode {
            Mode::Listening => self.radio.as_rx()?,
            Mode::Transmitting => self.radio.as_tx()?,
            Mode::Idle => (),
        }
        self.state.set_mode(mode);
        Ok(())
    }

    fn ensure_mode(&mut self, mode: Mode) -> Result<(), T::TransceiverErrorType> {
        if self.state.mode() != mode {
            log_debug!("switching from {} to {}", self.state.mode(), mode);
            self.enter_mode(mode)?;
        }
        Ok(())
    }

    fn dump_details(&mut self) -> Result<(), T::TransceiverErrorType> {
        if self.config.print_details() {
            self.radio.print_details()?;
        }
        Ok(())
    }
}

pub(crate) fn check_payload_length<E>(len: usize) -> Result<(), LinkError<E>> {
    if len == 0 || len > MAX_PAYLOAD_LENGTH {
        return Err(LinkError::PayloadLength(len));
    }
    Ok(())
}
