use embedded_hal::delay::DelayNs;

use super::{check_payload_length, LinkController, LinkError};
use crate::{
    transceiver::Transceiver,
    types::{Address, Mode},
};

impl<T, D> LinkController<T, D>
where
    T: Transceiver,
    D: DelayNs,
{
    /// Blocking transmission of `buf` on the current write pipe.
    ///
    /// Both FIFOs are flushed before transmitting, so any stale data is discarded.
    /// The radio's auto-retry policy (set by [`LinkController::begin()`]) governs
    /// retransmission; no retries are attempted in software.
    ///
    /// Returns the length of the ACK payload copied into `ack_buf`.
    /// A length of `0` means the peer did not acknowledge the payload or
    /// the acknowledgement carried no data. Remember that an ACK payload is the
    /// one the peer queued while receiving the *previous* payload.
    /// An ACK payload longer than `ack_buf` is discarded (also returning `0`);
    /// the payload in `buf` was still delivered.
    ///
    /// ```ignore
    /// let mut ack = [0u8; 32];
    /// let len = link.send(b"Hello!\0", &mut ack)?;
    /// if len > 0 {
    ///     println!("peer said {:?}", &ack[..len]);
    /// }
    /// ```
    pub fn send(
        &mut self,
        buf: &[u8],
        ack_buf: &mut [u8],
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        check_payload_length(buf.len())?;
        self.ensure_mode(Mode::Transmitting)
            .map_err(LinkError::Radio)?;
        self.transmit(buf, ack_buf)
    }

    /// Non-blocking transmission of `buf` without requesting an acknowledgement.
    ///
    /// This disables the auto-ack feature (and thus ACK payloads) and leaves it
    /// disabled. Use [`LinkController::set_auto_ack()`] before relying on
    /// [`LinkController::send()`] again.
    ///
    /// Returns `true` if the payload was loaded into the radio's TX FIFO.
    pub fn send_only(&mut self, buf: &[u8]) -> Result<bool, LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        check_payload_length(buf.len())?;
        self.ensure_mode(Mode::Transmitting)
            .map_err(LinkError::Radio)?;
        self.apply_auto_ack(false).map_err(LinkError::Radio)?;
        self.radio.write(buf).map_err(LinkError::Radio)
    }

    /// Open the write pipe with `address`, then behave as [`LinkController::send()`].
    ///
    /// The read pipe is not touched. Subsequent calls to [`LinkController::send()`]
    /// also use `address`, but [`LinkController::tx_address()`] still reports (and
    /// [`LinkController::reset()`] still restores) the address given to
    /// [`LinkController::begin()`] or [`LinkController::switch_address()`].
    pub fn change_address_and_send(
        &mut self,
        address: &Address,
        buf: &[u8],
        ack_buf: &mut [u8],
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        check_payload_length(buf.len())?;
        self.ensure_mode(Mode::Transmitting)
            .map_err(LinkError::Radio)?;
        self.radio.open_tx_pipe(address).map_err(LinkError::Radio)?;
        log_debug!("write pipe reopened for a single send");
        self.transmit(buf, ack_buf)
    }

    /// Enable or disable the auto-ack feature.
    ///
    /// Enabling it also restores the ACK payloads feature.
    pub fn set_auto_ack(&mut self, enable: bool) -> Result<(), LinkError<T::TransceiverErrorType>> {
        self.check_initialized()?;
        self.apply_auto_ack(enable).map_err(LinkError::Radio)
    }

    fn transmit(
        &mut self,
        buf: &[u8],
        ack_buf: &mut [u8],
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        self.radio.flush_tx().map_err(LinkError::Radio)?;
        self.radio.flush_rx().map_err(LinkError::Radio)?;
        if !self.radio.send(buf).map_err(LinkError::Radio)? {
            log_debug!("payload was not acknowledged");
            return Ok(0);
        }
        if !self.radio.available().map_err(LinkError::Radio)? {
            return Ok(0);
        }
        match self.read_pending(ack_buf) {
            Err(LinkError::BufferTooSmall { .. }) => {
                log_warn!("ACK payload discarded; buffer too small");
                Ok(0)
            }
            result => result,
        }
    }
}
