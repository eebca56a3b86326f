use embedded_hal::delay::DelayNs;

use super::{check_payload_length, LinkController, LinkError};
use crate::{
    transceiver::Transceiver,
    types::{Mode, MAX_PAYLOAD_LENGTH, READ_PIPE},
};

impl<T, D> LinkController<T, D>
where
    T: Transceiver,
    D: DelayNs,
{
    /// Poll the radio once for a received payload.
    ///
    /// Returns `0` if nothing was received; `buf` is left untouched in that case.
    /// Otherwise the payload is copied into `buf` and its length is returned.
    ///
    /// If `ack_payload` is given and a payload was received, `ack_payload` is
    /// queued for pipe 1. The radio attaches it to the acknowledgement of the
    /// *next* received payload, not the one just read.
    ///
    /// The radio is put into listening mode if it isn't already.
    /// An `ack_payload` that is empty or longer than 32 bytes is rejected
    /// before anything is read.
    pub fn receive(
        &mut self,
        buf: &mut [u8],
        ack_payload: Option<&[u8]>,
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        self.check_ready()?;
        if let Some(ack) = ack_payload {
            check_payload_length(ack.len())?;
        }
        self.ensure_mode(Mode::Listening)
            .map_err(LinkError::Radio)?;
        if !self.radio.available().map_err(LinkError::Radio)? {
            return Ok(0);
        }
        let len = self.read_pending(buf)?;
        if let (true, Some(ack)) = (len > 0, ack_payload) {
            if !self
                .radio
                .write_ack_payload(READ_PIPE, ack)
                .map_err(LinkError::Radio)?
            {
                log_warn!("ACK payload was not queued");
            }
        }
        Ok(len)
    }

    /// Same as [`LinkController::receive()`] but never queues an ACK payload.
    pub fn receive_only(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        self.receive(buf, None)
    }

    /// Read the next payload in the RX FIFO into `buf`.
    ///
    /// A payload that doesn't fit is still removed from the RX FIFO.
    /// An invalid length reported by the radio discards the whole RX FIFO.
    pub(super) fn read_pending(
        &mut self,
        buf: &mut [u8],
    ) -> Result<usize, LinkError<T::TransceiverErrorType>> {
        let len = self
            .radio
            .dynamic_payload_length()
            .map_err(LinkError::Radio)? as usize;
        if len == 0 || len > MAX_PAYLOAD_LENGTH {
            log_warn!("discarding RX FIFO; reported payload length was {}", len);
            self.radio.flush_rx().map_err(LinkError::Radio)?;
            return Ok(0);
        }
        if len > buf.len() {
            let mut discard = [0u8; MAX_PAYLOAD_LENGTH];
            self.radio
                .read(&mut discard[..len])
                .map_err(LinkError::Radio)?;
            return Err(LinkError::BufferTooSmall {
                needed: len,
                available: buf.len(),
            });
        }
        let read = self
            .radio
            .read(&mut buf[..len])
            .map_err(LinkError::Radio)?;
        Ok(read as usize)
    }
}
