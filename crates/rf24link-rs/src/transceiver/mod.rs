//! The capabilities a link controller needs from a transceiver driver.
//!
//! [`Transceiver`] is implemented for [`RF24`](struct@rf24::radio::RF24)
//! so that any radio instantiated with the `rf24-rs` crate can be handed
//! to a [`LinkController`](struct@crate::LinkController).

use rf24::{DataRate, PaLevel};

mod rf24_impl;

/// A trait to represent the subset of an ESB capable transceiver used by a link.
///
/// Every method maps onto a single driver operation. Sequencing (and any
/// settling delays between operations) is the responsibility of the caller.
pub trait Transceiver {
    type TransceiverErrorType;

    /// Initialize the radio's hardware.
    ///
    /// This fails if the radio is not responding.
    /// A successful initialization leaves the radio powered up in inactive TX mode.
    fn init(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Set the radio's Power Amplitude Level (PA Level).
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::TransceiverErrorType>;

    /// Set the radio's Data Rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::TransceiverErrorType>;

    /// Set the dynamic payloads feature for all pipes.
    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType>;

    /// Enable or disable payloads attached to automatic ACK packets.
    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType>;

    /// Set the radio's static payload length.
    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::TransceiverErrorType>;

    /// Enable or disable automatic acknowledgements for all pipes.
    ///
    /// Disabling this feature also disables ACK payloads.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType>;

    /// Set the hardware retry policy for transmissions.
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::TransceiverErrorType>;

    /// Set the address used for transmitting (and for receiving ACK packets).
    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::TransceiverErrorType>;

    /// Set the address a `pipe` listens to in RX mode.
    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::TransceiverErrorType>;

    /// Put the radio into active RX mode.
    fn as_rx(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Put the radio into inactive TX mode.
    fn as_tx(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Blocking transmission of `buf`.
    ///
    /// Returns `true` if the payload was acknowledged
    /// (or sent when auto-ack is disabled).
    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType>;

    /// Non-blocking transmission of `buf`.
    ///
    /// Returns `true` if the payload was loaded into the TX FIFO.
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType>;

    /// Is there a payload in the RX FIFO?
    fn available(&mut self) -> Result<bool, Self::TransceiverErrorType>;

    /// The length of the next payload in the RX FIFO.
    fn dynamic_payload_length(&mut self) -> Result<u8, Self::TransceiverErrorType>;

    /// Read `buf.len()` bytes of the next payload in the RX FIFO.
    ///
    /// Returns the number of bytes read.
    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::TransceiverErrorType>;

    /// Queue `buf` to be attached to the next ACK packet sent for `pipe`.
    ///
    /// Returns `true` if the payload was queued.
    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType>;

    /// Discard the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Discard the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Set the radio's channel.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::TransceiverErrorType>;

    /// Power up the radio without waiting for it to stabilize.
    fn power_up(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Power down the radio.
    fn power_down(&mut self) -> Result<(), Self::TransceiverErrorType>;

    /// Print details about radio's current configuration.
    fn print_details(&mut self) -> Result<(), Self::TransceiverErrorType>;
}
