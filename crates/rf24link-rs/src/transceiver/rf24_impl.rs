use super::Transceiver;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use rf24::{
    radio::{
        prelude::{
            EsbAutoAck, EsbChannel, EsbDataRate, EsbDetails, EsbFifo, EsbInit, EsbPaLevel,
            EsbPayloadLength, EsbPipe, EsbPower, EsbRadio, RadioErrorType,
        },
        Nrf24Error, RF24,
    },
    DataRate, PaLevel,
};

impl<SPI, DO, DELAY> Transceiver for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type TransceiverErrorType = <Self as RadioErrorType>::Error;

    fn init(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbInit::init(self)
    }

    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::TransceiverErrorType> {
        EsbPaLevel::set_pa_level(self, pa_level)
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::TransceiverErrorType> {
        EsbDataRate::set_data_rate(self, data_rate)
    }

    fn set_dynamic_payloads(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType> {
        EsbPayloadLength::set_dynamic_payloads(self, enable)
    }

    fn set_ack_payloads(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType> {
        EsbAutoAck::set_ack_payloads(self, enable)
    }

    fn set_payload_length(&mut self, length: u8) -> Result<(), Self::TransceiverErrorType> {
        EsbPayloadLength::set_payload_length(self, length)
    }

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::TransceiverErrorType> {
        EsbAutoAck::set_auto_ack(self, enable)
    }

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::TransceiverErrorType> {
        EsbAutoAck::set_auto_retries(self, delay, count)
    }

    fn open_tx_pipe(&mut self, address: &[u8]) -> Result<(), Self::TransceiverErrorType> {
        EsbPipe::open_tx_pipe(self, address)
    }

    fn open_rx_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::TransceiverErrorType> {
        EsbPipe::open_rx_pipe(self, pipe, address)
    }

    fn as_rx(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbRadio::as_rx(self)
    }

    fn as_tx(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbRadio::as_tx(self, None)
    }

    fn send(&mut self, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType> {
        EsbRadio::send(self, buf, false)
    }

    /// Loads `buf` into the TX FIFO and asserts the CE pin.
    ///
    /// The CE pin is left active, so the caller must not assume the
    /// transmission finished when this returns.
    fn write(&mut self, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType> {
        EsbRadio::write(self, buf, false, true)
    }

    fn available(&mut self) -> Result<bool, Self::TransceiverErrorType> {
        EsbFifo::available(self)
    }

    /// A width over 32 is reported as `u8::MAX` rather than an error,
    /// so the caller can discard the RX FIFO.
    fn dynamic_payload_length(&mut self) -> Result<u8, Self::TransceiverErrorType> {
        match EsbPayloadLength::get_dynamic_payload_length(self) {
            Err(Nrf24Error::BinaryCorruption) => Ok(u8::MAX),
            result => result,
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::TransceiverErrorType> {
        let len = buf.len().min(u8::MAX as usize) as u8;
        EsbRadio::read(self, buf, Some(len))
    }

    fn write_ack_payload(&mut self, pipe: u8, buf: &[u8]) -> Result<bool, Self::TransceiverErrorType> {
        EsbAutoAck::write_ack_payload(self, pipe, buf)
    }

    fn flush_rx(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbFifo::flush_rx(self)
    }

    fn flush_tx(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbFifo::flush_tx(self)
    }

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::TransceiverErrorType> {
        EsbChannel::set_channel(self, channel)
    }

    /// The link controller waits for the radio to stabilize,
    /// so the driver's own power-up delay is skipped.
    fn power_up(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbPower::power_up(self, Some(0))
    }

    fn power_down(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbPower::power_down(self)
    }

    fn print_details(&mut self) -> Result<(), Self::TransceiverErrorType> {
        EsbDetails::print_details(self)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::Transceiver;
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::{
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::vec;

    // SPI commands and register offsets used by the nRF24L01
    const W_REGISTER: u8 = 0x20;
    const CONFIG: u8 = 0x00;
    const RF_CH: u8 = 0x05;
    const EN_RXADDR: u8 = 0x02;
    const STATUS: u8 = 0x07;
    const FIFO_STATUS: u8 = 0x17;
    const R_RX_PL_WID: u8 = 0x60;
    const FLUSH_TX: u8 = 0xE1;
    const FLUSH_RX: u8 = 0xE2;
    const R_RX_PAYLOAD: u8 = 0x61;
    const W_TX_PAYLOAD: u8 = 0xA0;
    const MASK_RX_DR: u8 = 1 << 6;
    const MASK_TX_DS: u8 = 1 << 5;
    const MASK_MAX_RT: u8 = 1 << 4;

    #[test]
    pub fn flush_fifos() {
        let spi_expectations = spi_test_expects![
            (vec![FLUSH_RX], vec![0xEu8]),
            (vec![FLUSH_TX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        Transceiver::flush_rx(&mut radio).unwrap();
        Transceiver::flush_tx(&mut radio).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn set_channel() {
        let spi_expectations = spi_test_expects![
            (vec![RF_CH | W_REGISTER, 24u8], vec![0xEu8, 0u8]),
            // the driver clamps the channel to 125
            (vec![RF_CH | W_REGISTER, 125u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        Transceiver::set_channel(&mut radio, 24).unwrap();
        Transceiver::set_channel(&mut radio, 200).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn nothing_available() {
        let spi_expectations = spi_test_expects![
            // read FIFO register value with empty RX FIFO
            (vec![FIFO_STATUS, 0u8], vec![0xEu8, 1u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(!Transceiver::available(&mut radio).unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn dynamic_payload_length() {
        let spi_expectations = spi_test_expects![
            (vec![R_RX_PL_WID, 0u8], vec![0xEu8, 9u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(Transceiver::dynamic_payload_length(&mut radio), Ok(9));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn corrupt_payload_length() {
        let spi_expectations = spi_test_expects![
            (vec![R_RX_PL_WID, 0u8], vec![0xEu8, 33u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(Transceiver::dynamic_payload_length(&mut radio), Ok(u8::MAX));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn power_cycle() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            // power_up() skips the driver's delay
            (vec![CONFIG | W_REGISTER, 0xEu8], vec![0xEu8, 0u8]),
            // power_down()
            (vec![CONFIG | W_REGISTER, 0xCu8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        Transceiver::power_up(&mut radio).unwrap();
        Transceiver::power_down(&mut radio).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn ack_payload_needs_feature() {
        // ACK payloads are disabled by default, so nothing is written
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            Transceiver::write_ack_payload(&mut radio, 1, b"Received!"),
            Ok(false)
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn write_requests_ack_and_starts_tx() {
        // static payload length is 32 by default, so the payload is padded
        let mut tx_payload = [0u8; 33];
        tx_payload[0] = W_TX_PAYLOAD;
        tx_payload[1..7].copy_from_slice(b"Hello!");

        // CE is left active after the payload is loaded
        let ce_expectations = [PinTransaction::set(PinState::High)];
        let spi_expectations = spi_test_expects![
            // clear the tx_ds and max_rt events
            (
                vec![STATUS | W_REGISTER, MASK_MAX_RT | MASK_TX_DS],
                vec![0xEu8, 0u8],
            ),
            (tx_payload.to_vec(), vec![0xEu8; 33]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(Transceiver::write(&mut radio, b"Hello!"), Ok(true));
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn read_uses_buffer_length() {
        let mut rx_response = vec![0xEu8];
        rx_response.extend_from_slice(b"Hello!");
        let spi_expectations = spi_test_expects![
            // only 6 bytes are fetched from the RX FIFO
            (vec![R_RX_PAYLOAD, 0, 0, 0, 0, 0, 0], rx_response),
            // clear the rx_dr event
            (vec![STATUS | W_REGISTER, MASK_RX_DR], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 32];
        assert_eq!(Transceiver::read(&mut radio, &mut buf[..6]), Ok(6));
        assert_eq!(&buf[..6], b"Hello!");
        assert_eq!(buf[6..], [0u8; 26]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn as_tx_enters_standby() {
        let ce_expectations = [PinTransaction::set(PinState::Low)];
        let spi_expectations = spi_test_expects![
            // clear PRIM_RX flag
            (vec![CONFIG | W_REGISTER, 0xCu8], vec![0xEu8, 0u8]),
            // pipe 0 is opened to receive ACK packets
            (vec![EN_RXADDR, 0u8], vec![0xEu8, 0u8]),
            (vec![EN_RXADDR | W_REGISTER, 1u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        Transceiver::as_tx(&mut radio).unwrap();
        spi.done();
        ce_pin.done();
    }
}
