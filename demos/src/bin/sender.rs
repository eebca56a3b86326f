use anyhow::Result;
use embedded_hal::delay::DelayNs;
use rf24::radio::RF24;
use rf24link::{LinkController, Role, MAX_PAYLOAD_LENGTH};
use rf24link_demos::{
    link_err,
    linux::{channel_arg, BoardHardware, Delay as DelayImpl},
    RECEIVER_ADDRESS, SENDER_ADDRESS,
};

fn main() -> Result<()> {
    let mut board = BoardHardware::default()?;
    let radio = RF24::new(
        board.default_ce_pin()?,
        BoardHardware::default_spi_device()?,
        DelayImpl,
    );
    let mut link = LinkController::new(radio, DelayImpl);

    // nothing else works if the radio is not responding
    link.begin(&SENDER_ADDRESS, &RECEIVER_ADDRESS, Role::Sender)
        .map_err(link_err)?;
    if let Some(channel) = channel_arg()? {
        link.set_channel(channel, Role::Sender).map_err(link_err)?;
    }
    println!("Sender is ready");

    // the null terminator is part of the payload
    let payload = b"Hello!\0";
    let mut ack = [0u8; MAX_PAYLOAD_LENGTH];
    loop {
        let len = link.send(payload, &mut ack).map_err(link_err)?;
        if len > 0 {
            println!("Received ACK payload: {}", String::from_utf8_lossy(&ack[..len]));
        }
        DelayImpl.delay_ms(1000);
    }
}
