use anyhow::Result;
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

    link.begin(&RECEIVER_ADDRESS, &SENDER_ADDRESS, Role::Receiver)
        .map_err(link_err)?;
    if let Some(channel) = channel_arg()? {
        link.set_channel(channel, Role::Receiver)
            .map_err(link_err)?;
    }
    println!("Receiver is ready");

    // sent with the acknowledgement of the next payload received
    let ack = b"Received!\0";
    let mut buf = [0u8; MAX_PAYLOAD_LENGTH];
    loop {
        let len = link
            .receive(&mut buf, Some(ack.as_slice()))
            .map_err(link_err)?;
        if len > 0 {
            println!("Received {len} bytes: {}", String::from_utf8_lossy(&buf[..len]));
        }
    }
}
