//! Things shared by the `sender` and `receiver` demo applications.
#![no_std]

#[cfg(feature = "linux")]
pub mod linux;

use anyhow::{anyhow, Error};
use core::fmt::Debug;
use rf24link::{Address, LinkError};

/// The address the sender writes to (and the receiver reads from).
pub const SENDER_ADDRESS: Address = [1, 2, 3, 4, 5];
/// The address the receiver writes to (and the sender reads from).
pub const RECEIVER_ADDRESS: Address = [6, 7, 8, 9, 10];

/// Describe a [`LinkError`] for `anyhow`.
///
/// The radio's own error type only implements [`Debug`].
pub fn link_err<E: Debug>(err: LinkError<E>) -> Error {
    match err {
        LinkError::BringUp(e) => anyhow!("radio is not responding: {e:?}"),
        LinkError::Radio(e) => anyhow!("radio failed: {e:?}"),
        LinkError::Reconfigure(e) => anyhow!("radio failed to reconfigure: {e:?}"),
        LinkError::NotInitialized => anyhow!("link was not started"),
        LinkError::PoweredDown => anyhow!("radio is powered down"),
        LinkError::PayloadLength(len) => anyhow!("{len} is not a valid payload length"),
        LinkError::BufferTooSmall { needed, available } => {
            anyhow!("a {needed} byte payload does not fit in {available} bytes")
        }
    }
}
