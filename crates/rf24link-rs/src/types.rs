//! This module defines types used to describe the state of a link.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

/// The maximum length (in bytes) of any payload, including ACK payloads.
pub const MAX_PAYLOAD_LENGTH: usize = 32;

/// The length (in bytes) of every pipe address.
pub const ADDRESS_LENGTH: usize = 5;

/// The pipe number used for the link's inbound (read) pipe.
pub const READ_PIPE: u8 = 1;

/// The highest channel supported by the nRF24L01.
pub const MAX_RF_CHANNEL: u8 = 125;

/// A pipe address.
///
/// Both peers of a link must use complementary addresses:
/// peer A's write address is peer B's read address and vice versa.
pub type Address = [u8; ADDRESS_LENGTH];

/// The role a node takes in a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The initiator. Idles in TX mode and receives data only as ACK payloads.
    Sender,
    /// The responder. Idles in RX mode and automatically acknowledges
    /// every received payload.
    Receiver,
}

impl Role {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Role::Sender => 0,
            Role::Receiver => 1,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            1 => Role::Receiver,
            _ => Role::Sender,
        }
    }

    /// The [`Mode`] a radio idles in for this role.
    pub const fn idle_mode(&self) -> Mode {
        match self {
            Role::Sender => Mode::Transmitting,
            Role::Receiver => Mode::Listening,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Role {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Role::Sender => defmt::write!(fmt, "Sender"),
            Role::Receiver => defmt::write!(fmt, "Receiver"),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Role::Sender => write!(f, "Sender"),
            Role::Receiver => write!(f, "Receiver"),
        }
    }
}

/// The radio's operating mode as last set by the link controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Neither listening nor prepared to transmit (not initialized or powered down).
    Idle,
    /// Active RX mode.
    Listening,
    /// Inactive TX mode (StandBy-I), ready to transmit.
    Transmitting,
}

impl Mode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            Mode::Idle => 0,
            Mode::Listening => 1,
            Mode::Transmitting => 2,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value {
            1 => Mode::Listening,
            2 => Mode::Transmitting,
            _ => Mode::Idle,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mode::Idle => defmt::write!(fmt, "Idle"),
            Mode::Listening => defmt::write!(fmt, "Listening"),
            Mode::Transmitting => defmt::write!(fmt, "Transmitting"),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Mode::Idle => write!(f, "Idle"),
            Mode::Listening => write!(f, "Listening"),
            Mode::Transmitting => write!(f, "Transmitting"),
        }
    }
}

/// The radio's power state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerState {
    Up,
    Down,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PowerState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PowerState::Up => defmt::write!(fmt, "Up"),
            PowerState::Down => defmt::write!(fmt, "Down"),
        }
    }
}

impl Display for PowerState {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PowerState::Up => write!(f, "Up"),
            PowerState::Down => write!(f, "Down"),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Mode, PowerState, Role};
    use std::{format, string::ToString};

    #[test]
    fn role_bits() {
        for role in [Role::Sender, Role::Receiver] {
            assert_eq!(Role::from_bits(role.into_bits()), role);
        }
        // out of range values fall back to the sender role
        assert_eq!(Role::from_bits(3), Role::Sender);
    }

    #[test]
    fn mode_bits() {
        for mode in [Mode::Idle, Mode::Listening, Mode::Transmitting] {
            assert_eq!(Mode::from_bits(mode.into_bits()), mode);
        }
        assert_eq!(Mode::from_bits(3), Mode::Idle);
    }

    #[test]
    fn idle_mode() {
        assert_eq!(Role::Sender.idle_mode(), Mode::Transmitting);
        assert_eq!(Role::Receiver.idle_mode(), Mode::Listening);
    }

    #[test]
    fn display() {
        assert_eq!(Role::Receiver.to_string(), "Receiver");
        assert_eq!(format!("{}", Mode::Transmitting), "Transmitting");
        assert_eq!(PowerState::Down.to_string(), "Down");
    }
}
