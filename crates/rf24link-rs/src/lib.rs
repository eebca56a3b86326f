#![doc(
    html_logo_url = "https://raw.githubusercontent.com/nRF24/rf24-rs/main/docs/src/images/logo-square.png"
)]
#![doc(html_favicon_url = "https://github.com/nRF24/rf24-rs/raw/main/docs/src/images/favicon.ico")]
#![doc = include_str!("../README.md")]
//!
//! ## Lifecycle API
//!
//! - [`LinkController::new()`](fn@crate::LinkController::new)
//! - [`LinkController::with_config()`](fn@crate::LinkController::with_config)
//! - [`LinkController::begin()`](fn@crate::LinkController::begin)
//! - [`LinkController::release()`](fn@crate::LinkController::release)
//!
//! ## Sender API
//!
//! - [`LinkController::send()`](fn@crate::LinkController::send)
//! - [`LinkController::send_only()`](fn@crate::LinkController::send_only)
//! - [`LinkController::change_address_and_send()`](fn@crate::LinkController::change_address_and_send)
//! - [`LinkController::set_auto_ack()`](fn@crate::LinkController::set_auto_ack)
//!
//! ## Receiver API
//!
//! - [`LinkController::receive()`](fn@crate::LinkController::receive)
//! - [`LinkController::receive_only()`](fn@crate::LinkController::receive_only)
//!
//! ## Reconfiguration API
//!
//! - [`LinkController::set_channel()`](fn@crate::LinkController::set_channel)
//! - [`LinkController::switch_address()`](fn@crate::LinkController::switch_address)
//! - [`LinkController::reset()`](fn@crate::LinkController::reset)
//! - [`LinkController::flush_buffers()`](fn@crate::LinkController::flush_buffers)
//! - [`LinkController::power_down()`](fn@crate::LinkController::power_down)
//! - [`LinkController::power_up()`](fn@crate::LinkController::power_up)
//! - [`LinkController::print_details()`](fn@crate::LinkController::print_details)
//!
#![no_std]

/// Log a debug message with `defmt` (only on embedded targets with the `defmt` feature).
macro_rules! log_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!($($arg)*);
    };
}

/// Log a warning with `defmt` (only on embedded targets with the `defmt` feature).
macro_rules! log_warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::warn!($($arg)*);
    };
}

mod types;
pub use types::{
    Address, Mode, PowerState, Role, ADDRESS_LENGTH, MAX_PAYLOAD_LENGTH, MAX_RF_CHANNEL,
    READ_PIPE,
};

mod config;
pub use config::LinkConfig;

pub mod transceiver;
pub use transceiver::Transceiver;

mod link;
pub use link::{LinkController, LinkError};

pub use rf24::{DataRate, PaLevel};
