use bitfield_struct::bitfield;

use crate::types::{Mode, Role};

/// The link controller's cached state, packed into a single byte.
#[bitfield(u8, order = Msb)]
pub(crate) struct LinkState {
    #[bits(2)]
    _padding: u8,

    /// Has [`LinkController::begin()`](fn@crate::LinkController::begin) succeeded?
    pub initialized: bool,

    /// Is the auto-ack feature enabled on all pipes?
    pub auto_ack: bool,

    pub powered: bool,

    #[bits(1)]
    pub role: Role,

    #[bits(2)]
    pub mode: Mode,
}
