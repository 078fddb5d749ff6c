//! Armature Signal Values
//!
//! Multi-valued logic quantities for a digital circuit simulator.
//!
//! # Four-State Logic
//!
//! A wire in a simulated circuit is not merely true or false. Each bit of a
//! [`Signal`] is in one of four states:
//!
//! - **Zero** / **One**: concretely driven logic levels
//! - **Floating**: nothing drives the bit (a disconnected contact, an
//!   unpowered bus)
//! - **Error**: conflicting drivers
//!
//! A signal is *fully defined* when every bit is Zero or One. Only fully
//! defined signals can compare equal to the canonical [`Signal::TRUE`] and
//! [`Signal::FALSE`] quantities; a partially floating value never does.
//!
//! # Representation
//!
//! Signals are fixed-width (1 to [`MAX_WIDTH`] bits) and stored as packed
//! bit masks, so they are `Copy` and equality is a word compare. The packed
//! form is kept canonical: mask bits above the width are zero, and the value
//! bit under a floating or error bit is zero.

mod error;
mod signal;
mod width;

pub use error::{Result, SignalError};
pub use signal::{Bit, Signal};
pub use width::BitWidth;

/// Widest supported signal, in bits.
pub const MAX_WIDTH: usize = 64;

// The packed representation keeps one u64 mask per bit plane.
const _: () = assert!(MAX_WIDTH <= u64::BITS as usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bound_fits_mask_storage() {
        assert!(MAX_WIDTH <= 64);
        assert_eq!(BitWidth::new(MAX_WIDTH).unwrap().get(), MAX_WIDTH);
        assert!(BitWidth::new(MAX_WIDTH + 1).is_err());
    }
}
