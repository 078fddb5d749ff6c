//! Relay configuration.
//!
//! A relay instance is described by four parameters: how many poles it
//! switches, how many throws each pole has, which contact the poles rest on
//! when the coil is de-energized, and the bit width of the switched signals.
//! All four are validated at construction, so a [`RelayConfig`] in hand is
//! valid by construction and nothing downstream re-checks ranges.

use armature_signal::BitWidth;
use thiserror::Error;

use crate::latch::LatchPosition;
use crate::MAX_POLES;

/// Result type for configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised at the configuration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Pole count outside the supported range.
    #[error("pole count {0} outside supported range 1..={max}", max = MAX_POLES)]
    PolesOutOfRange(usize),
}

/// Number of poles, always in `1..=MAX_POLES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoleCount(u8);

impl PoleCount {
    /// Smallest supported relay: one pole.
    pub const MIN: Self = Self(1);

    /// Largest supported relay.
    pub const MAX: Self = Self(MAX_POLES as u8);

    /// Validate and wrap a pole count.
    ///
    /// # Examples
    ///
    /// ```
    /// use armature_relay::PoleCount;
    ///
    /// assert_eq!(PoleCount::new(2).unwrap().get(), 2);
    /// assert!(PoleCount::new(0).is_err());
    /// assert!(PoleCount::new(9).is_err());
    /// ```
    pub fn new(poles: usize) -> Result<Self> {
        if poles == 0 || poles > MAX_POLES {
            return Err(ConfigError::PolesOutOfRange(poles));
        }
        Ok(Self(poles as u8))
    }

    /// The pole count.
    #[inline]
    pub const fn get(&self) -> usize {
        self.0 as usize
    }
}

/// How many output contacts each pole can connect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowArity {
    /// One contact per pole: the pole is connected or it floats.
    Single,
    /// Two contacts per pole: the pole is always connected to exactly one.
    Double,
}

impl ThrowArity {
    /// Output ports contributed by each pole.
    #[inline]
    pub const fn throws_per_pole(&self) -> usize {
        match self {
            ThrowArity::Single => 1,
            ThrowArity::Double => 2,
        }
    }
}

/// The poles' resting contact state when the coil is de-energized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestContacts {
    /// Contacts rest open; energizing the coil closes them.
    NormallyOpen,
    /// Contacts rest closed; energizing the coil opens them.
    NormallyClosed,
}

impl RestContacts {
    /// The latch position the relay rests in.
    #[inline]
    pub const fn resting(&self) -> LatchPosition {
        match self {
            RestContacts::NormallyOpen => LatchPosition::Open,
            RestContacts::NormallyClosed => LatchPosition::Closed,
        }
    }

    /// The latch position an energized coil drives toward.
    #[inline]
    pub const fn energized(&self) -> LatchPosition {
        self.resting().flipped()
    }
}

/// Declarative parameters of one relay instance.
///
/// Immutable value type; editing the configuration of a placed instance
/// means handing a new `RelayConfig` to
/// [`Relay::set_config`](crate::Relay::set_config), which re-derives the
/// port topology when the shape-affecting fields changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelayConfig {
    /// Independently switched circuit paths.
    pub poles: PoleCount,
    /// Single or double throw.
    pub throws: ThrowArity,
    /// Resting contact state.
    pub contacts: RestContacts,
    /// Bit width of the coil and of every switched path.
    pub width: BitWidth,
}

impl Default for RelayConfig {
    /// One pole, single throw, normally open, one bit wide.
    fn default() -> Self {
        Self {
            poles: PoleCount::MIN,
            throws: ThrowArity::Single,
            contacts: RestContacts::NormallyOpen,
            width: BitWidth::ONE,
        }
    }
}
