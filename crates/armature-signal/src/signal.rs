//! Packed multi-valued signal values.

use crate::{BitWidth, Result, SignalError};

/// One bit of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bit {
    /// Driven low.
    Zero,
    /// Driven high.
    One,
    /// Not driven at all.
    Floating,
    /// Driven to conflicting levels.
    Error,
}

impl Bit {
    /// True for a concretely driven level (Zero or One).
    #[inline]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Bit::Zero | Bit::One)
    }
}

/// A fixed-width multi-valued logic quantity.
///
/// Stored as one `u64` mask per bit plane, kept in canonical form:
/// mask bits above the width are clear, an error bit is never also floating,
/// and the value bit under a floating or error bit is clear. Because of
/// canonical form, derived equality means "same width, same per-bit states".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    width: BitWidth,
    value: u64,
    floating: u64,
    error: u64,
}

impl Signal {
    /// The canonical one-bit TRUE quantity.
    pub const TRUE: Self = Self {
        width: BitWidth::ONE,
        value: 1,
        floating: 0,
        error: 0,
    };

    /// The canonical one-bit FALSE quantity.
    pub const FALSE: Self = Self {
        width: BitWidth::ONE,
        value: 0,
        floating: 0,
        error: 0,
    };

    /// A value of the given width with every bit floating.
    ///
    /// This is what an undriven output reads as.
    pub const fn unknown(width: BitWidth) -> Self {
        Self {
            width,
            value: 0,
            floating: width.mask(),
            error: 0,
        }
    }

    /// All-zero fully defined value.
    pub const fn zero(width: BitWidth) -> Self {
        Self {
            width,
            value: 0,
            floating: 0,
            error: 0,
        }
    }

    /// All-one fully defined value.
    pub const fn ones(width: BitWidth) -> Self {
        Self {
            width,
            value: width.mask(),
            floating: 0,
            error: 0,
        }
    }

    /// Fully defined value from packed bits; bits above the width are
    /// discarded.
    pub const fn from_u64(width: BitWidth, bits: u64) -> Self {
        Self {
            width,
            value: bits & width.mask(),
            floating: 0,
            error: 0,
        }
    }

    /// Build a signal from individual bits, index 0 being the LSB.
    ///
    /// # Examples
    ///
    /// ```
    /// use armature_signal::{Bit, Signal};
    ///
    /// let s = Signal::from_bits(&[Bit::One, Bit::Floating]).unwrap();
    /// assert_eq!(s.width().get(), 2);
    /// assert_eq!(s.bit(0), Bit::One);
    /// assert_eq!(s.bit(1), Bit::Floating);
    /// assert!(!s.is_fully_defined());
    /// ```
    pub fn from_bits(bits: &[Bit]) -> Result<Self> {
        let width = BitWidth::new(bits.len())?;
        let mut value = 0u64;
        let mut floating = 0u64;
        let mut error = 0u64;
        for (i, bit) in bits.iter().enumerate() {
            match bit {
                Bit::Zero => {}
                Bit::One => value |= 1 << i,
                Bit::Floating => floating |= 1 << i,
                Bit::Error => error |= 1 << i,
            }
        }
        Ok(Self {
            width,
            value,
            floating,
            error,
        })
    }

    /// The signal's width.
    #[inline]
    pub const fn width(&self) -> BitWidth {
        self.width
    }

    /// The state of bit `index` (0 is the LSB).
    ///
    /// Panics if `index` is outside the width; ports are typed with a fixed
    /// width, so an out-of-range index is a caller bug.
    pub fn bit(&self, index: usize) -> Bit {
        assert!(
            index < self.width.get(),
            "bit index {} outside width {}",
            index,
            self.width
        );
        let mask = 1u64 << index;
        if self.error & mask != 0 {
            Bit::Error
        } else if self.floating & mask != 0 {
            Bit::Floating
        } else if self.value & mask != 0 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Iterate the bits from LSB to MSB.
    pub fn bits(&self) -> impl Iterator<Item = Bit> + '_ {
        (0..self.width.get()).map(|i| self.bit(i))
    }

    /// True when every bit is concretely Zero or One.
    ///
    /// Only fully defined signals can equal [`Signal::TRUE`] or
    /// [`Signal::FALSE`].
    #[inline]
    pub const fn is_fully_defined(&self) -> bool {
        self.floating == 0 && self.error == 0
    }

    /// Packed bit values, if fully defined.
    pub const fn to_u64(&self) -> Option<u64> {
        if self.is_fully_defined() {
            Some(self.value)
        } else {
            None
        }
    }

    /// Combine with another signal of the same width, as two drivers on one
    /// wire: a floating bit yields the other driver's bit, two driven bits
    /// agree or become an error.
    pub fn resolve(&self, other: &Signal) -> Result<Signal> {
        if self.width != other.width {
            return Err(SignalError::WidthMismatch {
                expected: self.width.get(),
                actual: other.width.get(),
            });
        }
        let mut bits = Vec::with_capacity(self.width.get());
        for (a, b) in self.bits().zip(other.bits()) {
            bits.push(match (a, b) {
                (Bit::Floating, b) => b,
                (a, Bit::Floating) => a,
                (Bit::Error, _) | (_, Bit::Error) => Bit::Error,
                (a, b) if a == b => a,
                _ => Bit::Error,
            });
        }
        Signal::from_bits(&bits)
    }
}

impl std::fmt::Display for Signal {
    /// Renders MSB first: `1`, `0`, `x` for floating, `E` for error.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in (0..self.width.get()).rev() {
            let c = match self.bit(i) {
                Bit::Zero => '0',
                Bit::One => '1',
                Bit::Floating => 'x',
                Bit::Error => 'E',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(width: usize) -> BitWidth {
        BitWidth::new(width).unwrap()
    }

    #[test]
    fn canonical_true_false() {
        assert_eq!(Signal::TRUE.width(), BitWidth::ONE);
        assert_eq!(Signal::TRUE.bit(0), Bit::One);
        assert_eq!(Signal::FALSE.bit(0), Bit::Zero);
        assert!(Signal::TRUE.is_fully_defined());
        assert!(Signal::FALSE.is_fully_defined());
        assert_ne!(Signal::TRUE, Signal::FALSE);
    }

    #[test]
    fn unknown_is_all_floating() {
        let u = Signal::unknown(w(4));
        assert!(!u.is_fully_defined());
        for i in 0..4 {
            assert_eq!(u.bit(i), Bit::Floating, "bit {} should float", i);
        }
        assert_eq!(u.to_u64(), None);
    }

    #[test]
    fn undefined_never_equals_true_or_false() {
        let one_bit_floating = Signal::unknown(BitWidth::ONE);
        assert_ne!(one_bit_floating, Signal::TRUE);
        assert_ne!(one_bit_floating, Signal::FALSE);

        let one_bit_error = Signal::from_bits(&[Bit::Error]).unwrap();
        assert_ne!(one_bit_error, Signal::TRUE);
        assert_ne!(one_bit_error, Signal::FALSE);
    }

    #[test]
    fn wider_value_never_equals_canonical_quantities() {
        // TRUE and FALSE are one bit wide; equality includes width.
        let wide_one = Signal::from_u64(w(2), 0b01);
        assert_ne!(wide_one, Signal::TRUE);
        assert_ne!(Signal::zero(w(2)), Signal::FALSE);
    }

    #[test]
    fn from_u64_discards_bits_above_width() {
        let s = Signal::from_u64(w(4), 0xFF);
        assert_eq!(s.to_u64(), Some(0xF));
        assert_eq!(s, Signal::ones(w(4)));
    }

    #[test]
    fn from_bits_round_trips() {
        let pattern = [Bit::One, Bit::Zero, Bit::Floating, Bit::Error, Bit::One];
        let s = Signal::from_bits(&pattern).unwrap();
        assert_eq!(s.width().get(), 5);
        let collected: Vec<_> = s.bits().collect();
        assert_eq!(collected, pattern);
    }

    #[test]
    fn from_bits_rejects_bad_widths() {
        assert_eq!(
            Signal::from_bits(&[]),
            Err(SignalError::WidthOutOfRange(0))
        );
        let too_wide = vec![Bit::Zero; crate::MAX_WIDTH + 1];
        assert!(Signal::from_bits(&too_wide).is_err());
    }

    #[test]
    fn fully_defined_round_trip() {
        for bits in [0u64, 1, 0b1010, 0xFF] {
            let s = Signal::from_u64(w(8), bits);
            assert!(s.is_fully_defined());
            assert_eq!(s.to_u64(), Some(bits & 0xFF));
        }
    }

    #[test]
    fn resolve_floating_yields_other_driver() {
        let driven = Signal::from_u64(w(2), 0b10);
        let open = Signal::unknown(w(2));
        assert_eq!(driven.resolve(&open).unwrap(), driven);
        assert_eq!(open.resolve(&driven).unwrap(), driven);
    }

    #[test]
    fn resolve_conflict_is_error() {
        let a = Signal::from_bits(&[Bit::One]).unwrap();
        let b = Signal::from_bits(&[Bit::Zero]).unwrap();
        let r = a.resolve(&b).unwrap();
        assert_eq!(r.bit(0), Bit::Error);
    }

    #[test]
    fn resolve_rejects_width_mismatch() {
        let a = Signal::zero(w(2));
        let b = Signal::zero(w(3));
        assert_eq!(
            a.resolve(&b),
            Err(SignalError::WidthMismatch {
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn display_renders_msb_first() {
        let s = Signal::from_bits(&[Bit::One, Bit::Zero, Bit::Floating, Bit::Error]).unwrap();
        assert_eq!(s.to_string(), "Ex01");
        assert_eq!(Signal::TRUE.to_string(), "1");
        assert_eq!(Signal::unknown(w(3)).to_string(), "xxx");
    }
}
