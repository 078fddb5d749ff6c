//! Port topology derivation.
//!
//! A relay's port list is a pure function of its pole count and throw
//! arity. The ordering is fixed:
//!
//! - index [`COIL`] (0): the coil input
//! - indices `1..=poles`: the per-pole wiper inputs, in pole order
//! - the remaining indices: outputs, one block per pole in pole order; a
//!   double-throw block is the normally-open-side contact then the
//!   normally-closed-side contact
//!
//! The resting-contact choice and the bit width do not move ports around, so
//! edits to those never force the engine to rewire an instance.

use crate::config::{RelayConfig, ThrowArity};

/// Port index of the coil input. Always 0.
pub const COIL: usize = 0;

/// Which contact leg a double-throw output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrowSide {
    /// The contact that rests open.
    NormallyOpen,
    /// The contact that rests closed.
    NormallyClosed,
}

/// The role a port index plays in the relay's contract with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortRole {
    /// Control input driving the latch.
    Coil,
    /// Wiper input of one pole.
    PoleInput {
        /// Pole number, `0..poles`.
        pole: usize,
    },
    /// Output contact of one pole.
    ThrowOutput {
        /// Pole number, `0..poles`.
        pole: usize,
        /// Contact leg; single-throw relays only have the normally-open side.
        side: ThrowSide,
    },
}

/// Derived port counts and index mapping for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortTopology {
    /// Input ports: the coil plus one wiper per pole.
    pub inputs: usize,
    /// Output ports: one per pole, doubled for double throw.
    pub outputs: usize,
    /// Total port count.
    pub total: usize,
    throws: ThrowArity,
}

impl PortTopology {
    /// Derive the topology for a configuration.
    ///
    /// Pure in `poles` and `throws`; `contacts` and `width` play no part.
    ///
    /// # Examples
    ///
    /// ```
    /// use armature_relay::{PortTopology, RelayConfig, ThrowArity, PoleCount};
    ///
    /// let mut config = RelayConfig::default();
    /// config.poles = PoleCount::new(3).unwrap();
    /// config.throws = ThrowArity::Double;
    ///
    /// let topology = PortTopology::of(&config);
    /// assert_eq!(topology.inputs, 4);
    /// assert_eq!(topology.outputs, 6);
    /// assert_eq!(topology.total, 10);
    /// ```
    pub fn of(config: &RelayConfig) -> Self {
        let poles = config.poles.get();
        let inputs = poles + 1;
        let outputs = poles * config.throws.throws_per_pole();
        Self {
            inputs,
            outputs,
            total: inputs + outputs,
            throws: config.throws,
        }
    }

    /// Number of poles this topology was derived for.
    #[inline]
    pub const fn poles(&self) -> usize {
        self.inputs - 1
    }

    /// Port index of one pole's wiper input.
    pub fn pole_input(&self, pole: usize) -> usize {
        assert!(pole < self.poles(), "pole {} out of range", pole);
        pole + 1
    }

    /// Port index of one pole's output contact.
    ///
    /// Single-throw relays have only the normally-open-side contact; asking
    /// for the normally-closed side of a single-throw pole is a caller bug.
    pub fn output(&self, pole: usize, side: ThrowSide) -> usize {
        assert!(pole < self.poles(), "pole {} out of range", pole);
        match self.throws {
            ThrowArity::Single => {
                assert!(
                    side == ThrowSide::NormallyOpen,
                    "single-throw pole has no normally-closed contact"
                );
                self.inputs + pole
            }
            ThrowArity::Double => {
                let leg = match side {
                    ThrowSide::NormallyOpen => 0,
                    ThrowSide::NormallyClosed => 1,
                };
                self.inputs + pole * 2 + leg
            }
        }
    }

    /// The role of a port index. Total inverse of the index helpers.
    pub fn role(&self, index: usize) -> PortRole {
        assert!(index < self.total, "port index {} out of range", index);
        if index == COIL {
            PortRole::Coil
        } else if index < self.inputs {
            PortRole::PoleInput { pole: index - 1 }
        } else {
            let offset = index - self.inputs;
            match self.throws {
                ThrowArity::Single => PortRole::ThrowOutput {
                    pole: offset,
                    side: ThrowSide::NormallyOpen,
                },
                ThrowArity::Double => PortRole::ThrowOutput {
                    pole: offset / 2,
                    side: if offset % 2 == 0 {
                        ThrowSide::NormallyOpen
                    } else {
                        ThrowSide::NormallyClosed
                    },
                },
            }
        }
    }

    /// All port roles in index order.
    pub fn roles(&self) -> impl Iterator<Item = PortRole> + '_ {
        (0..self.total).map(|index| self.role(index))
    }
}
