//! Latch mechanics: the behavioral core of the relay.
//!
//! Both relay variants reduce each evaluation to one question: which contact
//! is every pole connected to right now? That answer is a [`LatchPosition`],
//! and the two variants differ only in how they produce it:
//!
//! - the **momentary** relay recomputes it combinationally from the coil,
//!   like a physical relay whose armature follows the coil field
//! - the **latching** relay keeps mechanical memory and toggles on a rising
//!   coil edge, like an impulse relay
//!
//! The variants are one [`Mechanism`] enum rather than a trait hierarchy;
//! there are exactly two and the engine selects one at placement time.

use armature_signal::{BitWidth, Signal};

use crate::config::RestContacts;

/// Which contact a pole is currently connected to.
///
/// `Open` and `Closed` name the armature position, not a particular output
/// leg: a double-throw pole in `Open` position is still connected, just to
/// its other contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatchPosition {
    /// Disconnected from the through contact.
    Open,
    /// Connected to the through contact.
    Closed,
}

impl LatchPosition {
    /// The other position.
    #[inline]
    pub const fn flipped(&self) -> Self {
        match self {
            LatchPosition::Open => LatchPosition::Closed,
            LatchPosition::Closed => LatchPosition::Open,
        }
    }
}

/// Which behavioral variant a relay instance is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelayKind {
    /// Latch follows the coil each step; no persisted state.
    Momentary,
    /// Latch toggles on a rising coil edge; persisted per instance.
    Latching,
}

/// Latch position of a momentary relay for the current coil value.
///
/// The relay is energized only by the canonical one-bit TRUE: the coil port
/// shares the instance's configured width, and a wider coil value never
/// compares equal to TRUE, so a wide coil leaves the relay at rest. Any
/// partially or fully undefined coil also reads as de-energized.
///
/// # Examples
///
/// ```
/// use armature_relay::{momentary_position, LatchPosition, RestContacts};
/// use armature_signal::Signal;
///
/// let contacts = RestContacts::NormallyOpen;
/// assert_eq!(momentary_position(contacts, &Signal::TRUE), LatchPosition::Closed);
/// assert_eq!(momentary_position(contacts, &Signal::FALSE), LatchPosition::Open);
/// ```
pub fn momentary_position(contacts: RestContacts, coil: &Signal) -> LatchPosition {
    if coil.is_fully_defined() && *coil == Signal::TRUE {
        contacts.energized()
    } else {
        contacts.resting()
    }
}

/// Persisted state of one latching relay instance.
///
/// Owned by the instance wrapper and created when the instance is placed;
/// the engine never sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatchState {
    last_coil: Signal,
    position: LatchPosition,
}

impl LatchState {
    /// Fresh state: latch at the resting position, edge detector primed
    /// with a fully unknown coil so the first TRUE alone cannot flip.
    pub fn new(contacts: RestContacts) -> Self {
        Self {
            last_coil: Signal::unknown(BitWidth::ONE),
            position: contacts.resting(),
        }
    }

    /// Advance one evaluation step and return the latch position.
    ///
    /// The latch flips exactly on a rising edge: the previous coil value was
    /// the canonical FALSE and the current one is the canonical TRUE. A coil
    /// that is not fully defined neither flips the latch nor disturbs the
    /// edge detector: the last fully-defined value is retained, so a FALSE
    /// baseline still arms a rising edge across a floating interlude.
    pub fn step(&mut self, coil: &Signal) -> LatchPosition {
        if coil.is_fully_defined() {
            if self.last_coil == Signal::FALSE && *coil == Signal::TRUE {
                self.position = self.position.flipped();
            }
            self.last_coil = *coil;
        }
        self.position
    }

    /// Current latch position without touching the edge detector.
    ///
    /// Inspection paths (rendering, probing) must use this; evaluating the
    /// latch with side effects from a drawing pass would consume edges.
    #[inline]
    pub const fn peek(&self) -> LatchPosition {
        self.position
    }
}

/// The state machine of one relay instance: one of the two variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mechanism {
    /// Combinational; carries no state.
    Momentary,
    /// Edge-triggered toggle with persisted state.
    Latching(LatchState),
}

impl Mechanism {
    /// Build the mechanism for a variant, with the latching state
    /// initialized to the resting position.
    pub fn for_kind(kind: RelayKind, contacts: RestContacts) -> Self {
        match kind {
            RelayKind::Momentary => Mechanism::Momentary,
            RelayKind::Latching => Mechanism::Latching(LatchState::new(contacts)),
        }
    }

    /// Compute the latch position for this step, committing any transition.
    pub fn step(&mut self, contacts: RestContacts, coil: &Signal) -> LatchPosition {
        match self {
            Mechanism::Momentary => momentary_position(contacts, coil),
            Mechanism::Latching(state) => state.step(coil),
        }
    }

    /// Latch position without committing a transition.
    ///
    /// The momentary variant recomputes combinationally (it has no state to
    /// protect); the latching variant reads its persisted position.
    pub fn peek(&self, contacts: RestContacts, coil: &Signal) -> LatchPosition {
        match self {
            Mechanism::Momentary => momentary_position(contacts, coil),
            Mechanism::Latching(state) => state.peek(),
        }
    }
}
