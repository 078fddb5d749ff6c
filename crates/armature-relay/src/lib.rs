//! Armature Relay Component Model
//!
//! The electrical behavior of a relay-style switching component inside a
//! digital-logic circuit simulator: port topology derivation and the
//! per-step transfer function from input signals and mechanical state to
//! output signals.
//!
//! # Two Variants, One Shape
//!
//! A relay is a coil and a set of switched paths (poles). Both variants
//! share the port topology and the output routing; they differ only in how
//! the latch position is produced:
//!
//! - **Momentary** ([`RelayKind::Momentary`]): the armature follows the
//!   coil. Energized coil → active position, anything else → rest. Purely
//!   combinational, no persisted state.
//! - **Latching** ([`RelayKind::Latching`]): the armature toggles on each
//!   rising coil edge and holds its position otherwise. This mechanical
//!   memory persists across steps and even across configuration edits.
//!
//! # Evaluation Flow
//!
//! Per scheduled evaluation, the engine hands a [`Relay`] the current value
//! of every input port (coil first, then the pole wipers). The mechanism
//! computes the latch position, the router turns that into one
//! [`PortDrive`] per output port, each tagged with a one-tick propagation
//! delay. Undriven contacts read as floating, never as zero.
//!
//! # What This Crate Is Not
//!
//! No rendering, no attribute-editing UI, no scheduling: those belong to
//! the surrounding simulator. No physical timing, bounce or analog
//! behavior: this is a synchronous step-based digital abstraction.

mod config;
mod latch;
mod relay;
mod router;
mod topology;

pub use config::{ConfigError, PoleCount, RelayConfig, RestContacts, ThrowArity};
pub use latch::{momentary_position, LatchPosition, LatchState, Mechanism, RelayKind};
pub use relay::Relay;
pub use router::{route, PortDrive, PROPAGATION_DELAY};
pub use topology::{PortRole, PortTopology, ThrowSide, COIL};

/// Most poles a single relay component supports.
pub const MAX_POLES: usize = 8;
