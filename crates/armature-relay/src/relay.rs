//! The relay instance wrapper: what the simulation engine holds.
//!
//! One [`Relay`] value per placed component. The engine's contract is
//! narrow: hand in the current input port values once per scheduled
//! evaluation, take back the output drives; consult the topology after a
//! configuration edit to know whether rewiring is needed; use [`Relay::peek`]
//! for inspection paths that must not commit state transitions.

use armature_signal::Signal;
use tracing::trace;

use crate::config::RelayConfig;
use crate::latch::{LatchPosition, Mechanism, RelayKind};
use crate::router::{route, PortDrive};
use crate::topology::{PortTopology, COIL};

/// One placed relay instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relay {
    kind: RelayKind,
    config: RelayConfig,
    topology: PortTopology,
    mechanism: Mechanism,
}

impl Relay {
    /// Create an instance of the given variant.
    ///
    /// The port topology is derived and the mechanism initialized up front;
    /// there is no lazily created state, so the first evaluation behaves
    /// like every other one.
    pub fn new(kind: RelayKind, config: RelayConfig) -> Self {
        Self {
            kind,
            config,
            topology: PortTopology::of(&config),
            mechanism: Mechanism::for_kind(kind, config.contacts),
        }
    }

    /// A momentary relay.
    pub fn momentary(config: RelayConfig) -> Self {
        Self::new(RelayKind::Momentary, config)
    }

    /// A latching relay.
    pub fn latching(config: RelayConfig) -> Self {
        Self::new(RelayKind::Latching, config)
    }

    /// The instance's variant.
    #[inline]
    pub const fn kind(&self) -> RelayKind {
        self.kind
    }

    /// The current configuration.
    #[inline]
    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The derived port topology.
    #[inline]
    pub const fn topology(&self) -> &PortTopology {
        &self.topology
    }

    /// Replace the configuration, re-deriving the topology as needed.
    ///
    /// Returns `true` when the port layout changed and the engine must
    /// rewire the instance. The latch keeps its mechanical memory across
    /// every edit: re-layout moves contacts around, it does not exercise
    /// the armature.
    pub fn set_config(&mut self, config: RelayConfig) -> bool {
        self.config = config;
        let topology = PortTopology::of(&config);
        let changed = topology != self.topology;
        if changed {
            trace!(
                inputs = topology.inputs,
                outputs = topology.outputs,
                "relay topology rederived"
            );
            self.topology = topology;
        }
        changed
    }

    /// Evaluate one simulation step.
    ///
    /// `inputs` holds the value on every input port in port order: the
    /// coil at [`COIL`], then one wiper value per pole. A mismatched length
    /// is a caller bug and fatal; the engine owns the port contract. Output
    /// drives are appended to `out`, one per output port.
    pub fn evaluate(&mut self, inputs: &[Signal], out: &mut Vec<PortDrive>) {
        assert_eq!(
            inputs.len(),
            self.topology.inputs,
            "expected a value for every input port"
        );
        let coil = &inputs[COIL];
        let position = self.mechanism.step(self.config.contacts, coil);
        trace!(kind = ?self.kind, coil = %coil, position = ?position, "relay step");
        route(
            &self.config,
            &self.topology,
            position,
            &inputs[COIL + 1..],
            out,
        );
    }

    /// Current latch position without committing a transition.
    ///
    /// For rendering and probing. The momentary variant recomputes from the
    /// coil value; the latching variant reports its persisted position and
    /// leaves the edge detector untouched.
    pub fn peek(&self, coil: &Signal) -> LatchPosition {
        self.mechanism.peek(self.config.contacts, coil)
    }
}
