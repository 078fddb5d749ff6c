//! Output routing.
//!
//! Once the latch position is known, every output port's value follows
//! mechanically: a pole either passes its wiper input through to the
//! connected contact or leaves a contact floating. A double-throw pole is
//! break-before-make, so exactly one of its two legs carries the live
//! signal and the other always reads as floating.

use armature_signal::Signal;

use crate::config::{RelayConfig, ThrowArity};
use crate::latch::LatchPosition;
use crate::topology::{PortTopology, ThrowSide};

/// Ticks between a latch change and the outputs reflecting it.
pub const PROPAGATION_DELAY: u32 = 1;

/// One output assignment handed back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDrive {
    /// Output port index, per the derived topology.
    pub port: usize,
    /// Value to drive.
    pub value: Signal,
    /// Propagation delay in simulation ticks.
    pub delay: u32,
}

/// Compute the value for every output port.
///
/// `pole_inputs` are the wiper input values in pole order, one per pole;
/// a mismatched slice length is a caller bug (ports are typed with the
/// instance's width and count, which the engine enforces). Drives are
/// appended to `out` in output-port order, one per output, each tagged with
/// [`PROPAGATION_DELAY`].
pub fn route(
    config: &RelayConfig,
    topology: &PortTopology,
    position: LatchPosition,
    pole_inputs: &[Signal],
    out: &mut Vec<PortDrive>,
) {
    assert_eq!(
        pole_inputs.len(),
        topology.poles(),
        "expected one wiper input per pole"
    );

    let unknown = Signal::unknown(config.width);

    for (pole, &input) in pole_inputs.iter().enumerate() {
        match config.throws {
            ThrowArity::Single => {
                let value = match position {
                    LatchPosition::Closed => input,
                    LatchPosition::Open => unknown,
                };
                out.push(PortDrive {
                    port: topology.output(pole, ThrowSide::NormallyOpen),
                    value,
                    delay: PROPAGATION_DELAY,
                });
            }
            ThrowArity::Double => {
                let (open_side, closed_side) = match position {
                    LatchPosition::Closed => (input, unknown),
                    LatchPosition::Open => (unknown, input),
                };
                out.push(PortDrive {
                    port: topology.output(pole, ThrowSide::NormallyOpen),
                    value: open_side,
                    delay: PROPAGATION_DELAY,
                });
                out.push(PortDrive {
                    port: topology.output(pole, ThrowSide::NormallyClosed),
                    value: closed_side,
                    delay: PROPAGATION_DELAY,
                });
            }
        }
    }
}
