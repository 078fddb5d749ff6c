//! Benchmarks for the relay component model
//!
//! Measures performance of:
//! - Port topology derivation
//! - Full momentary evaluation steps
//! - Full latching evaluation steps (edge detection included)

use armature_relay::{
    PoleCount, PortTopology, Relay, RelayConfig, RestContacts, ThrowArity,
};
use armature_signal::{BitWidth, Signal};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn config(poles: usize) -> RelayConfig {
    RelayConfig {
        poles: PoleCount::new(poles).unwrap(),
        throws: ThrowArity::Double,
        contacts: RestContacts::NormallyOpen,
        width: BitWidth::new(8).unwrap(),
    }
}

/// Benchmark topology derivation across pole counts
fn bench_topology(c: &mut Criterion) {
    let mut group = c.benchmark_group("topology_of");

    for poles in [1usize, 2, 4, 8] {
        let cfg = config(poles);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(poles), &cfg, |b, cfg| {
            b.iter(|| PortTopology::of(black_box(cfg)))
        });
    }
    group.finish();
}

/// Benchmark one full momentary evaluation step
fn bench_momentary_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("momentary_evaluate");

    for poles in [1usize, 2, 4, 8] {
        let cfg = config(poles);
        let mut relay = Relay::momentary(cfg);
        let mut inputs = vec![Signal::TRUE];
        inputs.extend((0..poles).map(|p| Signal::from_u64(cfg.width, p as u64)));
        let mut out = Vec::with_capacity(relay.topology().outputs);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(poles), &poles, |b, _| {
            b.iter(|| {
                out.clear();
                relay.evaluate(black_box(&inputs), &mut out);
            })
        });
    }
    group.finish();
}

/// Benchmark one full latching evaluation step with an alternating coil
fn bench_latching_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("latching_evaluate");

    for poles in [1usize, 2, 4, 8] {
        let cfg = config(poles);
        let mut relay = Relay::latching(cfg);
        let wipers: Vec<Signal> = (0..poles)
            .map(|p| Signal::from_u64(cfg.width, p as u64))
            .collect();
        let mut out = Vec::with_capacity(relay.topology().outputs);
        let mut high = false;

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(poles), &poles, |b, _| {
            b.iter(|| {
                // Alternate the coil so every other step commits an edge.
                high = !high;
                let coil = if high { Signal::TRUE } else { Signal::FALSE };
                let mut inputs = vec![coil];
                inputs.extend_from_slice(&wipers);
                out.clear();
                relay.evaluate(black_box(&inputs), &mut out);
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_topology,
    bench_momentary_evaluate,
    bench_latching_evaluate
);
criterion_main!(benches);
