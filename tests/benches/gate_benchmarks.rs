//! # Identity Gate Benchmarks
//!
//! | Path | Target |
//! |------|--------|
//! | Registry point lookup | < 10µs |
//! | Gate, single transfer | < 50µs |
//! | Gate, batch transfer (n inputs + n outputs) | linear in n |

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ic_01_identity_registry::{FixedTimeSource, IdentityRegistry, IdentityRegistryApi, InMemoryKVStore};
use ic_02_identity_gate::{
    AnteChain, AnteContext, AnteHandler, GateConfig, IdentityVerificationGate, Input, Msg,
    MsgMultiSend, MsgSend, Output, Tx,
};
use parking_lot::RwLock;
use shared_types::Address;

fn populated_registry(n: usize) -> (Arc<RwLock<IdentityRegistry<InMemoryKVStore, FixedTimeSource>>>, Vec<Address>) {
    let mut registry = IdentityRegistry::new(InMemoryKVStore::new(), FixedTimeSource(0));
    let addresses: Vec<Address> = (0..n).map(|_| Address::new(rand::random())).collect();
    for address in &addresses {
        let _ = registry.create(address, "bench-doc");
    }
    (Arc::new(RwLock::new(registry)), addresses)
}

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("ic-01-identity-registry");
    let (registry, addresses) = populated_registry(10_000);

    group.bench_function("get_registered", |b| {
        let target = addresses[addresses.len() / 2];
        b.iter(|| black_box(registry.read().get(&target).unwrap()))
    });

    group.finish();
}

fn bench_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("ic-02-identity-gate");
    let (registry, addresses) = populated_registry(10_000);
    let chain = AnteChain::new().with(IdentityVerificationGate::new(
        registry.clone(),
        GateConfig::default(),
    ));
    let ctx = AnteContext::new(100, "bench");

    let transfer = Tx::single(Msg::from(MsgSend::new(
        addresses[0].to_string(),
        addresses[1].to_string(),
        vec![],
    )));
    group.bench_function("single_transfer", |b| {
        b.iter(|| black_box(chain.handle(ctx.clone(), &transfer, false).is_ok()))
    });

    for size in [1usize, 10, 100] {
        let msg = Msg::from(MsgMultiSend {
            inputs: addresses[..size]
                .iter()
                .map(|a| Input::new(a.to_string(), vec![]))
                .collect(),
            outputs: addresses[size..2 * size]
                .iter()
                .map(|a| Output::new(a.to_string(), vec![]))
                .collect(),
        });
        let tx = Tx::single(msg);

        group.throughput(Throughput::Elements(2 * size as u64));
        group.bench_with_input(BenchmarkId::new("multi_send", size), &tx, |b, tx| {
            b.iter(|| black_box(chain.handle(ctx.clone(), tx, false).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_registry_lookup, bench_gate);
criterion_main!(benches);
