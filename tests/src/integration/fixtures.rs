//! Shared builders for integration scenarios.

use std::sync::Arc;

use ic_01_identity_registry::{FixedTimeSource, IdentityRegistry, IdentityRegistryApi, InMemoryKVStore};
use ic_02_identity_gate::{
    AnteChain, GateConfig, IdentityVerificationGate, Input, Msg, MsgMultiSend, MsgSend, Output,
    RecordingObserver,
};
use parking_lot::RwLock;
use shared_types::Address;

pub type TestRegistry = IdentityRegistry<InMemoryKVStore, FixedTimeSource>;
pub type SharedTestRegistry = Arc<RwLock<TestRegistry>>;

/// Creation time stamped on every fixture record.
pub const FIXTURE_TIME: u64 = 1_700_000_000;

pub fn addr(byte: u8) -> Address {
    Address::new([byte; 20])
}

pub fn random_addr() -> Address {
    Address::new(rand::random::<[u8; 20]>())
}

pub fn registry() -> TestRegistry {
    IdentityRegistry::new(InMemoryKVStore::new(), FixedTimeSource(FIXTURE_TIME))
}

/// Shared registry with `registered` already created.
pub fn shared_registry(registered: &[Address]) -> SharedTestRegistry {
    let mut registry = registry();
    for (i, address) in registered.iter().enumerate() {
        registry
            .create(address, &format!("fixture-doc-{}", i))
            .expect("fixture create");
    }
    Arc::new(RwLock::new(registry))
}

/// Chain holding one identity gate that reports to `observer`.
pub fn gated_chain(
    registry: &SharedTestRegistry,
    config: GateConfig,
    observer: Arc<RecordingObserver>,
) -> AnteChain {
    AnteChain::new().with(IdentityVerificationGate::with_observer(
        registry.clone(),
        config,
        observer,
    ))
}

pub fn send(from: Address, to: Address) -> Msg {
    Msg::from(MsgSend::new(from.to_string(), to.to_string(), vec![]))
}

pub fn multi_send(inputs: &[Address], outputs: &[Address]) -> Msg {
    Msg::from(MsgMultiSend {
        inputs: inputs
            .iter()
            .map(|a| Input::new(a.to_string(), vec![]))
            .collect(),
        outputs: outputs
            .iter()
            .map(|a| Output::new(a.to_string(), vec![]))
            .collect(),
    })
}
