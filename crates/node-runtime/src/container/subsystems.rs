//! # Subsystem Container
//!
//! Holds the identity registry and the ante chain that guards it.
//!
//! ## Initialization Order
//!
//! ```text
//! 1. Open the identity store (memory / rocksdb)
//! 2. Build the registry with a block-time clock
//! 3. Import genesis if the store is empty
//! 4. Assemble the ante chain: [IdentityVerificationGate]
//! ```
//!
//! ## Thread Safety
//!
//! - The registry is wrapped in `Arc<RwLock<..>>`
//! - Block execution takes the write lock for `MsgCreateIdentity`
//! - The gate holds one read lock for each transaction it checks

use std::sync::Arc;

use anyhow::Context;
use parking_lot::RwLock;
use tracing::{info, instrument};

use ic_01_identity_registry::{
    BlockTimeSource, GenesisState, IdentityRecord, IdentityRegistry, IdentityRegistryApi,
    MsgCreateIdentity, RegistryError,
};
use ic_02_identity_gate::{
    AnteChain, AnteContext, AnteError, AnteHandler, IdentityVerificationGate, TracingObserver, Tx,
};
use shared_types::{Address, BlockHeight, PageRequest, PageResponse, Timestamp};

use crate::adapters::metrics::MetricsObserver;
use crate::adapters::storage::{open_store, DynStore};
use crate::container::config::NodeConfig;
use crate::genesis::load_genesis;

/// Registry as wired by the runtime.
pub type RuntimeRegistry = IdentityRegistry<DynStore, BlockTimeSource>;

/// Registry shared between block execution and the gate.
pub type SharedRegistry = Arc<RwLock<RuntimeRegistry>>;

/// Gate type installed in the ante chain.
pub type RuntimeGate = IdentityVerificationGate<SharedRegistry, (TracingObserver, MetricsObserver)>;

pub struct SubsystemContainer {
    /// Identity Registry (IC-01).
    pub registry: SharedRegistry,

    /// Ante chain with the Identity Gate (IC-02).
    pub ante_chain: AnteChain,

    /// Node configuration (immutable after initialization).
    pub config: NodeConfig,
}

impl SubsystemContainer {
    /// Open the configured store and wire everything.
    #[instrument(name = "subsystem_init", skip(config))]
    pub fn new(config: NodeConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid node configuration")?;
        let store = open_store(&config.storage).context("failed to open identity store")?;
        Self::with_store(config, store)
    }

    /// Wire everything on top of an already opened store.
    pub fn with_store(config: NodeConfig, store: DynStore) -> anyhow::Result<Self> {
        info!(chain_id = %config.chain_id, "Initializing identity subsystems");

        let registry: SharedRegistry = Arc::new(RwLock::new(IdentityRegistry::new(
            store,
            BlockTimeSource::new(0),
        )));

        if let Some(path) = &config.genesis_file {
            let genesis = load_genesis(path)
                .with_context(|| format!("failed to load genesis from {}", path.display()))?;
            Self::import_genesis(&registry, &genesis)?;
        }

        let gate: RuntimeGate = IdentityVerificationGate::with_observer(
            registry.clone(),
            config.gate.clone(),
            (TracingObserver, MetricsObserver),
        );
        let ante_chain = AnteChain::new().with(gate);

        info!(
            genesis_height = config.gate.genesis_height,
            exempt_messages = config.gate.exempt_messages.len(),
            "  [02] Identity Gate installed in ante chain"
        );

        Ok(Self {
            registry,
            ante_chain,
            config,
        })
    }

    /// Import genesis identities unless the store already holds records.
    pub fn load_genesis(&self, genesis: &GenesisState) -> anyhow::Result<()> {
        Self::import_genesis(&self.registry, genesis)
    }

    fn import_genesis(registry: &SharedRegistry, genesis: &GenesisState) -> anyhow::Result<()> {
        let mut registry = registry.write();
        let existing = registry
            .list(&PageRequest::first(1))
            .context("failed to inspect identity store")?;
        if !existing.items.is_empty() {
            info!("  [01] Identity store not empty, skipping genesis import");
            return Ok(());
        }
        registry
            .init_genesis(genesis)
            .context("failed to import identity genesis")?;
        Ok(())
    }

    /// Context for transactions in a new block. Records created while this
    /// block executes carry `block_time` as `created_at`.
    pub fn begin_block(&self, height: BlockHeight, block_time: Timestamp) -> AnteContext {
        self.registry.read().clock().set_block_time(block_time);
        AnteContext::new(height, self.config.chain_id.clone())
    }

    /// Run `tx` through the ante chain.
    pub fn admit(&self, ctx: AnteContext, tx: &Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        self.ante_chain.handle(ctx, tx, simulate)
    }

    /// Execute a create-identity message against the registry.
    pub fn deliver_create_identity(
        &self,
        msg: &MsgCreateIdentity,
    ) -> Result<IdentityRecord, RegistryError> {
        self.registry.write().handle_create_identity(msg)
    }

    pub fn identity(&self, address: &Address) -> Result<Option<IdentityRecord>, RegistryError> {
        self.registry.read().get(address)
    }

    /// List identities, applying the configured default page size.
    pub fn list_identities(
        &self,
        page: &PageRequest,
    ) -> Result<PageResponse<IdentityRecord>, RegistryError> {
        let mut page = page.clone();
        if page.limit == 0 {
            page.limit = self.config.storage.default_page_limit;
        }
        self.registry.read().list(&page)
    }

    pub fn export_genesis(&self) -> Result<GenesisState, RegistryError> {
        self.registry.read().export_genesis()
    }
}
