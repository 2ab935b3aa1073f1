//! # Identity Gate Subsystem (IC-02)
//!
//! Ante pipeline decorator that rejects any transaction in which a signer or
//! a value recipient has no registered identity.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Genesis and simulation are never checked | `service.rs` - `bypass_reason()` |
//! | INVARIANT-2 | Bootstrap messages are exempt | `domain/classifier.rs` - `ExemptMessageTable` |
//! | INVARIANT-3 | First failing address rejects the whole tx | `service.rs` - `check_msg()` |
//! | INVARIANT-4 | Admitted tx reaches `next` unmodified | `service.rs` - `ante_handle()` |
//! | INVARIANT-5 | Gate never writes to the registry | `ports/outbound.rs` - read-only `IdentityLookup` |
//! | INVARIANT-6 | One registry snapshot per decision | `service.rs` - `check()` |
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  adapters/ - registry lookups, tracing / recording observers    │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs  - AnteHandler, AnteDecorator, AnteContext    │
//! │  ports/outbound.rs - IdentityLookup, GateObserver               │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/messages.rs   - Msg, MsgSend, MsgMultiSend, CustomMsg   │
//! │  domain/extraction.rs - AddressExtractor                        │
//! │  domain/classifier.rs - ExemptMessageTable                      │
//! │  domain/errors.rs     - GateError, AnteError                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let registry = Arc::new(RwLock::new(IdentityRegistry::new(store, clock)));
//! let chain = AnteChain::new()
//!     .with(IdentityVerificationGate::with_observer(
//!         registry.clone(),
//!         GateConfig::default(),
//!         TracingObserver,
//!     ));
//! let ctx = chain.handle(AnteContext::new(height, "chain-id"), &tx, false)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod pipeline;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use pipeline::AnteChain;
pub use ports::*;
pub use service::IdentityVerificationGate;
