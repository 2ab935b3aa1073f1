//! # Identity Verification Gate
//!
//! Ante decorator that admits a transaction only if every signer and every
//! recipient of every non-exempt message holds a registered identity.
//!
//! ## Decision procedure
//!
//! 1. Genesis height or simulation: forward without checks.
//! 2. For each message, in order:
//!    - exempt type URL: skip
//!    - no signer: `SignerUnresolved`
//!    - first unregistered signer: `UnregisteredSigner`
//!    - first unregistered recipient: `UnregisteredRecipient`
//! 3. Forward the context unmodified.
//!
//! Addresses are decoded one at a time, just before their lookup, and no
//! recipient is decoded until every signer has passed. The first failure
//! stops the scan.
//!
//! Every lookup for one transaction reads the same registry snapshot.
//! Nothing is cached between calls.

use crate::adapters::observer::NoopObserver;
use crate::domain::classifier::ExemptMessageTable;
use crate::domain::config::GateConfig;
use crate::domain::errors::{AnteError, GateError};
use crate::domain::extraction::{parse_address, AddressExtractor};
use crate::domain::messages::{Msg, Tx};
use crate::ports::inbound::{AnteContext, AnteDecorator, AnteHandler};
use crate::ports::outbound::{AddressRole, BypassReason, GateObserver, IdentityLookup, IdentityView};
use shared_types::{Address, BlockHeight};

pub struct IdentityVerificationGate<L: IdentityLookup, O: GateObserver = NoopObserver> {
    lookup: L,
    extractor: AddressExtractor,
    exempt: ExemptMessageTable,
    genesis_height: BlockHeight,
    observer: O,
}

impl<L: IdentityLookup> IdentityVerificationGate<L, NoopObserver> {
    pub fn new(lookup: L, config: GateConfig) -> Self {
        Self::with_observer(lookup, config, NoopObserver)
    }
}

impl<L: IdentityLookup, O: GateObserver> IdentityVerificationGate<L, O> {
    pub fn with_observer(lookup: L, config: GateConfig, observer: O) -> Self {
        Self {
            lookup,
            extractor: AddressExtractor::new(),
            exempt: config.exempt_messages,
            genesis_height: config.genesis_height,
            observer,
        }
    }

    pub fn exempt_messages(&self) -> &ExemptMessageTable {
        &self.exempt
    }

    pub fn genesis_height(&self) -> BlockHeight {
        self.genesis_height
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Why checks would be skipped for this call, if they would.
    pub fn bypass_reason(&self, block_height: BlockHeight, simulate: bool) -> Option<BypassReason> {
        if block_height == self.genesis_height {
            Some(BypassReason::Genesis)
        } else if simulate {
            Some(BypassReason::Simulate)
        } else {
            None
        }
    }

    /// Run the decision procedure without forwarding.
    pub fn check(&self, block_height: BlockHeight, tx: &Tx, simulate: bool) -> Result<(), GateError> {
        if let Some(reason) = self.bypass_reason(block_height, simulate) {
            self.observer.on_bypass(block_height, reason);
            return Ok(());
        }

        let view = self.lookup.snapshot();
        let outcome = tx
            .msgs()
            .iter()
            .try_for_each(|msg| self.check_msg(&*view, block_height, msg));
        drop(view);

        match &outcome {
            Ok(()) => self.observer.on_admitted(block_height, tx.msgs().len()),
            Err(e) => self.observer.on_rejected(block_height, e),
        }
        outcome
    }

    fn check_msg(
        &self,
        view: &dyn IdentityView,
        block_height: BlockHeight,
        msg: &Msg,
    ) -> Result<(), GateError> {
        let type_url = msg.type_url();
        if self.exempt.is_exempt(type_url) {
            self.observer.on_exempt(block_height, type_url);
            return Ok(());
        }

        let signers = self.extractor.raw_signers(msg)?;
        if signers.is_empty() {
            return Err(GateError::SignerUnresolved {
                type_url: type_url.to_string(),
            });
        }

        for raw in &signers {
            let signer = parse_address(raw)?;
            if !self.is_registered(view, AddressRole::Signer, &signer)? {
                return Err(GateError::UnregisteredSigner { address: signer });
            }
        }

        for raw in &self.extractor.raw_recipients(msg)? {
            let recipient = parse_address(raw)?;
            if !self.is_registered(view, AddressRole::Recipient, &recipient)? {
                return Err(GateError::UnregisteredRecipient { address: recipient });
            }
        }

        Ok(())
    }

    fn is_registered(
        &self,
        view: &dyn IdentityView,
        role: AddressRole,
        address: &Address,
    ) -> Result<bool, GateError> {
        let registered = view
            .has_identity(address)
            .map_err(|e| GateError::StoreIo(e.to_string()))?;
        self.observer.on_address_checked(role, address, registered);
        Ok(registered)
    }
}

impl<L: IdentityLookup, O: GateObserver> AnteDecorator for IdentityVerificationGate<L, O> {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<AnteContext, AnteError> {
        self.check(ctx.block_height, tx, simulate)?;
        next.handle(ctx, tx, simulate)
    }
}
