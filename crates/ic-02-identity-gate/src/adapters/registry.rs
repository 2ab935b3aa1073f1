//! # Registry Adapters
//!
//! `IdentityLookup` for the identity registry in the forms a host holds it:
//! owned, behind a `parking_lot::RwLock`, or shared through an `Arc`.

use crate::ports::outbound::{IdentityLookup, IdentityView};
use ic_01_identity_registry::{IdentityRegistry, KeyValueStore, RegistryError, TimeSource};
use parking_lot::{RwLock, RwLockReadGuard};
use shared_types::Address;
use std::sync::Arc;

impl<S: KeyValueStore, T: TimeSource> IdentityView for IdentityRegistry<S, T> {
    fn has_identity(&self, address: &Address) -> Result<bool, RegistryError> {
        IdentityRegistry::has_identity(self, address)
    }
}

impl<S: KeyValueStore, T: TimeSource> IdentityLookup for IdentityRegistry<S, T> {
    fn snapshot(&self) -> Box<dyn IdentityView + '_> {
        Box::new(self)
    }
}

impl<V: IdentityView + ?Sized> IdentityView for &V {
    fn has_identity(&self, address: &Address) -> Result<bool, RegistryError> {
        (**self).has_identity(address)
    }
}

impl<V: IdentityView + ?Sized> IdentityView for RwLockReadGuard<'_, V> {
    fn has_identity(&self, address: &Address) -> Result<bool, RegistryError> {
        (**self).has_identity(address)
    }
}

/// The snapshot holds the read lock until it is dropped, so writers wait for
/// the transaction being checked.
impl<V: IdentityView + Send + Sync> IdentityLookup for RwLock<V> {
    fn snapshot(&self) -> Box<dyn IdentityView + '_> {
        Box::new(self.read())
    }
}

impl<L: IdentityLookup + ?Sized> IdentityLookup for Arc<L> {
    fn snapshot(&self) -> Box<dyn IdentityView + '_> {
        (**self).snapshot()
    }
}

impl<L: IdentityLookup + ?Sized> IdentityLookup for &L {
    fn snapshot(&self) -> Box<dyn IdentityView + '_> {
        (**self).snapshot()
    }
}
