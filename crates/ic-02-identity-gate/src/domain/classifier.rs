//! # Message Classification
//!
//! Bootstrap messages must pass the gate for addresses without an identity,
//! otherwise no address could ever register.

use ic_01_identity_registry::{MSG_CREATE_IDENTITY_TYPE_URL, MSG_UPDATE_PARAMS_TYPE_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Type URLs exempt from identity checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptMessageTable {
    type_urls: BTreeSet<String>,
}

impl ExemptMessageTable {
    /// Table with exactly `type_urls`.
    pub fn new<I, S>(type_urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            type_urls: type_urls.into_iter().map(Into::into).collect(),
        }
    }

    /// Table exempting nothing.
    pub fn empty() -> Self {
        Self {
            type_urls: BTreeSet::new(),
        }
    }

    pub fn is_exempt(&self, type_url: &str) -> bool {
        self.type_urls.contains(type_url)
    }

    pub fn insert(&mut self, type_url: impl Into<String>) -> bool {
        self.type_urls.insert(type_url.into())
    }

    pub fn len(&self) -> usize {
        self.type_urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.type_urls.iter().map(String::as_str)
    }
}

impl Default for ExemptMessageTable {
    /// The identity module's own messages.
    fn default() -> Self {
        Self::new([MSG_CREATE_IDENTITY_TYPE_URL, MSG_UPDATE_PARAMS_TYPE_URL])
    }
}
