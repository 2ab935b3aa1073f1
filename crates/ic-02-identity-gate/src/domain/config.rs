//! Gate configuration.

use crate::domain::classifier::ExemptMessageTable;
use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;

/// Height at which the chain starts; genesis transactions are never checked.
pub const DEFAULT_GENESIS_HEIGHT: BlockHeight = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    pub genesis_height: BlockHeight,
    pub exempt_messages: ExemptMessageTable,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            genesis_height: DEFAULT_GENESIS_HEIGHT,
            exempt_messages: ExemptMessageTable::default(),
        }
    }
}
