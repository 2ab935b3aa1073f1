//! # Inbound Ports (Ante Pipeline Contract)
//!
//! The host runs every transaction through an ordered chain of decorators
//! before execution. The identity gate is one of them.

use crate::domain::errors::AnteError;
use crate::domain::messages::Tx;
use shared_types::BlockHeight;

/// Execution context handed along the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnteContext {
    pub block_height: BlockHeight,
    pub chain_id: String,
}

impl AnteContext {
    pub fn new(block_height: BlockHeight, chain_id: impl Into<String>) -> Self {
        Self {
            block_height,
            chain_id: chain_id.into(),
        }
    }
}

/// The remainder of a pipeline.
pub trait AnteHandler: Send + Sync {
    fn handle(&self, ctx: AnteContext, tx: &Tx, simulate: bool) -> Result<AnteContext, AnteError>;
}

/// One pipeline step.
///
/// A decorator either fails, or calls `next` exactly once and returns its
/// result.
pub trait AnteDecorator: Send + Sync {
    fn ante_handle(
        &self,
        ctx: AnteContext,
        tx: &Tx,
        simulate: bool,
        next: &dyn AnteHandler,
    ) -> Result<AnteContext, AnteError>;
}
