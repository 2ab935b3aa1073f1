//! # Ante Chain
//!
//! Ordered composition of decorators. The chain ends in a handler that
//! returns the context unchanged; the first error halts it.
//!
//! ```text
//! handle(ctx, tx)
//!   └─ d0.ante_handle(ctx, tx, next = [d1, d2])
//!        └─ d1.ante_handle(ctx, tx, next = [d2])
//!             └─ d2.ante_handle(ctx, tx, next = [])
//!                  └─ Ok(ctx)
//! ```

use crate::domain::errors::AnteError;
use crate::domain::messages::Tx;
use crate::ports::inbound::{AnteContext, AnteDecorator, AnteHandler};

type BoxedDecorator = Box<dyn AnteDecorator>;

#[derive(Default)]
pub struct AnteChain {
    decorators: Vec<BoxedDecorator>,
}

impl AnteChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a decorator.
    pub fn with(mut self, decorator: impl AnteDecorator + 'static) -> Self {
        self.push(decorator);
        self
    }

    pub fn push(&mut self, decorator: impl AnteDecorator + 'static) {
        self.decorators.push(Box::new(decorator));
    }

    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }
}

impl AnteHandler for AnteChain {
    fn handle(&self, ctx: AnteContext, tx: &Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        Link {
            rest: &self.decorators,
        }
        .handle(ctx, tx, simulate)
    }
}

/// Remaining decorators of a running chain.
struct Link<'a> {
    rest: &'a [BoxedDecorator],
}

impl AnteHandler for Link<'_> {
    fn handle(&self, ctx: AnteContext, tx: &Tx, simulate: bool) -> Result<AnteContext, AnteError> {
        match self.rest.split_first() {
            Some((head, tail)) => head.ante_handle(ctx, tx, simulate, &Link { rest: tail }),
            None => Ok(ctx),
        }
    }
}

impl std::fmt::Debug for AnteChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnteChain")
            .field("decorators", &self.decorators.len())
            .finish()
    }
}
