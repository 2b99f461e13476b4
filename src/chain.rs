//! Chain construction.
//!
//! [`ChainBuilder`] turns an ordered list of handlers into a linked chain.
//! The resulting [`Chain`] keeps every node so dispatch can start at the
//! head or at any interior node (a sub-chain).

use crate::config::ChainConfig;
use crate::error::{ChainError, ChainResult};
use crate::handlers::{Handler, Registry};
use std::sync::Arc;

/// Describe the chain reachable from `entry`, e.g. `Monkey > Squirrel > Dog`.
///
/// Follows the live successor links, so it reflects the current topology.
pub fn describe(entry: &dyn Handler) -> String {
    let mut names = vec![entry.name().to_string()];
    let mut cursor = entry.next();
    while let Some(node) = cursor {
        names.push(node.name().to_string());
        cursor = node.next();
    }
    names.join(" > ")
}

/// Builder linking handlers in insertion order.
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Arc<dyn Handler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler.
    pub fn then<H: Handler + 'static>(self, handler: H) -> Self {
        self.then_shared(Arc::new(handler))
    }

    /// Append a handler that is already shared.
    pub fn then_shared(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Link every handler to the one after it.
    ///
    /// Fails with `EmptyChain` when no handler was added, or `Cycle` when
    /// the same handler was added twice.
    pub fn build(self) -> ChainResult<Chain> {
        if self.handlers.is_empty() {
            return Err(ChainError::EmptyChain);
        }

        for pair in self.handlers.windows(2) {
            pair[0].set_next(Arc::clone(&pair[1]))?;
        }

        Ok(Chain {
            nodes: self.handlers,
        })
    }
}

/// A linked chain of handlers.
pub struct Chain {
    /// Nodes in link order; never empty.
    nodes: Vec<Arc<dyn Handler>>,
}

impl Chain {
    /// Build a chain from configuration.
    pub fn from_config(config: &ChainConfig, registry: &Registry) -> ChainResult<Self> {
        let mut builder = ChainBuilder::new();
        for spec in &config.handlers {
            builder = builder.then_shared(registry.build(spec)?);
        }
        builder.build()
    }

    /// The reference chain: Monkey > Squirrel > Dog.
    pub fn reference() -> Self {
        // Three distinct fresh handlers cannot form a cycle.
        Self::from_config(&ChainConfig::default(), &Registry::new())
            .expect("reference chain is well-formed")
    }

    pub fn head(&self) -> &Arc<dyn Handler> {
        &self.nodes[0]
    }

    /// Node at `index` in link order.
    pub fn node(&self, index: usize) -> Option<&Arc<dyn Handler>> {
        self.nodes.get(index)
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.nodes.iter().find(|node| node.name() == name)
    }

    /// Entry point for the sub-chain starting at `name`.
    pub fn subchain(&self, name: &str) -> ChainResult<&Arc<dyn Handler>> {
        self.find(name)
            .ok_or_else(|| ChainError::UnknownEntry(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node names in link order.
    pub fn names(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.name()).collect()
    }

    pub fn describe(&self) -> String {
        describe(self.head().as_ref())
    }

    /// Dispatch `request` from the head.
    pub fn dispatch(&self, request: &str) -> Option<String> {
        self.head().handle(request)
    }
}
