//! The handler contract.
//!
//! A handler either answers a request itself or forwards it, untouched, to
//! its successor. Implementors provide the local match ([`Handler::consume`])
//! and access to their [`Link`]; delegation and linking come from the
//! provided methods and should not be overridden.
//!
//! ## Linking
//!
//! ```ignore
//! let monkey: Arc<dyn Handler> = Arc::new(FeedHandler::monkey());
//! let squirrel: Arc<dyn Handler> = Arc::new(FeedHandler::squirrel());
//! let dog: Arc<dyn Handler> = Arc::new(FeedHandler::dog());
//!
//! monkey.set_next(squirrel)?.set_next(dog)?;
//!
//! assert_eq!(monkey.handle("Nut").as_deref(), Some("Squirrel: I'll eat the Nut"));
//! ```

use super::link::{Link, addr_of};
use crate::error::ChainResult;
use std::sync::Arc;

/// A participant in a dispatch chain.
///
/// Handlers hold only immutable configuration plus their successor link,
/// so one chain can be traversed from several threads at once.
pub trait Handler: Send + Sync {
    /// Display name, used in chain descriptions and error messages.
    fn name(&self) -> &str;

    /// The successor slot owned by this handler.
    fn link(&self) -> &Link;

    /// Answer `request` without consulting the successor.
    ///
    /// Returns `None` when this handler does not recognize the request.
    fn consume(&self, request: &str) -> Option<String>;

    /// Current successor, if any.
    fn next(&self) -> Option<Arc<dyn Handler>> {
        self.link().get()
    }

    /// Make `successor` the delegate for requests this handler does not
    /// consume, and return it so links can be chained fluently.
    ///
    /// A second call replaces the first successor. Links that would make
    /// this handler reachable from `successor` are rejected.
    fn set_next(&self, successor: Arc<dyn Handler>) -> ChainResult<Arc<dyn Handler>> {
        self.link()
            .attach(addr_of(self as *const Self), self.name(), successor)
    }

    /// Answer `request` here or anywhere downstream.
    ///
    /// The successor's result is returned as is.
    fn handle(&self, request: &str) -> Option<String> {
        match self.consume(request) {
            Some(reply) => Some(reply),
            None => self.next().and_then(|next| next.handle(request)),
        }
    }
}
