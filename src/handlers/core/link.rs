//! Successor slot owned by every handler.
//!
//! Each handler instance owns exactly one `Link`, absent at construction.
//! The link holds a shared reference to the successor, so a handler can be
//! the successor of one node and still be referenced from outside the chain.

use super::traits::Handler;
use crate::error::{ChainError, ChainResult};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Address of a handler, without its vtable.
#[inline]
pub(crate) fn addr_of<T: ?Sized>(handler: *const T) -> *const () {
    handler as *const ()
}

/// A handler's reference to its successor.
#[derive(Default)]
pub struct Link {
    next: RwLock<Option<Arc<dyn Handler>>>,
}

impl Link {
    /// Create an empty link (end of chain).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current successor, if any.
    ///
    /// The lock is released before returning, so callers can recurse into
    /// the successor without holding it.
    #[inline]
    pub fn get(&self) -> Option<Arc<dyn Handler>> {
        self.next.read().clone()
    }

    /// Whether a successor is set.
    pub fn is_linked(&self) -> bool {
        self.next.read().is_some()
    }

    /// Point this link at `successor`, replacing any previous successor.
    ///
    /// `owner` is the address of the handler that owns this link. The
    /// successor chain is walked first; if `owner` is reachable from
    /// `successor` the link is left unchanged and `ChainError::Cycle` is
    /// returned. Existing links are acyclic, so the walk terminates.
    pub fn attach(
        &self,
        owner: *const (),
        owner_name: &str,
        successor: Arc<dyn Handler>,
    ) -> ChainResult<Arc<dyn Handler>> {
        let mut cursor = Some(Arc::clone(&successor));
        while let Some(node) = cursor {
            if addr_of(Arc::as_ptr(&node)) == owner {
                return Err(ChainError::Cycle {
                    handler: owner_name.to_string(),
                    successor: successor.name().to_string(),
                });
            }
            cursor = node.next();
        }

        *self.next.write() = Some(Arc::clone(&successor));
        Ok(successor)
    }

    /// Drop the successor, making the owner the end of its chain.
    pub fn detach(&self) -> Option<Arc<dyn Handler>> {
        self.next.write().take()
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let next = self.next.read();
        f.debug_struct("Link")
            .field("next", &next.as_ref().map(|h| h.name().to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::FeedHandler;

    #[test]
    fn test_new_link_is_empty() {
        let link = Link::new();
        assert!(!link.is_linked());
        assert!(link.get().is_none());
    }

    #[test]
    fn test_each_instance_owns_its_link() {
        let dog: Arc<dyn Handler> = Arc::new(FeedHandler::dog());
        let monkey = FeedHandler::monkey();
        let squirrel = FeedHandler::squirrel();

        monkey.set_next(dog).unwrap();

        assert!(monkey.link().is_linked());
        assert!(!squirrel.link().is_linked());
    }

    #[test]
    fn test_detach() {
        let monkey = FeedHandler::monkey();
        monkey.set_next(Arc::new(FeedHandler::dog())).unwrap();

        let removed = monkey.link().detach().unwrap();
        assert_eq!(removed.name(), "Dog");
        assert!(monkey.next().is_none());
    }

    #[test]
    fn test_debug_shows_successor_name() {
        let monkey = FeedHandler::monkey();
        monkey.set_next(Arc::new(FeedHandler::squirrel())).unwrap();
        assert_eq!(
            format!("{:?}", monkey.link()),
            "Link { next: Some(\"Squirrel\") }"
        );
    }
}
