//! Request handlers.
//!
//! This module contains the [`Handler`] trait, the [`Registry`] of handler
//! kinds, and the concrete [`FeedHandler`].

pub mod core;
mod feeders;

pub use self::core::{Handler, Link, Registry, Resolved};
pub use feeders::{FeedHandler, Species};
