//! Core handler infrastructure.
//!
//! This module contains the handler contract, the successor link every
//! handler owns, and the registry that turns configuration entries into
//! handlers.

pub mod link;
pub mod registry;
pub mod traits;

pub use link::Link;
pub use registry::{Registry, Resolved};
pub use traits::Handler;
