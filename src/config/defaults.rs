//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use super::types::HandlerSpec;
use crate::handlers::Species;

// =============================================================================
// Chain Defaults
// =============================================================================

/// The reference chain: Monkey > Squirrel > Dog.
pub fn default_handlers() -> Vec<HandlerSpec> {
    Species::ALL
        .iter()
        .map(|species| HandlerSpec::kind(species.kind()))
        .collect()
}

// =============================================================================
// Demo Defaults
// =============================================================================

pub fn default_requests() -> Vec<String> {
    ["Nut", "Banana", "Cup of coffee"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_subchain_from() -> Option<String> {
    Some(Species::Squirrel.name().to_string())
}
