//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use crate::error::ChainError;
use crate::handlers::Registry;
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("chain.handlers must not be empty")]
    EmptyChain,
    #[error("chain.handlers[{index}]: {source}")]
    Handler { index: usize, source: ChainError },
    #[error("chain.handlers[{index}].{field} must not be empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("handler name {0} is used more than once")]
    DuplicateName(String),
    #[error("demo.subchain_from names no handler in the chain: {0}")]
    UnknownSubchainEntry(String),
}

/// A trigger claimed by more than one handler.
///
/// Only the first handler in link order will ever answer it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTrigger {
    pub trigger: String,
    /// Handler names in link order.
    pub handlers: Vec<String>,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config, registry: &Registry) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.handlers.is_empty() {
        errors.push(ValidationError::EmptyChain);
    }

    let mut names = HashSet::new();
    for (index, spec) in config.chain.handlers.iter().enumerate() {
        let resolved = match registry.resolve(spec) {
            Ok(resolved) => resolved,
            Err(source) => {
                errors.push(ValidationError::Handler { index, source });
                continue;
            }
        };

        if resolved.name.is_empty() {
            errors.push(ValidationError::EmptyField {
                index,
                field: "name",
            });
        }
        if resolved.trigger.is_empty() {
            errors.push(ValidationError::EmptyField {
                index,
                field: "trigger",
            });
        }
        if !resolved.name.is_empty() && !names.insert(resolved.name.clone()) {
            errors.push(ValidationError::DuplicateName(resolved.name));
        }
    }

    // Only meaningful once every handler resolved to a name
    if errors.is_empty()
        && let Some(entry) = config.demo.subchain_entry()
        && !names.contains(entry)
    {
        errors.push(ValidationError::UnknownSubchainEntry(entry.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Triggers claimed by more than one handler, sorted by trigger.
///
/// Entries that fail to resolve are skipped; [`validate`] reports those.
pub fn duplicate_triggers(config: &Config, registry: &Registry) -> Vec<DuplicateTrigger> {
    let mut by_trigger: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for spec in &config.chain.handlers {
        if let Ok(resolved) = registry.resolve(spec) {
            by_trigger
                .entry(resolved.trigger)
                .or_default()
                .push(resolved.name);
        }
    }

    by_trigger
        .into_iter()
        .filter(|(_, handlers)| handlers.len() > 1)
        .map(|(trigger, handlers)| DuplicateTrigger { trigger, handlers })
        .collect()
}
