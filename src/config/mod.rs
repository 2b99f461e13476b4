//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ChainConfig, HandlerSpec, DemoConfig)
//! - [`defaults`]: Default value functions for serde
//! - [`validation`]: Startup validation

mod defaults;
mod types;
mod validation;

pub use types::{ChainConfig, Config, ConfigError, DemoConfig, HandlerSpec};
pub use validation::{DuplicateTrigger, ValidationError, duplicate_triggers, validate};
