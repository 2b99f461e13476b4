//! Handler kind registry.
//!
//! The `Registry` maps configuration kind names to handler constructors, so
//! a chain can be described as a list of [`HandlerSpec`] entries.

use crate::config::HandlerSpec;
use crate::error::{ChainError, ChainResult};
use crate::handlers::feeders::{FeedHandler, Species};
use crate::template::ResponseTemplate;
use std::collections::HashMap;
use std::sync::Arc;

use super::traits::Handler;

/// A handler entry with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub trigger: String,
    pub template: ResponseTemplate,
}

/// Registry of handler kinds.
pub struct Registry {
    kinds: HashMap<&'static str, Species>,
}

impl Registry {
    /// Create a registry with the reference species registered.
    pub fn new() -> Self {
        let mut kinds = HashMap::new();
        for species in Species::ALL {
            kinds.insert(species.kind(), species);
        }
        Self { kinds }
    }

    /// Look up a kind by name, ignoring case.
    pub fn species(&self, kind: &str) -> Option<Species> {
        self.kinds.get(kind.to_ascii_lowercase().as_str()).copied()
    }

    /// Registered kind names, sorted.
    pub fn kinds(&self) -> Vec<&'static str> {
        let mut kinds: Vec<_> = self.kinds.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Fill in the defaults for a config entry.
    ///
    /// A `kind` supplies name, trigger and template; explicit fields
    /// override it. Entries without a kind must give a name and a trigger.
    pub fn resolve(&self, spec: &HandlerSpec) -> ChainResult<Resolved> {
        let species = match spec.kind.as_deref() {
            Some(kind) => Some(
                self.species(kind)
                    .ok_or_else(|| ChainError::UnknownKind(kind.to_string()))?,
            ),
            None => None,
        };

        let name = spec
            .name
            .clone()
            .or_else(|| species.map(|s| s.name().to_string()))
            .ok_or(ChainError::MissingField("a name or a kind"))?;
        let trigger = spec
            .trigger
            .clone()
            .or_else(|| species.map(|s| s.trigger().to_string()))
            .ok_or(ChainError::MissingField("a trigger or a kind"))?;
        let template = match spec.template.as_deref() {
            Some(source) => ResponseTemplate::parse(source)?,
            None => ResponseTemplate::default(),
        };

        Ok(Resolved {
            name,
            trigger,
            template,
        })
    }

    /// Construct an unlinked handler for a config entry.
    pub fn build(&self, spec: &HandlerSpec) -> ChainResult<Arc<dyn Handler>> {
        let Resolved {
            name,
            trigger,
            template,
        } = self.resolve(spec)?;
        Ok(Arc::new(FeedHandler::new(name, trigger, template)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
