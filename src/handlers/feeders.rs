//! Concrete handlers.
//!
//! [`FeedHandler`] answers exactly one trigger value with a templated
//! acknowledgment. [`Species`] is the closed set of reference handlers.

use super::core::{Handler, Link};
use crate::template::ResponseTemplate;
use std::fmt;
use std::sync::Arc;

/// The reference handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Monkey,
    Squirrel,
    Dog,
}

impl Species {
    /// All species, in reference chain order.
    pub const ALL: [Species; 3] = [Species::Monkey, Species::Squirrel, Species::Dog];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monkey => "Monkey",
            Self::Squirrel => "Squirrel",
            Self::Dog => "Dog",
        }
    }

    /// Configuration kind (lowercase name).
    pub fn kind(self) -> &'static str {
        match self {
            Self::Monkey => "monkey",
            Self::Squirrel => "squirrel",
            Self::Dog => "dog",
        }
    }

    /// The one request this species eats.
    pub fn trigger(self) -> &'static str {
        match self {
            Self::Monkey => "Banana",
            Self::Squirrel => "Nut",
            Self::Dog => "MeatBall",
        }
    }

    /// Build a fresh, unlinked handler for this species.
    pub fn handler(self) -> FeedHandler {
        FeedHandler::new(self.name(), self.trigger(), ResponseTemplate::default())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handler bound to a single trigger value.
///
/// Name, trigger and template are fixed at construction.
#[derive(Debug)]
pub struct FeedHandler {
    name: String,
    trigger: String,
    template: ResponseTemplate,
    link: Link,
}

impl FeedHandler {
    pub fn new(
        name: impl Into<String>,
        trigger: impl Into<String>,
        template: ResponseTemplate,
    ) -> Self {
        Self {
            name: name.into(),
            trigger: trigger.into(),
            template,
            link: Link::new(),
        }
    }

    pub fn monkey() -> Self {
        Species::Monkey.handler()
    }

    pub fn squirrel() -> Self {
        Species::Squirrel.handler()
    }

    pub fn dog() -> Self {
        Species::Dog.handler()
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn template(&self) -> &ResponseTemplate {
        &self.template
    }

    /// Wrap in an `Arc` for linking.
    pub fn shared(self) -> Arc<dyn Handler> {
        Arc::new(self)
    }
}

impl Handler for FeedHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn link(&self) -> &Link {
        &self.link
    }

    fn consume(&self, request: &str) -> Option<String> {
        (request == self.trigger).then(|| self.template.render(&self.name, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_table() {
        let table: Vec<_> = Species::ALL
            .iter()
            .map(|s| (s.name(), s.kind(), s.trigger()))
            .collect();
        assert_eq!(
            table,
            vec![
                ("Monkey", "monkey", "Banana"),
                ("Squirrel", "squirrel", "Nut"),
                ("Dog", "dog", "MeatBall"),
            ]
        );
    }

    #[test]
    fn test_consume_own_trigger() {
        assert_eq!(
            FeedHandler::squirrel().consume("Nut").as_deref(),
            Some("Squirrel: I'll eat the Nut")
        );
        assert_eq!(FeedHandler::squirrel().consume("Banana"), None);
    }

    #[test]
    fn test_consume_does_not_consult_successor() {
        let monkey = FeedHandler::monkey();
        monkey.set_next(FeedHandler::squirrel().shared()).unwrap();
        assert_eq!(monkey.consume("Nut"), None);
        assert!(monkey.handle("Nut").is_some());
    }

    #[test]
    fn test_custom_template() {
        let cat = FeedHandler::new(
            "Cat",
            "Fish",
            ResponseTemplate::parse("{name} takes the {request}").unwrap(),
        );
        assert_eq!(cat.trigger(), "Fish");
        assert_eq!(cat.template().as_str(), "{name} takes the {request}");
        assert_eq!(cat.handle("Fish").as_deref(), Some("Cat takes the Fish"));
    }

    #[test]
    fn test_species_display() {
        assert_eq!(Species::Squirrel.to_string(), "Squirrel");
    }
}
