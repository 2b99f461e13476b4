//! feedchain - request dispatch through a chain of handlers.
//!
//! Each handler either answers a request or forwards it, untouched, to its
//! successor. Dispatch stops at the first handler that answers, or when the
//! chain runs out.
//!
//! ```ignore
//! use feedchain::{Chain, Client};
//!
//! let chain = Chain::reference();
//! assert_eq!(chain.dispatch("Nut").as_deref(), Some("Squirrel: I'll eat the Nut"));
//!
//! let client = Client::new(chain.subchain("Squirrel")?.clone());
//! print!("{}", client.run("Subchain", ["Nut", "Banana"]));
//! ```

pub mod chain;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod telemetry;
pub mod template;

pub use chain::{Chain, ChainBuilder};
pub use client::{Client, Outcome};
pub use error::{ChainError, ChainResult, TemplateError};
pub use handlers::{FeedHandler, Handler, Registry, Species};
pub use template::ResponseTemplate;
