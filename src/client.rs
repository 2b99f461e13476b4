//! Client driver.
//!
//! The client submits requests to a single entry handler. It does not know
//! whether that handler is the head of a chain or an interior node.

use crate::chain::describe;
use crate::handlers::Handler;
use crate::telemetry::spans;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// Result of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A handler answered the request.
    Handled { request: String, reply: String },
    /// The chain was exhausted without a match.
    Untouched { request: String },
}

impl Outcome {
    pub fn request(&self) -> &str {
        match self {
            Self::Handled { request, .. } | Self::Untouched { request } => request,
        }
    }

    pub fn reply(&self) -> Option<&str> {
        match self {
            Self::Handled { reply, .. } => Some(reply),
            Self::Untouched { .. } => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Transcript line for this outcome.
    pub fn line(&self) -> String {
        match self {
            Self::Handled { reply, .. } => format!(" {reply}"),
            Self::Untouched { request } => format!(" {request} was left untouched."),
        }
    }
}

/// Drives requests into one entry handler.
pub struct Client {
    entry: Arc<dyn Handler>,
}

impl Client {
    pub fn new(entry: Arc<dyn Handler>) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &Arc<dyn Handler> {
        &self.entry
    }

    /// Chain reachable from the entry, e.g. `Squirrel > Dog`.
    pub fn describe(&self) -> String {
        describe(self.entry.as_ref())
    }

    /// Dispatch one request.
    pub fn submit(&self, request: &str) -> Outcome {
        let _span = spans::dispatch(request, self.entry.name()).entered();

        match self.entry.handle(request) {
            Some(reply) => {
                debug!(reply = %reply, "Request handled");
                Outcome::Handled {
                    request: request.to_string(),
                    reply,
                }
            }
            None => {
                debug!("Request left untouched");
                Outcome::Untouched {
                    request: request.to_string(),
                }
            }
        }
    }

    /// Dispatch every request in order.
    pub fn serve<I, S>(&self, requests: I) -> Vec<Outcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        requests
            .into_iter()
            .map(|request| self.submit(request.as_ref()))
            .collect()
    }

    /// Serve `requests` and render the transcript under `label`.
    pub fn run<I, S>(&self, label: &str, requests: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = self.describe();
        let _span = spans::run(label, &chain).entered();
        let outcomes = self.serve(requests);
        transcript(&format!("{label}: {chain}"), &outcomes)
    }
}

/// Render outcomes as the demo transcript:
///
/// ```text
/// Chain: Monkey > Squirrel > Dog
/// Client: Who wants a Nut?
///  Squirrel: I'll eat the Nut
/// ```
pub fn transcript(heading: &str, outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{heading}");
    for outcome in outcomes {
        let _ = writeln!(out, "Client: Who wants a {}?", outcome.request());
        let _ = writeln!(out, "{}", outcome.line());
    }
    out
}
