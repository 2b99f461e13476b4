//! Standardized span constructors for dispatch observability.

pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Create a span for one demo run against an entry point.
    pub fn run(label: &str, chain: &str) -> Span {
        info_span!("run", label = %label, chain = %chain)
    }

    /// Create a span for a single request dispatch.
    pub fn dispatch(request: &str, entry: &str) -> Span {
        debug_span!("dispatch", request = %request, entry = %entry)
    }
}
