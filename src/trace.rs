//! Explicit trace context and the tracing subscriber setup.
//!
//! Every inbound request gets a [`TraceId`] at the boundary (HTTP middleware
//! or CLI startup) and passes it down through the client, the actor
//! dispatch, and persistence. The id is an explicit value threaded through
//! call signatures, never ambient global state, so a log line can always be
//! tied back to the request that produced it.

use std::fmt;
use uuid::Uuid;

/// Identifier correlating all log events produced on behalf of one inbound
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(String);

impl TraceId {
    /// Fresh random id, one per HTTP request.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Process-scoped id for CLI invocations and lifecycle events
    /// (startup load, shutdown flush).
    pub fn for_process() -> Self {
        Self(format!("trace-{}", std::process::id()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Initializes structured logging for the whole process.
///
/// Filtering is controlled through `RUST_LOG`, e.g. `RUST_LOG=info` or
/// `RUST_LOG=todo_actor=debug`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_trace_id_carries_pid() {
        let trace = TraceId::for_process();
        assert_eq!(trace.as_str(), format!("trace-{}", std::process::id()));
    }

    #[test]
    fn fresh_trace_ids_are_unique() {
        assert_ne!(TraceId::new(), TraceId::new());
    }
}
