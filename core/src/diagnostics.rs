//! Where swallowed errors go.
//!
//! The store's fetch action and the form's submit never return their
//! failures to callers; they hand them to a `DiagnosticSink` instead.

use std::error::Error;

/// Receives errors that an action chose not to propagate.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, error: &(dyn Error + 'static));
}

/// Default sink: one `tracing` error event per report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, error: &(dyn Error + 'static)) {
        match error.source() {
            Some(source) => tracing::error!(error = %error, cause = %source, "action failed"),
            None => tracing::error!(error = %error, "action failed"),
        }
    }
}
