use tracing::warn;

use crate::error::ExpansionError;

/// A non-fatal problem found while unflattening. The affected entry is
/// dropped and the rest of the document is still produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A plural message could not be expanded
    ExpansionFailed(ExpansionError),
    /// A path runs through an existing message, or would replace an existing subtree
    PathConflict { key: String },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::ExpansionFailed(err) => write!(f, "{}", err),
            Diagnostic::PathConflict { key } => write!(
                f,
                "Key {} conflicts with an existing entry of a different shape",
                key
            ),
        }
    }
}

/// Receiver for non-fatal diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
    }
}

/// Collects diagnostics for the caller to inspect
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
