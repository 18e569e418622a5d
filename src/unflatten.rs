use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::expand::{PluralExpansion, expand_plural};
use crate::value::{FlatMessages, MessageMap, MessageValue};

/// Rebuild a nested document from dot-joined keys.
///
/// Keys sharing a prefix merge into the same subtree, and `{{PLURAL|...}}`
/// messages expand back into per-category subkeys. Entries that cannot be
/// placed are skipped and logged through `tracing`; see [`unflatten_with`] to
/// collect them instead.
pub fn unflatten(flat: &FlatMessages) -> MessageMap {
    unflatten_with(flat, &mut TracingSink)
}

/// Like [`unflatten`], reporting skipped entries to `sink`
pub fn unflatten_with(flat: &FlatMessages, sink: &mut dyn DiagnosticSink) -> MessageMap {
    let mut root = MessageMap::new();
    for (key, value) in flat {
        let expanded = match expand_plural(key, value) {
            Ok(PluralExpansion::Expanded(forms)) => forms,
            Ok(PluralExpansion::NoMarker) => {
                std::iter::once((key.as_str(), value.as_str())).collect()
            }
            Err(err) => {
                sink.report(Diagnostic::ExpansionFailed(err));
                continue;
            }
        };

        for (path, text) in &expanded {
            if !insert_path(&mut root, path, text) {
                sink.report(Diagnostic::PathConflict { key: path.clone() });
            }
        }
    }
    root
}

/// Walk `path` segment by segment, creating missing levels, and store `text`
/// at the last one. Returns false if an existing message or subtree is in
/// the way.
fn insert_path(root: &mut MessageMap, path: &str, text: &str) -> bool {
    let mut segments: Vec<&str> = path.split('.').collect();
    let Some(last) = segments.pop() else {
        return false;
    };

    let mut level = root;
    for segment in segments {
        let child = level
            .entry(segment.to_string())
            .or_insert_with(|| MessageValue::Mapping(MessageMap::new()));
        level = match child {
            MessageValue::Mapping(map) => map,
            MessageValue::Scalar(_) => {
                debug!(path, segment, "Path runs through an existing message");
                return false;
            }
        };
    }

    if let Some(MessageValue::Mapping(_)) = level.get(last) {
        debug!(path, "Path would replace an existing subtree");
        return false;
    }
    level.insert(last.to_string(), MessageValue::Scalar(text.to_string()));
    true
}
