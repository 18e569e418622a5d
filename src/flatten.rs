use indexmap::map::Entry;
use tracing::debug;

use crate::error::{FlattenError, FlattenResult};
use crate::fold::fold_plural;
use crate::value::{FlatMessages, MessageMap, MessageValue};

/// Flatten a nested document into dot-joined keys.
///
/// Plural subtrees (`one`/`other`/... subkeys) collapse into a single
/// `{{PLURAL|...}}` message under their parent key instead of producing one
/// key per category.
///
/// ```yaml
/// en:
///   title: Inbox
///   unread:
///     one: 1 unread
///     other: "{count} unread"
/// ```
///
/// becomes
///
/// ```text
/// en.title  => Inbox
/// en.unread => {{PLURAL|one=1 unread|{count} unread}}
/// ```
///
/// # Limitations
/// Keys that themselves contain `.` are joined as-is and cannot be told apart
/// from nesting afterwards. A plural subtree with an empty `other` does not
/// survive `unflatten`; see [`fold_plural`].
///
/// # Errors
/// - `FlattenError::MixedPluralKeys` if a mapping mixes plural categories with other keys
/// - `FlattenError::KeyCollision` if two paths produce the same flat key
pub fn flatten(doc: &MessageMap) -> FlattenResult<FlatMessages> {
    let mut result = FlatMessages::new();
    flatten_into(doc, &mut result)?;
    Ok(result)
}

fn flatten_into(level: &MessageMap, out: &mut FlatMessages) -> FlattenResult<()> {
    // Already flat: nothing to qualify or fold
    if level.values().all(MessageValue::is_scalar) {
        for (key, value) in level {
            if let MessageValue::Scalar(text) = value {
                insert_unique(out, key.clone(), text.clone())?;
            }
        }
        return Ok(());
    }

    for (key, value) in level {
        match value {
            MessageValue::Scalar(text) => insert_unique(out, key.clone(), text.clone())?,
            MessageValue::Mapping(children) => {
                if let Some(plural) = fold_plural(children)? {
                    debug!(key = %key, "Folded plural subtree");
                    insert_unique(out, key.clone(), plural)?;
                    continue;
                }
                let qualified: MessageMap = children
                    .iter()
                    .map(|(child, v)| (format!("{}.{}", key, child), v.clone()))
                    .collect();
                flatten_into(&qualified, out)?;
            }
        }
    }
    Ok(())
}

fn insert_unique(out: &mut FlatMessages, key: String, value: String) -> FlattenResult<()> {
    match out.0.entry(key) {
        Entry::Occupied(entry) => Err(FlattenError::KeyCollision {
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}
