use crate::category::PluralCategory;
use crate::error::{FlattenError, FlattenResult};
use crate::value::{MessageMap, MessageValue};

/// Opening token shared by every plural marker
pub const PLURAL_DIRECTIVE: &str = "{{PLURAL";

/// Fold a Rails plural mapping into a single `{{PLURAL|...}}` message.
///
/// Returns `Ok(None)` when the mapping is not plural-shaped: it has a nested
/// mapping among its values (plurals only live at the leaves) or none of its
/// keys is a plural category.
///
/// Forms are emitted in the mapping's order, except `other`, which always goes
/// last and without its `other=` label. The expander relies on that: an
/// unlabelled form is read back as `other`.
///
/// ```ignore
/// // one: 1 item, other: N items
/// assert_eq!(fold_plural(&map)?, Some("{{PLURAL|one=1 item|N items}}".into()));
/// ```
///
/// # Limitations
/// An empty `other` value folds to a trailing empty form (`{{PLURAL|one=x|}}`).
/// The expander skips empty forms, so such a message has no `other` when read
/// back and is dropped by `unflatten` with a `MissingOther` diagnostic.
///
/// # Errors
/// `FlattenError::MixedPluralKeys` when category keys share the mapping with
/// ordinary keys.
pub fn fold_plural(map: &MessageMap) -> FlattenResult<Option<String>> {
    let mut plural_keys = false;
    let mut other_keys = false;
    for (key, value) in map {
        if !value.is_scalar() {
            return Ok(None);
        }
        if PluralCategory::is_category(key) {
            plural_keys = true;
        } else {
            other_keys = true;
        }
    }

    if !plural_keys {
        return Ok(None);
    }

    if other_keys {
        return Err(FlattenError::MixedPluralKeys {
            keys: map.keys().cloned().collect(),
        });
    }

    let mut marker = String::from(PLURAL_DIRECTIVE);
    let mut other = None;
    for (key, value) in map {
        let MessageValue::Scalar(text) = value else {
            continue;
        };
        if key == PluralCategory::Other.as_str() {
            other = Some(text);
            continue;
        }
        marker.push('|');
        marker.push_str(key);
        marker.push('=');
        marker.push_str(text);
    }
    if let Some(text) = other {
        marker.push('|');
        marker.push_str(text);
    }
    marker.push_str("}}");

    Ok(Some(marker))
}
