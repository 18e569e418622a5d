use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::category::PluralCategory;
use crate::error::{ExpansionError, ExpansionResult};
use crate::fold::PLURAL_DIRECTIVE;
use crate::slot::{SlotGenerator, SlotTable};
use crate::value::FlatMessages;

/// `{name}` style variables. Deliberately narrow so that `{{PLURAL|` never matches.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-zA-Z_-]+\}").expect("placeholder pattern is valid"));

/// One plural block, shortest match, body may span lines
static PLURAL_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\{PLURAL\|(.*?)\}\}").expect("plural block pattern is valid")
});

/// A labelled form such as `one=1 item` or `few = a few items`
static LABELLED_FORM: LazyLock<Regex> = LazyLock::new(|| {
    let choices: Vec<&str> = PluralCategory::ALL.iter().map(|c| c.as_str()).collect();
    Regex::new(&format!(r"(?s)^({})\s*=\s*(.+)$", choices.join("|")))
        .expect("labelled form pattern is valid")
});

/// Result of looking for plural markers in a flat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralExpansion {
    /// The message carries no `{{PLURAL` directive; use it as is
    NoMarker,
    /// One message per plural category, keyed `<key>.<category>`
    Expanded(FlatMessages),
}

/// A plural block cut out of a message, with its body still in slotted form
#[derive(Debug)]
struct PluralBlock {
    token: String,
    body: String,
}

/// Expand `{{PLURAL|...}}` markers in `message` into Rails plural subkeys.
///
/// Variables like `{count}` are preserved verbatim in every alternative, and
/// the text around a plural block is repeated in each alternative:
///
/// ```ignore
/// expand_plural("msg", "You have {{PLURAL|one=1 apple|{count} apples}}")
/// // msg.one   => "You have 1 apple"
/// // msg.other => "You have {count} apples"
/// ```
///
/// When a message holds several blocks, alternatives are matched up by output
/// key, so every block should use the same set of categories. A category that
/// only some blocks define leaves the other blocks' slots unresolved.
///
/// # Errors
/// - `ExpansionError::NoPluralBlock` if the directive appears but no complete
///   block could be cut out
/// - `ExpansionError::MissingOther` if no form resolved to `other`
pub fn expand_plural(key: &str, message: &str) -> ExpansionResult<PluralExpansion> {
    if !message.contains(PLURAL_DIRECTIVE) {
        return Ok(PluralExpansion::NoMarker);
    }

    let mut placeholders = SlotTable::new();
    let mut message = protect_placeholders(message, &mut placeholders);

    let blocks = extract_blocks(&mut message);
    if blocks.is_empty() {
        return Err(ExpansionError::NoPluralBlock {
            key: key.to_string(),
        });
    }

    let mut alternatives: IndexMap<String, String> = IndexMap::new();
    for block in &blocks {
        for form in block.body.split('|') {
            if form.is_empty() {
                continue;
            }

            let (target, value) = match LABELLED_FORM.captures(form) {
                Some(caps) => (
                    format!("{}.{}", key, &caps[1]),
                    caps.get(2).map_or("", |m| m.as_str()),
                ),
                None => (format!("{}.{}", key, PluralCategory::Other), form),
            };

            let alternative = alternatives
                .entry(target)
                .or_insert_with(|| message.clone());
            *alternative = alternative.replace(&block.token, value);
        }
    }

    let other_key = format!("{}.{}", key, PluralCategory::Other);
    if !alternatives.contains_key(&other_key) {
        return Err(ExpansionError::MissingOther {
            key: key.to_string(),
        });
    }

    Ok(PluralExpansion::Expanded(
        alternatives
            .into_iter()
            .map(|(k, v)| {
                let restored = placeholders.restore(&v);
                (k, restored)
            })
            .collect(),
    ))
}

/// Swap each distinct `{name}` variable for a slot token. Repeated
/// occurrences of the same variable share one slot.
fn protect_placeholders(message: &str, table: &mut SlotTable) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for m in PLACEHOLDER.find_iter(message) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }

    let mut result = message.to_string();
    for placeholder in seen {
        let token = table.reserve(placeholder);
        result = result.replace(placeholder, &token);
    }
    result
}

/// Cut every plural block out of `message`, left to right, leaving a slot
/// token where each one was.
fn extract_blocks(message: &mut String) -> Vec<PluralBlock> {
    let generator = SlotGenerator;
    let mut blocks = Vec::new();
    while let Some(caps) = PLURAL_BLOCK.captures(message.as_str()) {
        let (range, body) = match (caps.get(0), caps.get(1)) {
            (Some(whole), Some(body)) => (whole.range(), body.as_str().to_string()),
            _ => break,
        };
        let token = generator.next_token();
        message.replace_range(range, &token);
        blocks.push(PluralBlock { token, body });
    }
    blocks
}
