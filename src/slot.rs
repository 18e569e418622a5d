//! Slot tokens for shielding message fragments during plural expansion
//!
//! Before a `{{PLURAL|...}}` block is split on `|` and `=`, every `{name}`
//! variable and every plural block is swapped out for a slot token. Tokens are
//! wrapped in U+007F (DEL), which never appears in authored messages, and carry
//! none of `{ } | =`, so they survive the plural syntax untouched.
//!
//! Format: `\u{7f}SLOT{n}\u{7f}` where `n` comes from a process-wide counter.

use std::sync::atomic::{AtomicU64, Ordering};

const SLOT_DELIMITER: char = '\u{7f}';

static NEXT_SLOT: AtomicU64 = AtomicU64::new(1);

/// Hands out collision-free slot tokens. Safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlotGenerator;

impl SlotGenerator {
    pub fn next_token(&self) -> String {
        let n = NEXT_SLOT.fetch_add(1, Ordering::Relaxed);
        format!("{SLOT_DELIMITER}SLOT{n}{SLOT_DELIMITER}")
    }
}

/// A slot token and the original text it stands in for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub token: String,
    pub original: String,
}

/// Ordered set of slots taken out of one message
#[derive(Debug, Default)]
pub struct SlotTable {
    generator: SlotGenerator,
    slots: Vec<Slot>,
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `original` under a fresh token and return the token
    pub fn reserve(&mut self, original: &str) -> String {
        let token = self.generator.next_token();
        self.slots.push(Slot {
            token: token.clone(),
            original: original.to_owned(),
        });
        token
    }

    #[cfg(test)]
    fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Put every original fragment back in place of its token
    pub fn restore(&self, text: &str) -> String {
        let mut result = text.to_string();
        for slot in &self.slots {
            result = result.replace(&slot.token, &slot.original);
        }
        result
    }
}

/// Whether `text` still carries an unrestored slot token
pub fn contains_slot(text: &str) -> bool {
    text.contains(SLOT_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique() {
        let generator = SlotGenerator;
        let tokens: HashSet<String> = (0..100).map(|_| generator.next_token()).collect();
        assert_eq!(tokens.len(), 100, "All tokens should be unique");
    }

    #[test]
    fn test_tokens_avoid_plural_syntax() {
        let token = SlotGenerator.next_token();
        for c in ['{', '}', '|', '='] {
            assert!(!token.contains(c), "token {:?} contains {:?}", token, c);
        }
        assert!(contains_slot(&token));
    }

    #[test]
    fn test_tokens_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..250)
                        .map(|_| SlotGenerator.next_token())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        let mut all = HashSet::new();
        for handle in handles {
            for token in handle.join().unwrap() {
                assert!(all.insert(token));
            }
        }
        assert_eq!(all.len(), 1000);
    }

    #[test]
    fn test_reserve_and_restore() {
        let mut table = SlotTable::new();
        let a = table.reserve("{name}");
        let b = table.reserve("{count}");
        let text = format!("Hi {a}, you have {b} new, {a}!");
        assert!(contains_slot(&text));
        assert_eq!(table.restore(&text), "Hi {name}, you have {count} new, {name}!");
        assert_eq!(table.slots().len(), 2);
    }

    #[test]
    fn test_restore_without_tokens_is_identity() {
        let mut table = SlotTable::new();
        table.reserve("{x}");
        assert_eq!(table.restore("plain"), "plain");
        assert!(!contains_slot("plain"));
    }
}
