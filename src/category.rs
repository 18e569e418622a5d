/// The reserved Rails plural subkeys.
///
/// A mapping whose keys are all drawn from this set is a plural block and
/// folds into a single `{{PLURAL|...}}` message. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Many,
    Few,
    Other,
    Two,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Many,
        PluralCategory::Few,
        PluralCategory::Other,
        PluralCategory::Two,
    ];

    /// Look up a category by its exact (lowercase) key name
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }

    pub fn is_category(key: &str) -> bool {
        Self::from_key(key).is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Many => "many",
            PluralCategory::Few => "few",
            PluralCategory::Other => "other",
            PluralCategory::Two => "two",
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
