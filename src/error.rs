/// Errors raised while flattening a nested document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    /// A mapping mixes reserved plural categories with ordinary keys.
    /// Holds every key of the offending mapping, in document order.
    MixedPluralKeys { keys: Vec<String> },
    /// Two different paths produced the same flat key (e.g. a literal `a.b` key next to `a: {b: ..}`)
    KeyCollision { key: String },
}

impl std::fmt::Display for FlattenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlattenError::MixedPluralKeys { keys } => write!(
                f,
                "Reserved plural keywords mixed with other keys: {}.",
                keys.join(", ")
            ),
            FlattenError::KeyCollision { key } => {
                write!(f, "Flattened key '{}' is produced more than once", key)
            }
        }
    }
}

impl std::error::Error for FlattenError {}

/// Errors raised while expanding a `{{PLURAL|...}}` message.
///
/// These are recoverable: the unflattener reports them and skips the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionError {
    /// The message mentions `{{PLURAL` but no complete block could be extracted
    NoPluralBlock { key: String },
    /// Blocks were found but none of their forms resolved to `other`
    MissingOther { key: String },
}

impl std::fmt::Display for ExpansionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpansionError::NoPluralBlock { key } => {
                write!(f, "No complete plural block found for key {}", key)
            }
            ExpansionError::MissingOther { key } => write!(f, "Other not set for key {}", key),
        }
    }
}

impl std::error::Error for ExpansionError {}

/// Errors at the document codec boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The underlying YAML/JSON library rejected the input
    Decode(String),
    /// The underlying YAML/JSON library failed to serialize the document
    Encode(String),
    /// The document is well-formed but cannot be represented as messages
    Shape(String),
    /// No codec is registered for the given file extension
    UnsupportedExtension(String),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::Decode(msg) => write!(f, "Decode error: {}", msg),
            CodecError::Encode(msg) => write!(f, "Encode error: {}", msg),
            CodecError::Shape(msg) => write!(f, "Unsupported document shape: {}", msg),
            CodecError::UnsupportedExtension(ext) => {
                write!(f, "No codec registered for extension '{}'", ext)
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Result type for flattening
pub type FlattenResult<T> = Result<T, FlattenError>;

/// Result type for plural expansion
pub type ExpansionResult<T> = Result<T, ExpansionError>;

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
