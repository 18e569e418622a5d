//! Flatten Rails-style YAML locale documents into dot-joined keys and back.
//!
//! Plural subtrees are folded into MediaWiki-style `{{PLURAL|...}}` markers so a
//! whole message family can be stored, diffed and translated as one string:
//!
//! ```ignore
//! use ruby_yaml_i18n::{flatten, unflatten, DocumentCodec, YamlCodec};
//!
//! let doc = YamlCodec.decode(b"en:\n  apples:\n    one: an apple\n    other: '{count} apples'\n")?;
//! let flat = flatten(&doc)?;
//! assert_eq!(
//!     flat.get_message("en.apples").unwrap(),
//!     "{{PLURAL|one=an apple|{count} apples}}"
//! );
//! assert_eq!(unflatten(&flat), doc);
//! ```

pub mod category;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod expand;
pub mod flatten;
pub mod fold;
pub mod slot;
pub mod unflatten;
pub mod value;

#[cfg(test)]
mod integration_tests;

pub use category::PluralCategory;
pub use codec::{
    DocumentCodec, JsonCodec, SUPPORTED_EXTENSIONS, YamlCodec, codec_for_extension,
    decode_flat_json, encode_flat_json,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{
    CodecError, CodecResult, ExpansionError, ExpansionResult, FlattenError, FlattenResult,
};
pub use expand::{PluralExpansion, expand_plural};
pub use flatten::flatten;
pub use fold::{PLURAL_DIRECTIVE, fold_plural};
pub use slot::SlotGenerator;
pub use unflatten::{unflatten, unflatten_with};
pub use value::{FlatMessages, MessageMap, MessageValue};
