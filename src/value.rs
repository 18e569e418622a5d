use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping level of a nested message document
pub type MessageMap = IndexMap<String, MessageValue>;

/// A node of a nested message document: either a message string or a
/// further level of keys.
///
/// ```yaml
/// en:
///   greeting: Hello
///   inbox:
///     one: 1 message
///     other: "%{count} messages"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageValue {
    Scalar(String),
    Mapping(MessageMap),
}

impl MessageValue {
    pub fn is_scalar(&self) -> bool {
        matches!(self, MessageValue::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            MessageValue::Scalar(s) => Some(s),
            MessageValue::Mapping(_) => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MessageMap> {
        match self {
            MessageValue::Mapping(map) => Some(map),
            MessageValue::Scalar(_) => None,
        }
    }
}

impl From<&str> for MessageValue {
    fn from(value: &str) -> Self {
        MessageValue::Scalar(value.to_owned())
    }
}

impl From<String> for MessageValue {
    fn from(value: String) -> Self {
        MessageValue::Scalar(value)
    }
}

impl From<MessageMap> for MessageValue {
    fn from(value: MessageMap) -> Self {
        MessageValue::Mapping(value)
    }
}

/// Flat messages keyed by dot-joined paths, e.g. `en.inbox.title`.
///
/// Insertion order is kept so that re-nesting reproduces the authored key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatMessages(pub IndexMap<String, String>);

impl FlatMessages {
    pub fn new() -> Self {
        FlatMessages(IndexMap::new())
    }
    pub fn with_message(&mut self, key: &str, message: &str) -> &mut Self {
        self.0.insert(key.to_owned(), message.to_owned());
        self
    }
    pub fn get_message(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }
    pub fn get_messages(&self) -> &IndexMap<String, String> {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatMessages {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FlatMessages(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a FlatMessages {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_messages_keep_insertion_order() {
        let mut messages = FlatMessages::new();
        messages
            .with_message("b", "second")
            .with_message("a", "first");
        let keys: Vec<&String> = messages.get_messages().keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(messages.get_message("a"), Some(&"first".to_string()));
    }

    #[test]
    fn test_message_value_accessors() {
        let scalar = MessageValue::from("hi");
        assert!(scalar.is_scalar());
        assert_eq!(scalar.as_scalar(), Some("hi"));
        assert!(scalar.as_mapping().is_none());

        let mapping = MessageValue::from(MessageMap::new());
        assert!(!mapping.is_scalar());
        assert!(mapping.as_mapping().is_some());
    }

    #[test]
    fn test_message_value_untagged_json() {
        let value: MessageValue =
            serde_json::from_str(r#"{"a": "x", "b": {"c": "y"}}"#).unwrap();
        let map = value.as_mapping().unwrap();
        assert_eq!(map["a"], MessageValue::from("x"));
        assert_eq!(
            map["b"].as_mapping().unwrap()["c"],
            MessageValue::from("y")
        );
    }
}
