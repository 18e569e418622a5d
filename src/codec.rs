//! Document codecs: the boundary between YAML/JSON bytes and [`MessageMap`].
//!
//! Parsing and serializing the syntax itself is left to `serde_yaml` and
//! `serde_json`; this module only maps their generic values onto message
//! documents. Nothing here touches the filesystem.

use crate::error::{CodecError, CodecResult};
use crate::value::{FlatMessages, MessageMap, MessageValue};

/// File extensions with a registered codec
pub const SUPPORTED_EXTENSIONS: [&str; 3] = [".yml", ".yaml", ".json"];

/// Converts between raw document bytes and a nested message document
pub trait DocumentCodec {
    /// Parse `bytes` into a document. The root must be a mapping.
    fn decode(&self, bytes: &[u8]) -> CodecResult<MessageMap>;

    /// Serialize `doc` back into bytes
    fn encode(&self, doc: &MessageMap) -> CodecResult<Vec<u8>>;

    /// Extensions (with leading dot) this codec handles
    fn extensions(&self) -> &'static [&'static str];
}

/// Rails-style YAML locale files
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlCodec;

/// Nested JSON message files
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl DocumentCodec for YamlCodec {
    fn decode(&self, bytes: &[u8]) -> CodecResult<MessageMap> {
        let value: serde_yaml::Value = serde_yaml::from_slice(bytes)
            .map_err(|e| CodecError::Decode(format!("Failed to parse YAML: {}", e)))?;
        match value {
            serde_yaml::Value::Mapping(map) => yaml_mapping(&map, ""),
            // An empty file is an empty document
            serde_yaml::Value::Null => Ok(MessageMap::new()),
            _ => Err(CodecError::Shape("root must be a mapping".to_string())),
        }
    }

    fn encode(&self, doc: &MessageMap) -> CodecResult<Vec<u8>> {
        serde_yaml::to_string(doc)
            .map(String::into_bytes)
            .map_err(|e| CodecError::Encode(format!("Failed to write YAML: {}", e)))
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".yml", ".yaml"]
    }
}

impl DocumentCodec for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> CodecResult<MessageMap> {
        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| CodecError::Decode(format!("Failed to parse JSON: {}", e)))?;
        let obj = value
            .as_object()
            .ok_or_else(|| CodecError::Shape("root must be an object".to_string()))?;
        json_object(obj, "")
    }

    fn encode(&self, doc: &MessageMap) -> CodecResult<Vec<u8>> {
        serde_json::to_vec_pretty(doc)
            .map_err(|e| CodecError::Encode(format!("Failed to write JSON: {}", e)))
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".json"]
    }
}

/// Pick a codec for a file extension, with or without the leading dot
pub fn codec_for_extension(extension: &str) -> CodecResult<Box<dyn DocumentCodec>> {
    let normalized = format!(".{}", extension.trim_start_matches('.').to_lowercase());
    let codecs: [Box<dyn DocumentCodec>; 2] = [Box::new(YamlCodec), Box::new(JsonCodec)];
    codecs
        .into_iter()
        .find(|codec| codec.extensions().contains(&normalized.as_str()))
        .ok_or(CodecError::UnsupportedExtension(extension.to_string()))
}

/// Parse a flat `{"dot.key": "message"}` JSON object
pub fn decode_flat_json(bytes: &[u8]) -> CodecResult<FlatMessages> {
    serde_json::from_slice(bytes)
        .map_err(|e| CodecError::Decode(format!("Failed to parse flat JSON: {}", e)))
}

pub fn encode_flat_json(messages: &FlatMessages) -> CodecResult<Vec<u8>> {
    serde_json::to_vec_pretty(messages)
        .map_err(|e| CodecError::Encode(format!("Failed to write flat JSON: {}", e)))
}

fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn yaml_key(key: &serde_yaml::Value, parent: &str) -> CodecResult<String> {
    // Rails files routinely use bare `yes`/`no`/numeric keys
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        _ => Err(CodecError::Shape(format!(
            "unsupported key under '{}'",
            parent
        ))),
    }
}

fn yaml_mapping(map: &serde_yaml::Mapping, parent: &str) -> CodecResult<MessageMap> {
    let mut result = MessageMap::new();
    for (key, value) in map {
        let key = yaml_key(key, parent)?;
        let path = child_path(parent, &key);
        let value = match value {
            serde_yaml::Value::Mapping(children) => {
                MessageValue::Mapping(yaml_mapping(children, &path)?)
            }
            serde_yaml::Value::String(s) => MessageValue::Scalar(s.clone()),
            serde_yaml::Value::Number(n) => MessageValue::Scalar(n.to_string()),
            serde_yaml::Value::Bool(b) => MessageValue::Scalar(b.to_string()),
            serde_yaml::Value::Null => MessageValue::Scalar(String::new()),
            serde_yaml::Value::Sequence(_) | serde_yaml::Value::Tagged(_) => {
                return Err(CodecError::Shape(format!(
                    "'{}' is not a message or a group of messages",
                    path
                )));
            }
        };
        result.insert(key, value);
    }
    Ok(result)
}

fn json_object(
    obj: &serde_json::Map<String, serde_json::Value>,
    parent: &str,
) -> CodecResult<MessageMap> {
    let mut result = MessageMap::new();
    for (key, value) in obj {
        let path = child_path(parent, key);
        let value = match value {
            serde_json::Value::Object(children) => {
                MessageValue::Mapping(json_object(children, &path)?)
            }
            serde_json::Value::String(s) => MessageValue::Scalar(s.clone()),
            serde_json::Value::Number(n) => MessageValue::Scalar(n.to_string()),
            serde_json::Value::Bool(b) => MessageValue::Scalar(b.to_string()),
            serde_json::Value::Null => MessageValue::Scalar(String::new()),
            serde_json::Value::Array(_) => {
                return Err(CodecError::Shape(format!(
                    "'{}' is not a message or a group of messages",
                    path
                )));
            }
        };
        result.insert(key.clone(), value);
    }
    Ok(result)
}
