//! Typed field access over one untyped document node.

use crate::import::error::ImportError;
use serde_yaml::{Mapping, Value};

/// One mapping node of the decoded document, with the context string used
/// to locate it in error messages.
///
/// The accessors distinguish "absent" from "present with the wrong shape":
/// an absent optional field is `Ok(None)`, a present field of the wrong
/// type is a malformed-document error.
pub(crate) struct Node<'a> {
    map: &'a Mapping,
    context: String,
}

impl<'a> Node<'a> {
    /// Wrap a value, failing if it is not a mapping.
    pub fn new(value: &'a Value, context: impl Into<String>) -> Result<Self, ImportError> {
        let context = context.into();
        match value.as_mapping() {
            Some(map) => Ok(Self { map, context }),
            None => Err(ImportError::MalformedDocument {
                at: context,
                reason: "node is not a mapping".to_string(),
            }),
        }
    }

    /// Whether the node has this field, regardless of its shape.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str, ImportError> {
        match self.optional_str(key)? {
            Some(value) => Ok(value),
            None => Err(self.malformed(format!("missing required field `{key}`"))),
        }
    }

    pub fn optional_str(&self, key: &str) -> Result<Option<&'a str>, ImportError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.malformed(format!("field `{key}` must be a string"))),
        }
    }

    pub fn optional_bool(&self, key: &str) -> Result<Option<bool>, ImportError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.malformed(format!("field `{key}` must be a boolean"))),
        }
    }

    pub fn optional_seq(&self, key: &str) -> Result<Option<&'a [Value]>, ImportError> {
        match self.map.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_sequence()
                .map(|seq| Some(seq.as_slice()))
                .ok_or_else(|| self.malformed(format!("field `{key}` must be a sequence"))),
        }
    }

    fn malformed(&self, reason: String) -> ImportError {
        ImportError::MalformedDocument {
            at: self.context.clone(),
            reason,
        }
    }
}
