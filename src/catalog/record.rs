use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils;

/// A catalog record as handed out by a [`CatalogClient`](super::CatalogClient).
///
/// Records use the attribute names of the player (`name`, `image`, `track_num`,
/// `album.name`, ...) regardless of how the remote service spells them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Resolves a dotted attribute path to its display string.
    ///
    /// `"album.name"` reads `album`, then `name` off the result. A missing hop
    /// anywhere yields an empty string. String values win unless empty, in
    /// which case the numeric form is used. Double quotes become `*`.
    pub fn attribute(&self, path: &str) -> String {
        let Some(value) = self.lookup(path) else {
            return String::new();
        };

        if let Some(text) = value.as_str() {
            if !text.is_empty() {
                return utils::sanitize_quotes(text);
            }
        }

        match value {
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => u8::from(*flag).to_string(),
            _ => String::new(),
        }
    }

    /// Best-effort numeric parse of [`attribute`](Self::attribute), `0` when it fails.
    pub fn numeric(&self, path: &str) -> u64 {
        let text = self.attribute(path);
        text.parse::<u64>()
            .ok()
            .or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite() && *n >= 0.0)
                    .map(|n| n as u64)
            })
            .unwrap_or(0)
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.0, |current, segment| current.get(segment))
            .filter(|value| !value.is_null())
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
