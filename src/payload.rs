//! Generic event payloads.
//!
//! A [`Payload`] is an ordered map from string keys to [`Value`]s. Keys are
//! unique and keep their first-insertion order, so the serialized form is
//! stable across calls for the same gesture kind.
//!
//! Extractors never see a `Payload` directly. They write into a
//! [`PayloadBuilder`] that the registry creates per dispatch and finishes once
//! the extractor returns; the finished payload is then owned by whoever
//! forwards it downstream.
//!
//! # Example
//! ```
//! use pinchpoint::{PayloadBuilder, StateEncoding, GestureState, Value};
//!
//! let mut out = PayloadBuilder::new(StateEncoding::Name);
//! out.put("scale", 1.5);
//! out.put_state(GestureState::Active);
//! let payload = out.finish();
//!
//! assert_eq!(payload.get("scale"), Some(&Value::Float(1.5)));
//! assert_eq!(payload.to_json().to_string(), r#"{"scale":1.5,"state":"Active"}"#);
//! ```

use crate::gesture::GestureState;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

/// Key under which every extractor reports the lifecycle phase.
pub const STATE_KEY: &str = "state";

/// A single payload value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(Payload),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Payload> for Value {
    fn from(v: Payload) -> Self {
        Value::Map(v)
    }
}

/// How the `state` key is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateEncoding {
    /// `"Active"`, `"End"`, ...
    #[default]
    Name,
    /// `0..=5`, see [`GestureState::code`].
    Code,
}

/// Ordered, unique-key map of event data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    entries: Vec<(String, Value)>,
}

impl Payload {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object with keys in insertion order.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        // Non-finite floats have no JSON form.
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::Map(p) => p.to_json(),
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Write side of a [`Payload`], exclusively owned for the duration of one
/// extraction.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    entries: Vec<(String, Value)>,
    state_encoding: StateEncoding,
}

impl PayloadBuilder {
    pub fn new(state_encoding: StateEncoding) -> Self {
        Self {
            entries: Vec::new(),
            state_encoding,
        }
    }

    /// Write `key`. A repeated key replaces the earlier value in place.
    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        self
    }

    /// Write the `state` key using the configured [`StateEncoding`].
    pub fn put_state(&mut self, state: GestureState) -> &mut Self {
        match self.state_encoding {
            StateEncoding::Name => self.put(STATE_KEY, state.name()),
            StateEncoding::Code => self.put(STATE_KEY, state.code()),
        }
    }

    /// Build a nested map under `key` with a builder sharing this one's encoding.
    pub fn put_map(&mut self, key: &str, fill: impl FnOnce(&mut PayloadBuilder)) -> &mut Self {
        let mut nested = PayloadBuilder::new(self.state_encoding);
        fill(&mut nested);
        self.put(key, nested.finish())
    }

    #[inline]
    pub fn state_encoding(&self) -> StateEncoding {
        self.state_encoding
    }

    pub fn finish(self) -> Payload {
        Payload {
            entries: self.entries,
        }
    }
}
