//! `serde_json` interop.
//!
//! Request payloads usually arrive as `serde_json::Value`. These conversions
//! let them feed a chain directly; a missing key looked up with
//! [`serde_json::Value::get`] converts from `None` to [`Value::Null`].
//!
//! # Examples
//!
//! ```
//! use chainval_validator::{ErrorMessages, validate};
//! use serde_json::json;
//!
//! let body = json!({ "email": "user@example.com" });
//! let messages = ErrorMessages::new("required", "invalid");
//! let mut errors = Vec::new();
//!
//! validate(body.get("email").cloned(), &messages, &mut errors).is_email();
//! validate(body.get("name").cloned(), &messages, &mut errors).is_string(None, None);
//! assert_eq!(errors, vec!["required".to_string()]);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{ObjectMap, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect::<ObjectMap>(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

/// JSON has no NaN or infinity; those numbers serialize as `null`.
impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => number_to_json(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // keep integers integral so they round-trip as `1`, not `1.0`
    if n.fract() == 0.0 && n.abs() <= crate::validators::MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
