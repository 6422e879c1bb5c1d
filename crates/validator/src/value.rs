//! Dynamic candidate values
//!
//! A chain validates one [`Value`] at a time. The variants mirror what a
//! loosely typed request payload can carry; absent inputs (`None`, a missing
//! JSON key) collapse into [`Value::Null`] so both count as *missing*.

use indexmap::IndexMap;
use std::fmt;

/// Key-ordered map used for object values.
pub type ObjectMap = IndexMap<String, Value>;

/// A tagged candidate value.
///
/// Numbers are stored as `f64`, so `NaN` and the infinities are
/// representable and can be rejected by the numeric checks.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null or absent.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number, integral or not.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A string-keyed mapping.
    Object(ObjectMap),
}

impl Value {
    /// Returns `true` for null or absent values.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_object(&self) -> Option<&ObjectMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Text form of a scalar, the way it is compared against string patterns.
    ///
    /// Returns `None` for null, arrays and objects.
    #[must_use]
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Null | Self::Array(_) | Self::Object(_) => None,
        }
    }
}

/// Renders integral numbers without a trailing `.0`.
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{k:?}:{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )+
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32);

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Self::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl From<ObjectMap> for Value {
    fn from(map: ObjectMap) -> Self {
        Self::Object(map)
    }
}

/// `None` is an absent value and becomes [`Value::Null`].
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
