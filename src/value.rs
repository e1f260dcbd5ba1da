use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt;

/// Ordered map used for objects. Insertion order is preserved so that
/// repairing valid input does not shuffle keys.
pub type Map = IndexMap<String, Value>;
pub type Array = Vec<Value>;

/// A repaired JSON value.
///
/// Integers are arbitrary precision: inputs like `12345678901234567890`
/// survive a repair round-trip without being truncated or degraded to a
/// float. Everything else maps onto the usual JSON data model.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
    Arr(Array),
    Obj(Map),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(..))
    }

    #[must_use]
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    #[must_use]
    pub fn is_arr(&self) -> bool {
        matches!(self, Self::Arr(..))
    }

    #[must_use]
    pub fn is_obj(&self) -> bool {
        matches!(self, Self::Obj(..))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer value if it fits in an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => i64::try_from(i).ok(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_arr(&self) -> Option<&Array> {
        match self {
            Self::Arr(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_obj(&self) -> Option<&Map> {
        match self {
            Self::Obj(o) => Some(o),
            _ => None,
        }
    }

    /// Member lookup; `None` for non-objects and missing keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Obj(o) => o.get(key),
            _ => None,
        }
    }

    /// The text form used when a value ends up in key position, e.g. after a
    /// bracketed key: strings contribute their content, everything else its
    /// serialized form.
    pub(crate) fn key_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            other => crate::emit::to_string_value(other, false),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(BigInt::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Arr(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Obj(v)
    }
}

impl fmt::Display for Value {
    /// Canonical (minified) JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::emit::to_string_value(self, false))
    }
}
