#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::multiple_crate_versions
)]

//! Top-level field extraction from JSON objects.
//!
//! A blob is parsed once into a [`JsonObject`]; fields are then read as one of
//! the three [`JsonKind`]s. Only top-level keys are addressable: a key
//! containing `.` is looked up literally.
//!
//! The top-level value must be an object with unique keys. Duplicates in
//! nested objects are resolved by serde_json (last one wins).

use core::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};
use thiserror::Error;

/// Requested type of an extracted field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JsonKind {
    String,
    Uint64,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::Uint64 => "uint64",
            Self::Object => "object",
        })
    }
}

/// An extracted field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonValue {
    String(String),
    Uint64(u64),
    /// Compact JSON text of the nested object.
    Object(String),
}

impl JsonValue {
    #[must_use]
    pub const fn kind(&self) -> JsonKind {
        match self {
            Self::String(_) => JsonKind::String,
            Self::Uint64(_) => JsonKind::Uint64,
            Self::Object(_) => JsonKind::Object,
        }
    }
}

/// Why a uint64 field could not be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeReason {
    Negative,
    Fractional,
    Overflow,
    /// Integral value written with an exponent or decimal point.
    NotAnInteger,
}

impl fmt::Display for RangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "negative",
            Self::Fractional => "fractional",
            Self::Overflow => "exceeds u64::MAX",
            Self::NotAnInteger => "not an integer literal",
        })
    }
}

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("field not found: {key:?}")]
    FieldNotFound { key: String },

    #[error("field {key:?}: expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: JsonKind,
        found: &'static str,
    },

    #[error("field {key:?}: number out of uint64 range ({reason})")]
    Range { key: String, reason: RangeReason },
}

/// A parsed top-level JSON object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonObject {
    fields: Map<String, Value>,
}

impl JsonObject {
    /// Parse `blob`, which must hold exactly one JSON object.
    pub fn parse(blob: &str) -> Result<Self, JsonError> {
        let TopLevel(fields) = serde_json::from_str::<TopLevel>(blob).map_err(|e| {
            tracing::debug!(len = blob.len(), error = %e, "json parse rejected");
            JsonError::Parse(e)
        })?;
        Ok(Self { fields })
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up `key` as `kind`.
    pub fn get(&self, key: &str, kind: JsonKind) -> Result<JsonValue, JsonError> {
        match kind {
            JsonKind::String => self.get_string(key).map(JsonValue::String),
            JsonKind::Uint64 => self.get_uint64(key).map(JsonValue::Uint64),
            JsonKind::Object => self.get_object(key).map(JsonValue::Object),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<String, JsonError> {
        match self.field(key)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(key, JsonKind::String, other)),
        }
    }

    pub fn get_uint64(&self, key: &str) -> Result<u64, JsonError> {
        let n = match self.field(key)? {
            Value::Number(n) => n,
            other => return Err(mismatch(key, JsonKind::Uint64, other)),
        };
        if let Some(v) = n.as_u64() {
            return Ok(v);
        }
        let reason = classify_number(&n.to_string());
        tracing::debug!(key, %reason, "uint64 field out of range");
        Err(JsonError::Range {
            key: key.to_owned(),
            reason,
        })
    }

    /// The nested object at `key`, re-serialized as compact JSON.
    pub fn get_object(&self, key: &str) -> Result<String, JsonError> {
        match self.field(key)? {
            obj @ Value::Object(_) => Ok(obj.to_string()),
            other => Err(mismatch(key, JsonKind::Object, other)),
        }
    }

    fn field(&self, key: &str) -> Result<&Value, JsonError> {
        self.fields.get(key).ok_or_else(|| {
            tracing::debug!(key, "json field not found");
            JsonError::FieldNotFound {
                key: key.to_owned(),
            }
        })
    }
}

/// Parse `blob` and extract the top-level field `key` as `kind`.
pub fn extract(blob: &str, key: &str, kind: JsonKind) -> Result<JsonValue, JsonError> {
    JsonObject::parse(blob)?.get(key, kind)
}

// Why a number literal that is not a plain u64 fails. Numbers keep their
// source text (`arbitrary_precision`), so magnitudes beyond f64 classify too.
fn classify_number(literal: &str) -> RangeReason {
    if literal.starts_with('-') {
        return RangeReason::Negative;
    }
    let (mantissa, exponent) = literal
        .split_once(['e', 'E'])
        .unwrap_or((literal, "0"));
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let digits = [int, frac].concat();
    let digits = digits.trim_start_matches('0');
    let significant = digits.trim_end_matches('0');
    if significant.is_empty() {
        // zero written as 0.0 or 0e5
        return RangeReason::NotAnInteger;
    }

    // value = significant * 10^scale
    let scale = parse_exponent(exponent)
        .saturating_add(len_i64(digits) - len_i64(significant))
        .saturating_sub(len_i64(frac));
    if scale < 0 {
        return RangeReason::Fractional;
    }
    // u64::MAX has 20 digits
    if len_i64(significant).saturating_add(scale) > 20 {
        return RangeReason::Overflow;
    }
    let zeros = usize::try_from(scale).unwrap_or(usize::MAX);
    let integral = format!("{significant}{}", "0".repeat(zeros));
    if integral.parse::<u64>().is_ok() {
        RangeReason::NotAnInteger
    } else {
        RangeReason::Overflow
    }
}

fn parse_exponent(text: &str) -> i64 {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn len_i64(s: &str) -> i64 {
    i64::try_from(s.len()).unwrap_or(i64::MAX)
}

const fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(key: &str, expected: JsonKind, found: &Value) -> JsonError {
    let found = type_name(found);
    tracing::debug!(key, %expected, found, "json field type mismatch");
    JsonError::TypeMismatch {
        key: key.to_owned(),
        expected,
        found,
    }
}

// Top-level object with duplicate-key rejection.
struct TopLevel(Map<String, Value>);

impl<'de> Deserialize<'de> for TopLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TopLevelVisitor)
    }
}

struct TopLevelVisitor;

impl<'de> Visitor<'de> for TopLevelVisitor {
    type Value = TopLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<TopLevel, A::Error> {
        let mut fields = Map::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            if fields.contains_key(&key) {
                return Err(de::Error::custom(format_args!("duplicate key `{key}`")));
            }
            fields.insert(key, value);
        }
        Ok(TopLevel(fields))
    }
}
