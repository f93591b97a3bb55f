//! The JSON value tree.
//!
//! [`Value`] is a closed sum type: every consumer (serializer, equality,
//! accessors) is a total function over a known variant set, checked
//! exhaustively by the compiler. Numbers keep the distinctions the parser
//! draws — [`Value::Int`] and [`Value::Long`] for exact integers,
//! [`Value::Decimal`] for everything else — while equality and hashing treat
//! mathematically equal numbers as the same value regardless of variant.
//! `Float` and `Double` exist for building trees programmatically; the
//! parser never produces them.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::decimal::{Decimal, NumericKey};
use crate::error::TypeError;
use crate::format;
use crate::map::OrderedMap;

/// The container backing JSON objects: member order is insertion order.
pub type Object = OrderedMap<String, Value>;

/// A JSON value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The `null` literal.
    #[default]
    Null,
    /// A `true` or `false` literal.
    Bool(bool),
    /// An exact integer within 32-bit signed range.
    Int(i32),
    /// An exact integer within 64-bit signed range but not 32-bit.
    Long(i64),
    /// A single-precision float, for programmatically built trees.
    Float(f32),
    /// A double-precision float, for programmatically built trees.
    Double(f64),
    /// A number with a fractional part, exponent, or magnitude beyond i64.
    Decimal(Decimal),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An insertion-ordered set of key/value members.
    Object(Object),
}

impl Value {
    /// The variant name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Double(_)
            | Value::Decimal(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Returns true if this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a numeric value of any variant.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Double(_)
                | Value::Decimal(_)
        )
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// The boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The exact integer value, if this is a number that is integral and
    /// within i64 range.
    pub fn as_i64(&self) -> Option<i64> {
        match self.numeric_key() {
            Some(NumericKey::Int(i)) => Some(i),
            _ => None,
        }
    }

    /// A reference to the text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// A reference to the elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// A reference to the members, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object member by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up an array element by index.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// The boolean value, or a type error.
    pub fn to_bool(&self) -> Result<bool, TypeError> {
        self.as_bool().ok_or(TypeError {
            expected: "boolean",
            found: self.type_name(),
        })
    }

    /// The string content, or a type error.
    pub fn to_str(&self) -> Result<&str, TypeError> {
        self.as_str().ok_or(TypeError {
            expected: "string",
            found: self.type_name(),
        })
    }

    /// The array elements, or a type error.
    pub fn to_array(&self) -> Result<&[Value], TypeError> {
        self.as_array().ok_or(TypeError {
            expected: "array",
            found: self.type_name(),
        })
    }

    /// The object members, or a type error.
    pub fn to_object(&self) -> Result<&Object, TypeError> {
        self.as_object().ok_or(TypeError {
            expected: "object",
            found: self.type_name(),
        })
    }

    /// The exact value as an i32. Accepts any numeric variant whose
    /// mathematical value is integral and within i32 range.
    pub fn to_i32(&self) -> Result<i32, TypeError> {
        self.as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .ok_or(TypeError {
                expected: "32-bit integer",
                found: self.type_name(),
            })
    }

    /// The exact value as an i64. Accepts any numeric variant whose
    /// mathematical value is integral and within i64 range.
    pub fn to_i64(&self) -> Result<i64, TypeError> {
        self.as_i64().ok_or(TypeError {
            expected: "64-bit integer",
            found: self.type_name(),
        })
    }

    /// The value as an f32, widening or rounding as needed.
    pub fn to_f32(&self) -> Result<f32, TypeError> {
        match self {
            Value::Int(i) => Ok(*i as f32),
            Value::Long(i) => Ok(*i as f32),
            Value::Float(f) => Ok(*f),
            Value::Double(f) => Ok(*f as f32),
            Value::Decimal(d) => Ok(d.to_f64() as f32),
            _ => Err(TypeError {
                expected: "number",
                found: self.type_name(),
            }),
        }
    }

    /// The value as an f64, widening or rounding as needed.
    pub fn to_f64(&self) -> Result<f64, TypeError> {
        match self {
            Value::Int(i) => Ok(f64::from(*i)),
            Value::Long(i) => Ok(*i as f64),
            Value::Float(f) => Ok(f64::from(*f)),
            Value::Double(f) => Ok(*f),
            Value::Decimal(d) => Ok(d.to_f64()),
            _ => Err(TypeError {
                expected: "number",
                found: self.type_name(),
            }),
        }
    }

    fn numeric_key(&self) -> Option<NumericKey> {
        match self {
            Value::Int(i) => Some(NumericKey::from_i64(i64::from(*i))),
            Value::Long(i) => Some(NumericKey::from_i64(*i)),
            Value::Float(f) => Some(NumericKey::from_f32(*f)),
            Value::Double(f) => Some(NumericKey::from_f64(*f)),
            Value::Decimal(d) => Some(NumericKey::from_decimal(d)),
            _ => None,
        }
    }

    fn is_nan(&self) -> bool {
        match self {
            Value::Float(f) => f.is_nan(),
            Value::Double(f) => f.is_nan(),
            _ => false,
        }
    }
}

/// Numeric values of different variants are equal iff mathematically equal:
/// `Int(5)`, `Long(5)` and `Decimal("5.0")` all compare equal. NaN compares
/// unequal to everything, itself included, so `Value` is `PartialEq` but not
/// `Eq`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Decimal(a), Value::Decimal(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ if self.is_number() && other.is_number() => {
                if self.is_nan() || other.is_nan() {
                    return false;
                }
                self.numeric_key() == other.numeric_key()
            }
            _ => false,
        }
    }
}

/// Equal values hash identically: all numeric variants hash through the same
/// canonical key used for equality.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => state.write_u8(0),
            Value::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Value::String(s) => {
                state.write_u8(2);
                s.hash(state);
            }
            Value::Array(items) => {
                state.write_u8(3);
                items.hash(state);
            }
            Value::Object(map) => {
                state.write_u8(4);
                map.hash(state);
            }
            _ => {
                state.write_u8(5);
                self.numeric_key().hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format::serialize(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        match i32::try_from(value) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Long(value),
        }
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl Object {
    /// A member as a string: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, TypeError> {
        self.get(key).map(Value::to_str).transpose()
    }

    /// A member as an i32: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_i32(&self, key: &str) -> Result<Option<i32>, TypeError> {
        self.get(key).map(Value::to_i32).transpose()
    }

    /// A member as an i64: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, TypeError> {
        self.get(key).map(Value::to_i64).transpose()
    }

    /// A member as an f64: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, TypeError> {
        self.get(key).map(Value::to_f64).transpose()
    }

    /// A member as a boolean: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, TypeError> {
        self.get(key).map(Value::to_bool).transpose()
    }

    /// A member as an array: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_array(&self, key: &str) -> Result<Option<&[Value]>, TypeError> {
        self.get(key).map(Value::to_array).transpose()
    }

    /// A member as an object: `Ok(None)` when absent, `Err` on wrong variant.
    pub fn get_object(&self, key: &str) -> Result<Option<&Object>, TypeError> {
        self.get(key).map(Value::to_object).transpose()
    }
}

/// Typed views over array elements.
///
/// Each view is a lazy, restartable projection of the element iterator
/// through the matching conversion; an element of the wrong variant yields
/// `Err` for that position without ending the iteration.
pub trait TypedItems {
    /// The elements as strings.
    fn strings(&self) -> impl Iterator<Item = Result<&str, TypeError>>;
    /// The elements as exact 32-bit integers.
    fn ints(&self) -> impl Iterator<Item = Result<i32, TypeError>>;
    /// The elements as exact 64-bit integers.
    fn longs(&self) -> impl Iterator<Item = Result<i64, TypeError>>;
    /// The elements as single-precision floats.
    fn floats(&self) -> impl Iterator<Item = Result<f32, TypeError>>;
    /// The elements as double-precision floats.
    fn doubles(&self) -> impl Iterator<Item = Result<f64, TypeError>>;
    /// The elements as booleans.
    fn booleans(&self) -> impl Iterator<Item = Result<bool, TypeError>>;
    /// The elements as arrays.
    fn arrays(&self) -> impl Iterator<Item = Result<&[Value], TypeError>>;
    /// The elements as objects.
    fn objects(&self) -> impl Iterator<Item = Result<&Object, TypeError>>;
}

impl TypedItems for [Value] {
    fn strings(&self) -> impl Iterator<Item = Result<&str, TypeError>> {
        self.iter().map(Value::to_str)
    }

    fn ints(&self) -> impl Iterator<Item = Result<i32, TypeError>> {
        self.iter().map(Value::to_i32)
    }

    fn longs(&self) -> impl Iterator<Item = Result<i64, TypeError>> {
        self.iter().map(Value::to_i64)
    }

    fn floats(&self) -> impl Iterator<Item = Result<f32, TypeError>> {
        self.iter().map(Value::to_f32)
    }

    fn doubles(&self) -> impl Iterator<Item = Result<f64, TypeError>> {
        self.iter().map(Value::to_f64)
    }

    fn booleans(&self) -> impl Iterator<Item = Result<bool, TypeError>> {
        self.iter().map(Value::to_bool)
    }

    fn arrays(&self) -> impl Iterator<Item = Result<&[Value], TypeError>> {
        self.iter().map(Value::to_array)
    }

    fn objects(&self) -> impl Iterator<Item = Result<&Object, TypeError>> {
        self.iter().map(Value::to_object)
    }
}
