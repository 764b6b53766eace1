//! # Persistent Records
//!
//! Immutable records built on `im::OrdMap`, with structural sharing so that
//! every "update" is cheap and leaves the original untouched.
//!
//! ## Composition by merging
//!
//! [`merge`] builds a new record holding the union of two records' fields.
//! When both define a field, the right-hand record wins. Neither input is
//! modified.
//!
//! ## Deep immutability
//!
//! A [`Record`] exposes no mutators, and every [`Value`] it holds is itself
//! immutable, nested records and lists included. Changing a nested field
//! goes through [`Record::with_path`], which copies each record along the
//! path and returns a new outer record.
//!
//! ## Example
//!
//! ```
//! use fp_common::record;
//! use fp_common::record::{merge, Value};
//!
//! let a = record! { "a" => "a" };
//! let b = record! { "b" => "b" };
//! let c = merge(&a, &b);
//!
//! assert_eq!(c.get("a"), Some(&Value::from("a")));
//! assert_eq!(c.get("b"), Some(&Value::from("b")));
//! assert_eq!(a.len(), 1); // inputs unchanged
//! ```

use std::fmt;

use im::{OrdMap, Vector};
use serde::Serialize;

use crate::error::{FpError, Result};
use crate::fold::reduce;

/// An immutable field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vector<Value>),
    Record(Record),
}

impl Value {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(values: Vec<V>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

/// A persistent record: named fields, no mutators.
///
/// Every method that "changes" a record returns a new one. Field order is
/// the sorted order of the field names.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: OrdMap<String, Value>,
}

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: OrdMap::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns a new record with `name` set to `value`.
    ///
    /// ```
    /// use fp_common::record::{Record, Value};
    ///
    /// let v1 = Record::new().with("val", 2);
    /// let v2 = v1.with("val", 3);
    ///
    /// assert_eq!(v1.get("val"), Some(&Value::Int(2)));
    /// assert_eq!(v2.get("val"), Some(&Value::Int(3)));
    /// ```
    #[must_use]
    pub fn with(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            fields: self.fields.update(name.into(), value.into()),
        }
    }

    /// Returns a new record without `name`.
    #[must_use]
    pub fn without(&self, name: &str) -> Self {
        Self {
            fields: self.fields.without(name),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Like [`get`](Record::get), failing with [`FpError::MissingField`].
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name).ok_or_else(|| FpError::MissingField {
            name: name.to_string(),
        })
    }

    pub fn get_str(&self, name: &str) -> Result<&str> {
        match self.require(name)? {
            Value::Str(s) => Ok(s),
            other => Err(mismatch(name, "string", other)),
        }
    }

    pub fn get_int(&self, name: &str) -> Result<i64> {
        match self.require(name)? {
            Value::Int(n) => Ok(*n),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    pub fn get_record(&self, name: &str) -> Result<&Record> {
        match self.require(name)? {
            Value::Record(r) => Ok(r),
            other => Err(mismatch(name, "record", other)),
        }
    }

    /// Iterates over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Sets a nested field, copying every record along `path`.
    ///
    /// Every segment but the last must name an existing nested record.
    ///
    /// ```
    /// use fp_common::record;
    ///
    /// let b = record! {
    ///     "foo" => record! { "greeting" => "Hello" },
    ///     "bar" => "world",
    /// };
    /// let changed = b.with_path(&["foo", "greeting"], "Goodbye").unwrap();
    ///
    /// assert_eq!(changed.get_record("foo").unwrap().get_str("greeting").unwrap(), "Goodbye");
    /// assert_eq!(b.get_record("foo").unwrap().get_str("greeting").unwrap(), "Hello");
    /// ```
    pub fn with_path(&self, path: &[&str], value: impl Into<Value>) -> Result<Self> {
        match path {
            [] => Err(FpError::InvalidArgument("empty field path".to_string())),
            [name] => Ok(self.with(*name, value)),
            [name, rest @ ..] => {
                let nested = self.get_record(name)?.with_path(rest, value)?;
                Ok(self.with(*name, nested))
            }
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn mismatch(field: &str, expected: &'static str, found: &Value) -> FpError {
    FpError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Union of the fields of `base` and `overlay`; `overlay` wins on conflict.
///
/// ```
/// use fp_common::record;
/// use fp_common::record::merge;
///
/// let defaults = record! { "val" => 0, "label" => "z" };
/// let updated = merge(&defaults, &record! { "val" => 3 });
///
/// assert_eq!(updated.get_int("val").unwrap(), 3);
/// assert_eq!(updated.get_str("label").unwrap(), "z");
/// assert_eq!(defaults.get_int("val").unwrap(), 0);
/// ```
#[must_use]
pub fn merge(base: &Record, overlay: &Record) -> Record {
    let fields = overlay
        .fields
        .iter()
        .fold(base.fields.clone(), |fields, (name, value)| {
            fields.update(name.clone(), value.clone())
        });
    Record { fields }
}

/// Merges records left to right; later records win.
#[must_use]
pub fn merge_all(records: &[Record]) -> Record {
    reduce(|acc, record| merge(&acc, record), Record::new(), records)
}

/// Builds a [`Record`] from `name => value` pairs.
///
/// ```
/// use fp_common::record;
///
/// let full_name = record! { "firstName" => "Claude", "lastName" => "Debussy" };
/// assert_eq!(full_name.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::record::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::record::Record::new()$(.with($name, $value))+
    };
}
