use std::fmt;

use shorthand_sequence::Sequence;

use crate::error::{Error, Result};

/// A parsed JSON value.
///
/// Object entries keep the order they appeared in, in an entry vector
/// rather than a map; rendering a parsed document back out reproduces the
/// original key order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

/// Parse JSON text into a [`Value`].
pub fn parse(text: &str) -> Result<Value> {
    let value = json::parse(text)?;
    Ok(convert(&value))
}

fn convert(value: &json::JsonValue) -> Value {
    match value {
        json::JsonValue::Null => Value::Null,
        json::JsonValue::Short(s) => Value::String(s.to_string()),
        json::JsonValue::String(s) => Value::String(s.clone()),
        json::JsonValue::Number(n) => Value::Number((*n).into()),
        json::JsonValue::Boolean(b) => Value::Boolean(*b),
        json::JsonValue::Array(entries) => Value::Array(entries.iter().map(convert).collect()),
        json::JsonValue::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, value)| (key.to_string(), convert(value)))
                .collect(),
        ),
    }
}

impl Value {
    /// Render this value as a compact JSON string.
    pub fn to_json_string(&self) -> String {
        self.to_json_value().dump()
    }

    /// Turn a JSON array into a sequence of its values.
    ///
    /// Anything other than an array is refused; flattening or wrapping a
    /// scalar is the caller's decision to make.
    pub fn into_sequence(self) -> Result<Sequence<Value>> {
        match self {
            Value::Array(entries) => Ok(entries.into()),
            other => Err(Error::NotAnArray(other.kind())),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    fn to_json_value(&self) -> json::JsonValue {
        match self {
            Value::Null => json::JsonValue::Null,
            Value::Boolean(b) => (*b).into(),
            Value::Number(n) => (*n).into(),
            Value::String(s) => s.clone().into(),
            Value::Array(entries) => {
                json::JsonValue::Array(entries.iter().map(Value::to_json_value).collect())
            }
            Value::Object(entries) => {
                let mut object = json::object::Object::with_capacity(entries.len());
                for (key, value) in entries {
                    object.insert(key, value.to_json_value());
                }
                json::JsonValue::Object(object)
            }
        }
    }
}

impl From<Sequence<Value>> for Value {
    fn from(sequence: Sequence<Value>) -> Self {
        Value::Array(sequence.to_vec())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
