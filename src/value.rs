// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use super::constants::*;
use super::error::Error;
use super::parser::parse_value;

/// The type tag of a JSON value.
///
/// `String`, `Array` and `Object` are reserved for container and string support,
/// the parser never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl Type {
    /// Returns the JSON type name, `true` and `false` are both `"boolean"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Null => TYPE_NULL,
            Type::False | Type::True => TYPE_BOOLEAN,
            Type::Number => TYPE_NUMBER,
            Type::String => TYPE_STRING,
            Type::Array => TYPE_ARRAY,
            Type::Object => TYPE_OBJECT,
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed JSON scalar value.
///
/// The numeric payload only exists on the `Number` variant, so it can never be
/// read under a different tag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
}

impl Value {
    pub fn get_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::False => Type::False,
            Value::True => Type::True,
            Value::Number(_) => Type::Number,
        }
    }

    /// Returns the numeric payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a `Number`. Use [`Value::as_f64`] when the
    /// type is not known in advance.
    pub fn get_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => panic!(
                "get_number called on a {} value, expected number",
                self.get_type()
            ),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::True | Value::False)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s.as_bytes())
    }
}

/// Returns the type tag of `value`.
pub fn get_type(value: &Value) -> Type {
    value.get_type()
}

/// Returns the numeric payload of `value`, panicking if it is not a number.
pub fn get_number(value: &Value) -> f64 {
    value.get_number()
}
