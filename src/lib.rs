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

//! `jsonvalue` is a single-pass recursive-descent parser for `JSON` scalar values.
//! It validates and decodes the literals `null`, `true`, `false` and numbers into a
//! small tagged [`Value`].
//!
//! ## Parsing contract
//!
//! - The input is scanned by a cursor that only moves forward.
//! - Insignificant whitespace is limited to space, tab, `\n` and `\r`.
//! - Numbers follow the strict `JSON` grammar
//!   `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?` and are decoded to `f64`.
//!   A number whose magnitude exceeds the finite `f64` range is rejected.
//! - Every parse reports one [`Status`]: `Ok`, `ExpectValue`, `InvalidValue`,
//!   `RootNotSingular` or `NumberTooBig`.
//!
//! ## Example
//!
//! ```
//! use jsonvalue::{get_number, get_type, parse, Status, Type, Value};
//!
//! let mut v = Value::default();
//! assert_eq!(parse(&mut v, " -1.5E-3 "), Status::Ok);
//! assert_eq!(get_type(&v), Type::Number);
//! assert_eq!(get_number(&v), -0.0015);
//!
//! assert_eq!(parse(&mut v, "null x"), Status::RootNotSingular);
//! assert_eq!(get_type(&v), Type::Null);
//! ```
//!
//! The [`parse_value`] entry point returns a `Result` instead and reports the byte
//! offset where parsing failed.

#![allow(clippy::uninlined_format_args)]

mod constants;
mod error;
mod parser;
mod value;

pub use error::Error;
pub use error::ParseErrorCode;
pub use error::Result;
pub use error::Status;
pub use parser::parse;
pub use parser::parse_value;
pub use value::*;
