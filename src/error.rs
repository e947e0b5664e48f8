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

use core::fmt::Display;
use core::fmt::Formatter;

/// The outcome code of a parse attempt.
///
/// The discriminants are stable. Only `Ok` has a meaningful value (`0`),
/// the ordering of the error codes should not be relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Status {
    Ok = 0,
    /// The input is empty or contains only whitespace.
    ExpectValue,
    /// A malformed literal or a malformed number.
    InvalidValue,
    /// A valid value followed by non-whitespace content.
    RootNotSingular,
    /// A well-formed number outside the finite `f64` range.
    NumberTooBig,
}

impl Status {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let code = match self {
            Status::Ok => return f.write_str("ok"),
            Status::ExpectValue => ParseErrorCode::ExpectValue,
            Status::InvalidValue => ParseErrorCode::InvalidValue,
            Status::RootNotSingular => ParseErrorCode::RootNotSingular,
            Status::NumberTooBig => ParseErrorCode::NumberTooBig,
        };
        Display::fmt(&code, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorCode {
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl Display for ParseErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match *self {
            ParseErrorCode::ExpectValue => f.write_str("expected value"),
            ParseErrorCode::InvalidValue => f.write_str("invalid value"),
            ParseErrorCode::RootNotSingular => f.write_str("trailing characters"),
            ParseErrorCode::NumberTooBig => f.write_str("number too big"),
        }
    }
}

impl From<ParseErrorCode> for Status {
    fn from(code: ParseErrorCode) -> Self {
        match code {
            ParseErrorCode::ExpectValue => Status::ExpectValue,
            ParseErrorCode::InvalidValue => Status::InvalidValue,
            ParseErrorCode::RootNotSingular => Status::RootNotSingular,
            ParseErrorCode::NumberTooBig => Status::NumberTooBig,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A syntax error and the byte offset where it was detected.
    Syntax(ParseErrorCode, usize),
}

impl Error {
    pub fn code(&self) -> ParseErrorCode {
        match self {
            Error::Syntax(code, _) => *code,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            Error::Syntax(_, pos) => *pos,
        }
    }

    pub fn status(&self) -> Status {
        self.code().into()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            Error::Syntax(code, pos) => write!(f, "{}, pos {}", code, pos),
        }
    }
}

impl std::error::Error for Error {}

impl<T> From<&Result<T>> for Status {
    fn from(res: &Result<T>) -> Self {
        match res {
            Ok(_) => Status::Ok,
            Err(err) => err.status(),
        }
    }
}
