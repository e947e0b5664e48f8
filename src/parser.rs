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

use tracing::trace;

use super::constants::*;
use super::error::Error;
use super::error::ParseErrorCode;
use super::error::Result;
use super::error::Status;
use super::value::Value;

/// Parses JSON text into `value` and reports the outcome as a [`Status`].
///
/// `value` is reset to `Null` before parsing and is only overwritten when the
/// whole input is a single valid value, so every non-`Ok` status leaves it `Null`.
pub fn parse(value: &mut Value, json: &str) -> Status {
    *value = Value::Null;
    let res = parse_value(json.as_bytes());
    let status = Status::from(&res);
    if let Ok(v) = res {
        *value = v;
    }
    status
}

/// Parses JSON text into a [`Value`].
///
/// The text must contain exactly one `null`, `true`, `false` or number,
/// optionally surrounded by space, tab, `\n` or `\r`.
pub fn parse_value(buf: &[u8]) -> Result<Value> {
    let mut parser = Parser::new(buf);
    match parser.parse() {
        Ok(value) => {
            trace!(value_type = %value.get_type(), len = buf.len(), "parsed json value");
            Ok(value)
        }
        Err(err) => {
            trace!(
                status = err.status().code(),
                pos = err.position(),
                "failed to parse json value: {}",
                err
            );
            Err(err)
        }
    }
}

/// A forward-only cursor over the input bytes.
///
/// Recognizers only move `idx` once a token is fully validated, a failed
/// recognizer leaves it where it was.
struct Parser<'a> {
    buf: &'a [u8],
    idx: usize,
}

impl<'a> Parser<'a> {
    fn new(buf: &'a [u8]) -> Parser<'a> {
        Self { buf, idx: 0 }
    }

    // JSON-text = ws value ws
    fn parse(&mut self) -> Result<Value> {
        self.skip_whitespace();
        let val = self.parse_json_value()?;
        self.skip_whitespace();
        if self.idx < self.buf.len() {
            return Err(self.error(ParseErrorCode::RootNotSingular));
        }
        Ok(val)
    }

    fn parse_json_value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'n') => self.parse_json_literal(NULL, Value::Null),
            Some(b't') => self.parse_json_literal(TRUE, Value::True),
            Some(b'f') => self.parse_json_literal(FALSE, Value::False),
            None => Err(self.error(ParseErrorCode::ExpectValue)),
            Some(_) => self.parse_json_number(),
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.byte_at(self.idx)
    }

    #[inline]
    fn byte_at(&self, idx: usize) -> Option<u8> {
        self.buf.get(idx).copied()
    }

    #[inline]
    fn step_to(&mut self, idx: usize) {
        debug_assert!(idx >= self.idx);
        self.idx = idx;
    }

    fn error(&self, code: ParseErrorCode) -> Error {
        Error::Syntax(code, self.idx)
    }

    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !matches!(c, SP | TT | NN | RR) {
                break;
            }
            self.idx += 1;
        }
    }

    /// A token running straight into a letter or digit is malformed,
    /// e.g. `truee`, `012` or `0x1F`.
    fn check_token_end(&self, idx: usize) -> Result<()> {
        match self.byte_at(idx) {
            Some(c) if c.is_ascii_alphanumeric() => {
                Err(Error::Syntax(ParseErrorCode::InvalidValue, idx))
            }
            _ => Ok(()),
        }
    }

    // null = "null", true = "true", false = "false"
    fn parse_json_literal(&mut self, ident: &[u8], value: Value) -> Result<Value> {
        debug_assert_eq!(self.peek(), ident.first().copied());
        for (i, c) in ident.iter().enumerate() {
            if self.byte_at(self.idx + i) != Some(*c) {
                return Err(Error::Syntax(ParseErrorCode::InvalidValue, self.idx + i));
            }
        }
        let end = self.idx + ident.len();
        self.check_token_end(end)?;
        self.step_to(end);
        Ok(value)
    }

    /// Parse a JSON number in two phases.
    ///
    /// The token is first validated against the strict grammar without any
    /// conversion, then the validated bytes are converted to `f64` with
    /// `fast_float2`. A conversion that overflows to infinity is reported as
    /// `NumberTooBig` and the cursor stays at the start of the token.
    fn parse_json_number(&mut self) -> Result<Value> {
        let start = self.idx;
        let end = self.scan_number()?;
        let n: f64 = fast_float2::parse(&self.buf[start..end])
            .map_err(|_| Error::Syntax(ParseErrorCode::InvalidValue, start))?;
        if n.is_infinite() {
            return Err(Error::Syntax(ParseErrorCode::NumberTooBig, start));
        }
        self.step_to(end);
        Ok(Value::Number(n))
    }

    // number = [ "-" ] int [ frac ] [ exp ]
    // int    = "0" / digit1-9 *digit
    // frac   = "." 1*digit
    // exp    = ("e" / "E") [ "-" / "+" ] 1*digit
    fn scan_number(&self) -> Result<usize> {
        let mut idx = self.idx;
        if self.byte_at(idx) == Some(MINUS) {
            idx += 1;
        }

        match self.byte_at(idx) {
            Some(b'0') => idx += 1,
            Some(b'1'..=b'9') => idx = self.skip_digits(idx + 1),
            _ => return Err(Error::Syntax(ParseErrorCode::InvalidValue, idx)),
        }

        if self.byte_at(idx) == Some(POINT) {
            idx = self.expect_digits(idx + 1)?;
        }

        if matches!(self.byte_at(idx), Some(b'e' | b'E')) {
            idx += 1;
            if matches!(self.byte_at(idx), Some(PLUS | MINUS)) {
                idx += 1;
            }
            idx = self.expect_digits(idx)?;
        }

        self.check_token_end(idx)?;
        Ok(idx)
    }

    #[inline]
    fn skip_digits(&self, mut idx: usize) -> usize {
        while matches!(self.byte_at(idx), Some(b'0'..=b'9')) {
            idx += 1;
        }
        idx
    }

    fn expect_digits(&self, idx: usize) -> Result<usize> {
        let end = self.skip_digits(idx);
        if end == idx {
            return Err(Error::Syntax(ParseErrorCode::InvalidValue, idx));
        }
        Ok(end)
    }
}
