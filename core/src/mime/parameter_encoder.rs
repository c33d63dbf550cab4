/*
 * parameter_encoder.rs
 * Copyright (C) 2026 Chris Burdess
 *
 * This file is part of Tagliacarte, a cross-platform email client.
 *
 * Tagliacarte is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Tagliacarte is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Tagliacarte.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Header field values with parameters (RFC 2045 section 5.1, RFC 2231).
//!
//! Each parameter goes on its own folded line, in the cheapest form that fits:
//! a bare token, a quoted-string, or an RFC 2231 extended value split into
//! continuations when needed.

use super::error::ParameterEncodeError;
use super::parameter::ParameterPair;
use super::quoting::{append_quoted, is_quotable, quoted_length};
use super::rfc2231::append_extended;
use super::utils::is_token;

/// RFC 5322 section 2.1.1: lines SHOULD be no more than 78 characters, excluding CRLF.
pub const MAX_LINE_LENGTH: usize = 78;

/// Separator written before every parameter: semicolon, then a fold.
pub const PARAMETER_FOLD: &str = ";\r\n ";

/// Encodes header values with parameters. Holds only the line length budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterEncoder {
    max_line_length: usize,
}

impl Default for ParameterEncoder {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl ParameterEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    /// Create header field value with parameters encoded if necessary.
    /// Parameters are written in iteration order; names are not validated.
    pub fn encode<I>(&self, value: &str, parameters: I) -> Result<String, ParameterEncodeError>
    where
        I: IntoIterator,
        I::Item: ParameterPair,
    {
        let mut out = String::from(value);
        for parameter in parameters {
            self.append_parameter(&mut out, parameter.name(), parameter.value())?;
        }
        Ok(out)
    }

    /// `Name: value` with encoded parameters, no trailing CRLF.
    pub fn header_line<I>(
        &self,
        header_name: &str,
        value: &str,
        parameters: I,
    ) -> Result<String, ParameterEncodeError>
    where
        I: IntoIterator,
        I::Item: ParameterPair,
    {
        let encoded = self.encode(value, parameters)?;
        Ok(format!("{}: {}", header_name, encoded))
    }

    fn append_parameter(&self, out: &mut String, name: &str, value: &str) -> Result<(), ParameterEncodeError> {
        let max = self.max_line_length;
        let fixed_cost_length = 1 /* folding space */ + name.chars().count() + 1 /* equals sign */ + 1 /* semicolon */;
        let value_length = value.chars().count();
        let unencoded_fits = fixed_cost_length + value_length <= max;
        let quoted_might_fit = fixed_cost_length + value_length + 2 /* quotes */ <= max;

        if unencoded_fits && is_token(value) {
            tracing::trace!(parameter = name, "token parameter");
            append_assignment(out, name);
            out.push_str(value);
        } else if quoted_might_fit && is_quotable(value) && fixed_cost_length + quoted_length(name, value)? <= max {
            tracing::trace!(parameter = name, "quoted parameter");
            append_assignment(out, name);
            append_quoted(out, name, value)?;
        } else {
            let lines = append_extended(out, name, value, max)?;
            tracing::trace!(parameter = name, lines, "rfc2231 parameter");
        }
        Ok(())
    }
}

fn append_assignment(out: &mut String, name: &str) {
    out.push_str(PARAMETER_FOLD);
    out.push_str(name);
    out.push('=');
}

/// Encode with the default 78 character line length.
pub fn encode_parameters<I>(value: &str, parameters: I) -> Result<String, ParameterEncodeError>
where
    I: IntoIterator,
    I::Item: ParameterPair,
{
    ParameterEncoder::default().encode(value, parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn params(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn no_parameters() {
        let empty: IndexMap<String, String> = IndexMap::new();
        assert_eq!(encode_parameters("text/plain", &empty).unwrap(), "text/plain");
    }

    #[test]
    fn token_value() {
        let out = encode_parameters("text/plain", &params(&[("charset", "utf-8")])).unwrap();
        assert_eq!(out, "text/plain;\r\n charset=utf-8");
    }

    #[test]
    fn quoted_value() {
        let out = encode_parameters("attachment", &params(&[("filename", "hello world")])).unwrap();
        assert_eq!(out, "attachment;\r\n filename=\"hello world\"");
    }

    #[test]
    fn empty_value_is_quoted() {
        let out = encode_parameters("x", &params(&[("a", "")])).unwrap();
        assert_eq!(out, "x;\r\n a=\"\"");
    }

    #[test]
    fn non_ascii_value_is_extended() {
        let out = encode_parameters("attachment", &params(&[("filename", "r\u{e9}sum\u{e9}.pdf")])).unwrap();
        assert_eq!(out, "attachment;\r\n filename*=UTF-8''r%C3%A9sum%C3%A9.pdf");
    }

    #[test]
    fn token_exactly_at_limit() {
        // " name=" + value + ";" == 78
        let value = "v".repeat(78 - 7);
        let out = encode_parameters("x", &params(&[("name", value.as_str())])).unwrap();
        assert_eq!(out, format!("x;\r\n name={}", value));
    }

    #[test]
    fn token_one_over_limit_goes_extended() {
        // Too long unquoted, so quoted is too long too; all chars are attribute-chars.
        let value = "v".repeat(78 - 6);
        let out = encode_parameters("x", &params(&[("name", value.as_str())])).unwrap();
        assert!(out.starts_with("x;\r\n name*0*=UTF-8''"));
        assert!(out.contains(";\r\n name*1*="));
    }

    #[test]
    fn quoted_exactly_at_limit() {
        // " name=" + quoted + ";" == 78, with two escaped characters.
        let value = format!("{}cd\"\\", "a b".repeat(21));
        assert_eq!(quoted_length("name", &value).unwrap(), 78 - 7);
        let out = encode_parameters("x", &params(&[("name", value.as_str())])).unwrap();
        let expected = format!("x;\r\n name=\"{}cd\\\"\\\\\"", "a b".repeat(21));
        assert_eq!(out, expected);
        assert_eq!(out.split("\r\n").nth(1).unwrap().len() + 1, 78);
    }

    #[test]
    fn escaped_quotes_may_overflow_quoted_form() {
        // Passes the cheap bound but escaping pushes it over.
        let value = format!("{}\"\"", "a b".repeat(22));
        let out = encode_parameters("x", &params(&[("name", value.as_str())])).unwrap();
        assert!(out.contains("name*"));
    }

    #[test]
    fn control_character_goes_extended() {
        let out = encode_parameters("x", &params(&[("p", "a\u{1}b")])).unwrap();
        assert_eq!(out, "x;\r\n p*=UTF-8''a%01b");
    }

    #[test]
    fn order_preserved() {
        let out = encode_parameters("x", &params(&[("z", "1"), ("a", "2"), ("m", "3")])).unwrap();
        assert_eq!(out, "x;\r\n z=1;\r\n a=2;\r\n m=3");
    }

    #[test]
    fn custom_line_length() {
        let encoder = ParameterEncoder::new().with_max_line_length(20);
        assert_eq!(encoder.max_line_length(), 20);
        let out = encoder.encode("x", [("name", "abcdefghijklmnop")]).unwrap();
        for line in out.split("\r\n").skip(1) {
            assert!(line.len() <= 20, "{:?}", line);
        }
    }

    #[test]
    fn header_line() {
        let line = ParameterEncoder::default()
            .header_line("Content-Type", "text/plain", [("charset", "us-ascii")])
            .unwrap();
        assert_eq!(line, "Content-Type: text/plain;\r\n charset=us-ascii");
    }

    #[test]
    fn failure_discards_output() {
        let name = "n".repeat(80);
        let result = encode_parameters("x", [("ok", "1"), (name.as_str(), "\u{e9}")]);
        assert!(matches!(result, Err(ParameterEncodeError::NameTooLong { .. })));
    }
}
