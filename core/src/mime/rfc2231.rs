/*
 * rfc2231.rs
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

//! RFC 2231 extended parameter values (`name*=UTF-8''...`) and continuations
//! (`name*0*=UTF-8''...`, `name*1*=...`).
//!
//! A code point is always encoded whole on one line, so neither a `%XX` triplet
//! nor a multi-byte UTF-8 sequence is split across a fold.

use super::error::ParameterEncodeError;
use super::parameter_encoder::PARAMETER_FOLD;
use super::utils::{append_percent_encoded, for_each_utf8_byte, is_attribute_char, utf8_size};

/// Charset and (empty) language prefix of the first extended segment.
pub const ENCODED_VALUE_PREFIX: &str = "UTF-8''";

/// Percent-encode `value` as UTF-8, leaving attribute-chars literal. No charset prefix.
pub fn rfc2231_encoded(value: &str) -> String {
    let mut out = String::with_capacity(value.len() * 3);
    for c in value.chars() {
        if is_attribute_char(c) {
            out.push(c);
        } else {
            for_each_utf8_byte(c, |b| append_percent_encoded(&mut out, b));
        }
    }
    out
}

/// Length of `rfc2231_encoded(value)`.
pub fn rfc2231_encoded_length(value: &str) -> usize {
    value
        .chars()
        .map(|c| if is_attribute_char(c) { 1 } else { utf8_size(c) * 3 })
        .sum()
}

/// Append `name` as an extended parameter: one `name*=` line when it fits, numbered
/// continuations otherwise. Returns the number of lines written.
pub(crate) fn append_extended(
    out: &mut String,
    name: &str,
    value: &str,
    max_line_length: usize,
) -> Result<usize, ParameterEncodeError> {
    let name_length = name.chars().count();
    let single_line_length = 1 /* folding space */ + name_length + 1 /* asterisk */ + 1 /* equals sign */
        + ENCODED_VALUE_PREFIX.len() + rfc2231_encoded_length(value) + 1 /* semicolon */;

    if single_line_length <= max_line_length {
        out.push_str(PARAMETER_FOLD);
        out.push_str(name);
        out.push_str("*=");
        out.push_str(ENCODED_VALUE_PREFIX);
        out.push_str(&rfc2231_encoded(value));
        Ok(1)
    } else {
        append_continuations(out, name, name_length, value, max_line_length)
    }
}

fn append_continuations(
    out: &mut String,
    name: &str,
    name_length: usize,
    value: &str,
    max_line_length: usize,
) -> Result<usize, ParameterEncodeError> {
    let mut chars = value.chars().peekable();
    let mut segment = 0;
    let mut remaining = 0;
    let mut start_of_segment = true;
    let mut segment_empty = true;

    // Segment 0 is always written, even for an empty value.
    loop {
        if start_of_segment {
            remaining = open_segment(out, name, name_length, segment, max_line_length)?;
            segment += 1;
            start_of_segment = false;
            segment_empty = true;
        }

        let Some(&c) = chars.peek() else {
            break;
        };
        let size = utf8_size(c);
        if size == 1 && is_attribute_char(c) && remaining >= 1 {
            out.push(c);
            remaining -= 1;
        } else if remaining >= size * 3 {
            for_each_utf8_byte(c, |b| append_percent_encoded(out, b));
            remaining -= size * 3;
        } else if segment_empty && segment > 1 {
            // Later headers only get longer; this code point never fits.
            return Err(name_too_long(name, max_line_length));
        } else {
            start_of_segment = true;
            continue;
        }
        chars.next();
        segment_empty = false;
    }
    Ok(segment)
}

/// Write the fold and `name*N*=` header. Returns room left for encoded text,
/// keeping one column for the `;` that may follow.
fn open_segment(
    out: &mut String,
    name: &str,
    name_length: usize,
    index: usize,
    max_line_length: usize,
) -> Result<usize, ParameterEncodeError> {
    let index_text = index.to_string();
    let mut header_length = 1 /* folding space */ + name_length + 1 /* asterisk */ + index_text.len() + 2 /* "*=" */;
    if index == 0 {
        header_length += ENCODED_VALUE_PREFIX.len();
    }
    let remaining = max_line_length
        .checked_sub(header_length + 1 /* semicolon */)
        .filter(|r| *r >= 3)
        .ok_or_else(|| name_too_long(name, max_line_length))?;

    out.push_str(PARAMETER_FOLD);
    out.push_str(name);
    out.push('*');
    out.push_str(&index_text);
    out.push_str("*=");
    if index == 0 {
        out.push_str(ENCODED_VALUE_PREFIX);
    }
    Ok(remaining)
}

fn name_too_long(name: &str, max_line_length: usize) -> ParameterEncodeError {
    tracing::debug!(parameter = name, max_line_length, "parameter name too long for RFC 2231 continuation");
    ParameterEncodeError::NameTooLong {
        name: name.to_string(),
        max_line_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_keeps_attribute_chars() {
        assert_eq!(rfc2231_encoded("report-2024.pdf"), "report-2024.pdf");
        assert_eq!(rfc2231_encoded("a b"), "a%20b");
        assert_eq!(rfc2231_encoded("50%*'"), "50%25%2A%27");
        assert_eq!(rfc2231_encoded("\u{a3} and \u{20ac}"), "%C2%A3%20and%20%E2%82%AC");
    }

    #[test]
    fn encoded_length_matches() {
        for v in ["", "abc", "a b", "\u{1F600}x", "r\u{e9}sum\u{e9}.txt"] {
            assert_eq!(rfc2231_encoded_length(v), rfc2231_encoded(v).len());
        }
    }

    #[test]
    fn single_line() {
        let mut out = String::new();
        let lines = append_extended(&mut out, "filename", "caf\u{e9}.txt", 78).unwrap();
        assert_eq!(lines, 1);
        assert_eq!(out, ";\r\n filename*=UTF-8''caf%C3%A9.txt");
    }

    #[test]
    fn continuation_moves_whole_code_point() {
        let mut out = String::new();
        let lines = append_extended(&mut out, "title", "abcdefghij\u{20ac}klmnop", 30).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(out, ";\r\n title*0*=UTF-8''abcdefghij;\r\n title*1*=%E2%82%ACklmnop");
    }

    #[test]
    fn empty_value_with_overlong_name() {
        let mut out = String::new();
        let name = "n".repeat(70);
        let err = append_extended(&mut out, &name, "", 78).unwrap_err();
        assert_eq!(err.name(), name);
    }

    #[test]
    fn name_too_long() {
        let mut out = String::new();
        let name = "n".repeat(70);
        let err = append_extended(&mut out, &name, "\u{e9}", 78).unwrap_err();
        assert!(matches!(err, ParameterEncodeError::NameTooLong { max_line_length: 78, .. }));
    }

    #[test]
    fn code_point_wider_than_any_segment() {
        // Room for 3..11 columns per segment: a 4-byte code point never fits.
        let mut out = String::new();
        let name = "n".repeat(62);
        let err = append_extended(&mut out, &name, "\u{1F600}", 78).unwrap_err();
        assert!(matches!(err, ParameterEncodeError::NameTooLong { .. }));
    }
}
