/*
 * utils.rs
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

//! MIME character classes (RFC 2045 token, RFC 5322 qtext/VCHAR/WSP, RFC 2231 attribute-char)
//! and the UTF-8/hex glue used by the parameter encoder.

use percent_encoding::percent_encode_byte;

/// RFC 2045 tspecials: must be in quoted-string to use within parameter values.
#[inline]
pub fn is_tspecial(c: char) -> bool {
    matches!(c,
        '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '='
    )
}

/// RFC 5234 VCHAR: visible (printing) US-ASCII character.
#[inline]
pub fn is_vchar(c: char) -> bool {
    matches!(c, '\u{21}'..='\u{7e}')
}

/// RFC 5234 WSP: space or horizontal tab.
#[inline]
pub fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// RFC 5322 qtext: VCHAR except `"` and `\`. Obsolete qtext is not produced.
#[inline]
pub fn is_qtext(c: char) -> bool {
    matches!(c as u32, 33 | 35..=91 | 93..=126)
}

/// Checks if a character is valid in an RFC 2045 token.
#[inline]
pub fn is_token_char(c: char) -> bool {
    is_vchar(c) && !is_tspecial(c)
}

/// RFC 2231 attribute-char: token character except `*`, `'` and `%`.
#[inline]
pub fn is_attribute_char(c: char) -> bool {
    is_token_char(c) && !matches!(c, '*' | '\'' | '%')
}

/// Checks if the string is a valid RFC 2045 token (1+ token chars).
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Number of bytes needed to encode the code point in UTF-8.
#[inline]
pub fn utf8_size(c: char) -> usize {
    c.len_utf8()
}

/// Calls `f` with each byte of the UTF-8 encoding of `c`, in order.
pub fn for_each_utf8_byte(c: char, mut f: impl FnMut(u8)) {
    let mut buf = [0u8; 4];
    for &b in c.encode_utf8(&mut buf).as_bytes() {
        f(b);
    }
}

/// Append `%XX` (uppercase hex) for one byte.
#[inline]
pub fn append_percent_encoded(out: &mut String, byte: u8) {
    out.push_str(percent_encode_byte(byte));
}
