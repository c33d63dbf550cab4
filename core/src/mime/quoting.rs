/*
 * quoting.rs
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

//! RFC 5322 quoted-string for parameter values.
//!
//! ```text
//! quoted-string = [CFWS] DQUOTE *([FWS] qcontent) [FWS] DQUOTE [CFWS]
//! qcontent      = qtext / quoted-pair
//! quoted-pair   = ("\" (VCHAR / WSP))
//! ```

use super::error::ParameterEncodeError;
use super::utils::{is_qtext, is_vchar, is_wsp};

const DQUOTE: char = '"';

/// True if every character can appear in a quoted-string, either as is or escaped.
pub fn is_quotable(value: &str) -> bool {
    value.chars().all(|c| is_wsp(c) || is_vchar(c))
}

/// Quote `value`. WSP and qtext pass through, other VCHARs get a backslash.
/// `name` is the parameter the value belongs to, for error reporting.
pub fn quote(name: &str, value: &str) -> Result<String, ParameterEncodeError> {
    let mut out = String::with_capacity(value.len() + 16);
    append_quoted(&mut out, name, value)?;
    Ok(out)
}

/// Length of `quote(name, value)` including both quotes, without building it.
pub fn quoted_length(name: &str, value: &str) -> Result<usize, ParameterEncodeError> {
    let mut length = 2;
    for c in value.chars() {
        if is_qtext(c) || is_wsp(c) {
            length += 1;
        } else if is_vchar(c) {
            length += 2;
        } else {
            return Err(unencodable(name, c));
        }
    }
    Ok(length)
}

pub(crate) fn append_quoted(out: &mut String, name: &str, value: &str) -> Result<(), ParameterEncodeError> {
    out.push(DQUOTE);
    for c in value.chars() {
        if is_qtext(c) || is_wsp(c) {
            out.push(c);
        } else if is_vchar(c) {
            out.push('\\');
            out.push(c);
        } else {
            return Err(unencodable(name, c));
        }
    }
    out.push(DQUOTE);
    Ok(())
}

fn unencodable(name: &str, character: char) -> ParameterEncodeError {
    ParameterEncodeError::UnencodableCharacter {
        name: name.to_string(),
        character,
    }
}
