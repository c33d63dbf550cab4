/*
 * error.rs
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

//! Parameter encoding errors.

use thiserror::Error;

/// Failure to encode a header parameter. Either condition aborts the whole encode call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterEncodeError {
    /// The value holds a character that cannot appear in a quoted-string (e.g. a control character).
    #[error("unsupported character {character:?} in value of parameter {name}")]
    UnencodableCharacter { name: String, character: char },

    /// The name leaves no room on a continuation line for even one percent-encoded byte.
    #[error("parameter name {name} too long to fold within {max_line_length} characters")]
    NameTooLong { name: String, max_line_length: usize },
}

impl ParameterEncodeError {
    pub fn name(&self) -> &str {
        match self {
            ParameterEncodeError::UnencodableCharacter { name, .. } => name,
            ParameterEncodeError::NameTooLong { name, .. } => name,
        }
    }
}
