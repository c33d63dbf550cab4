/*
 * mime_value.rs
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

//! Decoded header value with parameters: the dual of what the parameter encoder writes.

use indexmap::IndexMap;

use super::error::ParameterEncodeError;
use super::parameter_encoder::ParameterEncoder;

/// Ordered parameter name to value mapping. Iteration order is output order.
pub type ParameterMap = IndexMap<String, String>;

/// A header field value, its parameters, and any parameters a parser had to skip.
///
/// If `parser_error_index` is set, at least one ignored parameter exists at or after it.
/// The index counts entries of `ignored_parameters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimeValue {
    pub value: String,
    pub parameters: ParameterMap,
    pub ignored_parameters: Vec<(String, String)>,
    pub parser_error_index: Option<usize>,
}

impl MimeValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_parameters(value: impl Into<String>, parameters: ParameterMap) -> Self {
        Self {
            value: value.into(),
            parameters,
            ..Self::default()
        }
    }

    pub fn get_parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.get_parameter(name).is_some()
    }

    /// No parameters were skipped and no parse error was recorded.
    pub fn is_clean(&self) -> bool {
        self.ignored_parameters.is_empty() && self.parser_error_index.is_none()
    }

    /// An error index requires at least one ignored parameter at or after it.
    ///
    /// `parser_error_index` is read as an index into `ignored_parameters`, not as a
    /// character offset into the header text, so it must be below their count.
    pub fn check_invariant(&self) -> bool {
        match self.parser_error_index {
            Some(index) => index < self.ignored_parameters.len(),
            None => true,
        }
    }

    /// Re-encode value and parameters. Ignored parameters are not written.
    pub fn encode(&self, encoder: &ParameterEncoder) -> Result<String, ParameterEncodeError> {
        encoder.encode(&self.value, &self.parameters)
    }
}
