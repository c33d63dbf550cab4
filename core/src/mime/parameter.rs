/*
 * parameter.rs
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

//! Header parameter (name=value pair).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }
}

/// Anything the encoder can take one parameter from: `(name, value)` tuples or `Parameter`s.
pub trait ParameterPair {
    fn name(&self) -> &str;
    fn value(&self) -> &str;
}

impl<K: AsRef<str>, V: AsRef<str>> ParameterPair for (K, V) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn value(&self) -> &str {
        self.1.as_ref()
    }
}

impl ParameterPair for Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

impl ParameterPair for &Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime::encode_parameters;

    #[test]
    fn accessors() {
        let p = Parameter::new("charset", "utf-8");
        assert_eq!(p.get_name(), "charset");
        assert_eq!(p.get_value(), "utf-8");
    }

    #[test]
    fn encodes_slice_in_order() {
        let parameters = vec![
            Parameter::new("name", "a b"),
            Parameter::new("format", "flowed"),
        ];
        let out = encode_parameters("text/plain", &parameters[..]).unwrap();
        assert_eq!(out, "text/plain;\r\n name=\"a b\";\r\n format=flowed");
    }

    #[test]
    fn encodes_owned_parameters() {
        let parameters = vec![
            Parameter::new("filename", "caf\u{e9}.txt"),
            Parameter::new("size", "12"),
        ];
        let out = encode_parameters("attachment", parameters).unwrap();
        assert_eq!(out, "attachment;\r\n filename*=UTF-8''caf%C3%A9.txt;\r\n size=12");
    }
}
