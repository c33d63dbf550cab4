/*
 * mod.rs
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

//! MIME header parameter encoding (RFC 2045, RFC 2231, RFC 5322 quoted-string).

mod error;
mod mime_value;
mod parameter;
mod parameter_encoder;
mod quoting;
mod rfc2231;
mod utils;

pub use error::ParameterEncodeError;
pub use mime_value::{MimeValue, ParameterMap};
pub use parameter::{Parameter, ParameterPair};
pub use parameter_encoder::{encode_parameters, ParameterEncoder, MAX_LINE_LENGTH, PARAMETER_FOLD};
pub use quoting::{is_quotable, quote, quoted_length};
pub use rfc2231::{rfc2231_encoded, rfc2231_encoded_length, ENCODED_VALUE_PREFIX};
pub use utils::{
    is_attribute_char, is_qtext, is_token, is_token_char, is_tspecial, is_vchar, is_wsp,
};
