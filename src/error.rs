/*
 * Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Errors reported by this crate.
//!
//! Note that neither an empty container nor a missing search target is an
//! error. Those are ordinary results (`None` or `false`). Errors are only
//! raised for input that cannot be interpreted at all.

use thiserror::Error;

/// Error when interpreting user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input did not contain a single token.
    #[error("empty input, expected at least one integer")]
    EmptyInput,
    /// A token is not a valid integer.
    #[error("invalid integer '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },
    /// The name does not denote a known algorithm.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

pub type Result<T> = std::result::Result<T, Error>;
