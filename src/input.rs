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

//! Parsing integers from user supplied text.
//!
//! Sequences are given as whitespace separated tokens, e.g. `"5 3 8 1"`.
//! Tokens are parsed in base 10 and are never coerced: `"3.5"` or `"x"`
//! is rejected with [`Error::InvalidNumber`].
//!
//! # Example
//!
//! ```
//! use rs_dsa::input::parse_values;
//! use rs_dsa::Error;
//!
//! assert_eq!(parse_values::<i32>(" 5 3  8 "), Ok(vec![5, 3, 8]));
//! assert_eq!(
//!     parse_values::<i32>("5 x 8"),
//!     Err(Error::InvalidNumber { token: "x".to_string(), position: 1 })
//! );
//! ```

use crate::error::{Error, Result};
use crate::num::traits::Num;

/// Parse a single integer.
///
/// Leading and trailing whitespace is ignored. Returns
/// [`Error::EmptyInput`] if there is nothing but whitespace.
pub fn parse_value<T>(text: &str) -> Result<T>
where
    T: Num,
{
    let token = text.trim();
    if token.is_empty() {
        return Err(Error::EmptyInput);
    }
    parse_token(token, 0)
}

/// Parse a whitespace separated sequence of integers.
///
/// Returns [`Error::EmptyInput`] if `text` contains no token at all and
/// [`Error::InvalidNumber`] for the first token that is not an integer.
pub fn parse_values<T>(text: &str) -> Result<Vec<T>>
where
    T: Num,
{
    let values = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect::<Result<Vec<T>>>()?;
    if values.is_empty() {
        Err(Error::EmptyInput)
    } else {
        Ok(values)
    }
}

fn parse_token<T>(token: &str, position: usize) -> Result<T>
where
    T: Num,
{
    T::from_str_radix(token, 10).map_err(|_| Error::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_value, parse_values};
    use crate::Error;

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<i64>(" 42 "), Ok(42));
        assert_eq!(parse_value::<i64>("-7"), Ok(-7));
        assert_eq!(parse_value::<i64>(""), Err(Error::EmptyInput));
        assert_eq!(
            parse_value::<i64>("4.5"),
            Err(Error::InvalidNumber {
                token: "4.5".to_string(),
                position: 0
            })
        );
        assert!(parse_value::<u8>("300").is_err());
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values::<i32>("3 1 2"), Ok(vec![3, 1, 2]));
        assert_eq!(parse_values::<i32>("\t3\n1  2 "), Ok(vec![3, 1, 2]));
        assert_eq!(parse_values::<i32>("   "), Err(Error::EmptyInput));
        assert_eq!(
            parse_values::<i32>("3 x 1"),
            Err(Error::InvalidNumber {
                token: "x".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = parse_values::<i32>("1 2 three").unwrap_err();
        assert_eq!(err.to_string(), "invalid integer 'three' at position 2");
    }
}
