/*
 * Copyright (c) 2019, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Search algorithms on sequences.
//!
//! This module contains linear search and binary search.
//!
//! Both algorithms are implemented as iterators. The iterators produce a
//! record for each decision made by the algorithm, in the order in which the
//! decisions are taken. Once an iterator is exhausted its `result` method
//! returns the index of the target, if it has been found.
//!
//! Note that binary search works on a *sorted copy* of the input. The
//! reported indices refer to that copy and not to the original sequence.

pub mod binary;
pub mod linear;

pub use self::binary::{BinarySearch, BinaryStep, Decision};
pub use self::linear::{LinearSearch, LinearStep};

use crate::error::Error;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The available search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

impl SearchAlgorithm {
    /// All algorithms.
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::Linear, SearchAlgorithm::Binary];

    /// Search `target` in `data`.
    ///
    /// For [`SearchAlgorithm::Binary`] the returned index refers to the
    /// sorted copy of `data`.
    pub fn find<T>(self, data: &[T], target: &T) -> Option<usize>
    where
        T: Ord + Clone,
    {
        match self {
            SearchAlgorithm::Linear => linear_search(data, target),
            SearchAlgorithm::Binary => binary_search(data, target),
        }
    }

    /// The lower case name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
        }
    }

    /// The asymptotic running time as text.
    pub fn complexity(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "O(n)",
            SearchAlgorithm::Binary => "O(log n)",
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        SearchAlgorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Return the index of the first element equal to `target`.
///
/// # Example
///
/// ```
/// use rs_dsa::linear_search;
///
/// assert_eq!(linear_search(&[4, 2, 7, 2], &2), Some(1));
/// assert_eq!(linear_search(&[4, 2, 7, 2], &5), None);
/// ```
pub fn linear_search<T>(data: &[T], target: &T) -> Option<usize>
where
    T: PartialEq + Clone,
{
    let mut search = linear::start(data, target.clone());
    search.run();
    search.result()
}

/// Return the index of `target` in the sorted copy of `data`.
///
/// # Example
///
/// ```
/// use rs_dsa::binary_search;
///
/// // searches in [1, 3, 5, 8]
/// assert_eq!(binary_search(&[5, 3, 8, 1], &8), Some(3));
/// assert_eq!(binary_search(&[5, 3, 8, 1], &4), None);
/// ```
pub fn binary_search<T>(data: &[T], target: &T) -> Option<usize>
where
    T: Ord + Clone,
{
    let mut search = binary::start(data, target.clone());
    search.run();
    search.result()
}
