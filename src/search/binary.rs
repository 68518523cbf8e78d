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

//! Binary search.
//!
//! The search sorts a copy of the input first. It maintains the inclusive
//! index range `left..=right` of the sorted copy that may still contain the
//! target. In each iteration the middle element `mid = ⌊(left + right) / 2⌋`
//! is compared with the target:
//!
//! - if it is equal, the target has been found,
//! - if it is smaller, the search continues with `mid+1..=right`,
//! - otherwise the search continues with `left..=mid-1`.
//!
//! The search fails once the range is empty.
//!
//! # Example
//!
//! ```
//! use rs_dsa::search::binary::{self, Decision};
//!
//! let mut search = binary::start(&[5, 3, 8, 1], 8);
//! assert_eq!(search.sorted(), &[1, 3, 5, 8]);
//!
//! let steps: Vec<_> = search.by_ref().map(|s| (s.left, s.right, s.mid, s.decision)).collect();
//! assert_eq!(
//!     steps,
//!     vec![
//!         (0, 3, 1, Decision::SearchRight),
//!         (2, 3, 2, Decision::SearchRight),
//!         (3, 3, 3, Decision::Found),
//!     ]
//! );
//! assert_eq!(search.result(), Some(3));
//! ```

use crate::num::integer::Average;

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The decision taken after comparing the middle element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Decision {
    /// The middle element is the target.
    Found,
    /// The target is larger, continue with the right half.
    SearchRight,
    /// The target is smaller, continue with the left half.
    SearchLeft,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Decision::Found => write!(f, "found"),
            Decision::SearchRight => write!(f, "target is larger, search right half"),
            Decision::SearchLeft => write!(f, "target is smaller, search left half"),
        }
    }
}

/// A single iteration of binary search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BinaryStep<T> {
    /// The first index of the search range.
    pub left: usize,
    /// The last index of the search range.
    pub right: usize,
    /// The index of the middle element.
    pub mid: usize,
    /// The middle element.
    pub value: T,
    /// The decision taken.
    pub decision: Decision,
}

/// Start and return a binary search iterator.
///
/// The iterator searches `target` in a sorted copy of `data` and returns one
/// [`BinaryStep`] per iteration.
pub fn start<T>(data: &[T], target: T) -> BinarySearch<T>
where
    T: Ord + Clone,
{
    let mut sorted = data.to_vec();
    sorted.sort();
    let right = sorted.len() as isize - 1;
    BinarySearch {
        sorted,
        target,
        left: 0,
        right,
        found: None,
    }
}

/// The binary search iterator.
#[derive(Clone, Debug)]
pub struct BinarySearch<T> {
    sorted: Vec<T>,
    target: T,
    // signed, `right` becomes -1 when the range is exhausted on the left
    left: isize,
    right: isize,
    found: Option<usize>,
}

impl<T> Iterator for BinarySearch<T>
where
    T: Ord + Clone,
{
    type Item = BinaryStep<T>;

    fn next(&mut self) -> Option<BinaryStep<T>> {
        if self.found.is_some() || self.left > self.right {
            return None;
        }
        let (left, right) = (self.left, self.right);
        let mid = left.average_floor(&right);
        let value = &self.sorted[mid as usize];
        let decision = if *value == self.target {
            self.found = Some(mid as usize);
            Decision::Found
        } else if *value < self.target {
            self.left = mid + 1;
            Decision::SearchRight
        } else {
            self.right = mid - 1;
            Decision::SearchLeft
        };
        Some(BinaryStep {
            left: left as usize,
            right: right as usize,
            mid: mid as usize,
            value: self.sorted[mid as usize].clone(),
            decision,
        })
    }
}

impl<T> BinarySearch<T>
where
    T: Ord + Clone,
{
    /// Run the search completely and return the result.
    pub fn run(&mut self) -> Option<usize> {
        while self.next().is_some() {}
        self.found
    }

    /// The index of the target in the sorted copy, if it has been found so
    /// far.
    pub fn result(&self) -> Option<usize> {
        self.found
    }

    /// The sorted copy of the input.
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    /// Return `true` if the search has finished.
    pub fn is_finished(&self) -> bool {
        self.found.is_some() || self.left > self.right
    }
}

#[cfg(test)]
mod tests {
    use super::{start, BinaryStep, Decision};

    #[test]
    fn test_search_left() {
        let mut search = start(&[10, 20, 30, 40, 50], 10);
        let steps: Vec<_> = search.by_ref().collect();
        assert_eq!(
            steps,
            vec![
                BinaryStep {
                    left: 0,
                    right: 4,
                    mid: 2,
                    value: 30,
                    decision: Decision::SearchLeft
                },
                BinaryStep {
                    left: 0,
                    right: 1,
                    mid: 0,
                    value: 10,
                    decision: Decision::Found
                },
            ]
        );
        assert!(search.is_finished());
        assert_eq!(search.result(), Some(0));
    }

    #[test]
    fn test_not_found_below() {
        let mut search = start(&[3, 1, 2], 0);
        let decisions: Vec<_> = search.by_ref().map(|s| s.decision).collect();
        assert_eq!(decisions, vec![Decision::SearchLeft, Decision::SearchLeft]);
        assert_eq!(search.result(), None);
        assert!(search.is_finished());
    }

    #[test]
    fn test_not_found_above() {
        let mut search = start(&[3, 1, 2], 4);
        assert_eq!(search.by_ref().count(), 2);
        assert_eq!(search.run(), None);
    }

    #[test]
    fn test_empty() {
        let mut search = start::<i32>(&[], 4);
        assert!(search.is_finished());
        assert_eq!(search.next(), None);
        assert!(search.sorted().is_empty());
    }

    #[test]
    fn test_input_unchanged() {
        let data = vec![4, 1, 3];
        let search = start(&data, 1);
        assert_eq!(search.sorted(), &[1, 3, 4]);
        assert_eq!(data, vec![4, 1, 3]);
    }

    #[test]
    fn test_decision_text() {
        assert_eq!(Decision::Found.to_string(), "found");
        assert_eq!(Decision::SearchLeft.to_string(), "target is smaller, search left half");
    }
}
