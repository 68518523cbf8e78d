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

//! Linear search.
//!
//! # Example
//!
//! ```
//! use rs_dsa::search::linear;
//!
//! let mut search = linear::start(&[4, 2, 7], 2);
//! let steps: Vec<_> = search.by_ref().map(|s| (s.index, s.value, s.matched)).collect();
//! assert_eq!(steps, vec![(0, 4, false), (1, 2, true)]);
//! assert_eq!(search.result(), Some(1));
//! ```

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A single examined element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct LinearStep<T> {
    /// The index of the examined element.
    pub index: usize,
    /// The examined element.
    pub value: T,
    /// Whether the element is equal to the target.
    pub matched: bool,
}

/// Start and return a linear search iterator.
///
/// The iterator examines the elements of `data` from the front and returns
/// one [`LinearStep`] per examined element. It stops after the first element
/// equal to `target`.
pub fn start<T>(data: &[T], target: T) -> LinearSearch<'_, T>
where
    T: PartialEq + Clone,
{
    LinearSearch {
        data,
        target,
        pos: 0,
        found: None,
    }
}

/// The linear search iterator.
#[derive(Clone, Debug)]
pub struct LinearSearch<'a, T> {
    data: &'a [T],
    target: T,
    pos: usize,
    found: Option<usize>,
}

impl<'a, T> Iterator for LinearSearch<'a, T>
where
    T: PartialEq + Clone,
{
    type Item = LinearStep<T>;

    fn next(&mut self) -> Option<LinearStep<T>> {
        if self.found.is_some() {
            return None;
        }
        let index = self.pos;
        let value = self.data.get(index)?;
        let matched = *value == self.target;
        self.pos += 1;
        if matched {
            self.found = Some(index);
        }
        Some(LinearStep {
            index,
            value: value.clone(),
            matched,
        })
    }
}

impl<'a, T> LinearSearch<'a, T>
where
    T: PartialEq + Clone,
{
    /// Run the search completely and return the result.
    pub fn run(&mut self) -> Option<usize> {
        while self.next().is_some() {}
        self.found
    }

    /// The index of the target, if it has been found so far.
    pub fn result(&self) -> Option<usize> {
        self.found
    }

    /// Return `true` if the search has finished.
    pub fn is_finished(&self) -> bool {
        self.found.is_some() || self.pos >= self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{start, LinearStep};

    #[test]
    fn test_not_found() {
        let mut search = start(&[1, 2, 3], 5);
        let steps: Vec<_> = search.by_ref().collect();
        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| !s.matched));
        assert_eq!(steps.iter().map(|s| s.index).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(search.is_finished());
        assert_eq!(search.result(), None);
    }

    #[test]
    fn test_stops_at_first_match() {
        let mut search = start(&[9, 5, 5, 1], 5);
        assert!(!search.is_finished());
        assert_eq!(
            search.next(),
            Some(LinearStep {
                index: 0,
                value: 9,
                matched: false
            })
        );
        assert_eq!(
            search.next(),
            Some(LinearStep {
                index: 1,
                value: 5,
                matched: true
            })
        );
        assert_eq!(search.next(), None);
        assert_eq!(search.run(), Some(1));
    }

    #[test]
    fn test_empty() {
        let mut search = start(&[], "x");
        assert!(search.is_finished());
        assert_eq!(search.next(), None);
        assert_eq!(search.result(), None);
    }
}
