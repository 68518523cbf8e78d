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

//! # Elementary sorting algorithms.
//!
//! This module contains three quadratic comparison sorts: bubble sort,
//! selection sort and insertion sort.
//!
//! All sorting algorithms are implemented as iterators. Each algorithm works
//! on its own copy of the input, the caller's data is never modified. The
//! iterators produce a snapshot of the working copy after each unit of
//! progress of the particular algorithm:
//!
//! - [`bubble`]: after every comparison of two adjacent elements, whether or
//!   not they have been swapped,
//! - [`selection`]: after each position has received its element,
//! - [`insertion`]: after each element has been inserted into the sorted
//!   prefix.
//!
//! Each snapshot is an independent `Vec`, so it can be stored or displayed
//! later. The iterators can be cloned, which allows to restart a run from
//! any intermediate state.
//!
//! Equal elements are never swapped. The algorithms require a total order on
//! the elements.
//!
//! # Example
//!
//! ```
//! use rs_dsa::sort::SortAlgorithm;
//!
//! let data = [4, 2, 3, 1];
//! let mut snapshots = vec![];
//! let sorted = SortAlgorithm::Selection.sort_with(&data, |s| snapshots.push(s));
//! assert_eq!(sorted, vec![1, 2, 3, 4]);
//! assert_eq!(
//!     snapshots,
//!     vec![vec![1, 2, 3, 4], vec![1, 2, 3, 4], vec![1, 2, 3, 4], vec![1, 2, 3, 4]]
//! );
//! ```

pub mod bubble;
pub mod insertion;
pub mod selection;

pub use self::bubble::Bubble;
pub use self::insertion::Insertion;
pub use self::selection::Selection;

use crate::error::Error;

use either::Either::{self, Left, Right};

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A sorting algorithm in progress.
///
/// The iterator implementation of a sorting algorithm calls
/// [`step`][SortSteps::step] and returns a copy of
/// [`current`][SortSteps::current] after each successful step.
pub trait SortSteps<T>: Iterator<Item = Vec<T>> {
    /// Execute the next unit of progress.
    ///
    /// Returns `false` if the algorithm has already finished.
    fn step(&mut self) -> bool;

    /// The current state of the working copy.
    fn current(&self) -> &[T];

    /// Return the working copy without executing further steps.
    fn into_vec(self) -> Vec<T>;

    /// Run the algorithm completely and return the sorted sequence.
    fn into_sorted(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        while self.step() {}
        self.into_vec()
    }
}

impl<T, L, R> SortSteps<T> for Either<L, R>
where
    L: SortSteps<T>,
    R: SortSteps<T>,
{
    fn step(&mut self) -> bool {
        match self {
            Left(l) => l.step(),
            Right(r) => r.step(),
        }
    }

    fn current(&self) -> &[T] {
        match self {
            Left(l) => l.current(),
            Right(r) => r.current(),
        }
    }

    fn into_vec(self) -> Vec<T> {
        match self {
            Left(l) => l.into_vec(),
            Right(r) => r.into_vec(),
        }
    }
}

/// The iterator returned by [`SortAlgorithm::start`].
pub type Steps<T> = Either<Bubble<T>, Either<Selection<T>, Insertion<T>>>;

/// The available sorting algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgorithm {
    /// All algorithms.
    pub const ALL: [SortAlgorithm; 3] = [SortAlgorithm::Bubble, SortAlgorithm::Selection, SortAlgorithm::Insertion];

    /// Start the algorithm on a copy of `data`.
    pub fn start<T>(self, data: &[T]) -> Steps<T>
    where
        T: Ord + Clone,
    {
        match self {
            SortAlgorithm::Bubble => Left(bubble::start(data)),
            SortAlgorithm::Selection => Right(Left(selection::start(data))),
            SortAlgorithm::Insertion => Right(Right(insertion::start(data))),
        }
    }

    /// Return a sorted copy of `data`.
    pub fn sort<T>(self, data: &[T]) -> Vec<T>
    where
        T: Ord + Clone,
    {
        self.start(data).into_sorted()
    }

    /// Return a sorted copy of `data` and pass a snapshot to `observer`
    /// after each unit of progress.
    ///
    /// The observer is called synchronously in algorithm order.
    pub fn sort_with<T, F>(self, data: &[T], mut observer: F) -> Vec<T>
    where
        T: Ord + Clone,
        F: FnMut(Vec<T>),
    {
        let mut steps = self.start(data);
        while steps.step() {
            observer(steps.current().to_vec());
        }
        steps.into_vec()
    }

    /// The number of snapshots produced for an input of length `n`.
    pub fn num_steps(self, n: usize) -> usize {
        match self {
            SortAlgorithm::Bubble => n * n.saturating_sub(1) / 2,
            SortAlgorithm::Selection => n,
            SortAlgorithm::Insertion => n.saturating_sub(1),
        }
    }

    /// The lower case name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        SortAlgorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Return a copy of `data` sorted with bubble sort.
pub fn bubble_sort<T>(data: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    bubble::start(data).into_sorted()
}

/// Return a copy of `data` sorted with selection sort.
pub fn selection_sort<T>(data: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    selection::start(data).into_sorted()
}

/// Return a copy of `data` sorted with insertion sort.
pub fn insertion_sort<T>(data: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    insertion::start(data).into_sorted()
}

/// Elements compared by key only, carrying a tag to observe ties.
#[cfg(test)]
pub(crate) mod keyed {
    use std::cmp::Ordering;

    #[derive(Clone, Debug)]
    pub struct Keyed(pub u8, pub char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    /// The tags of `items` in order.
    pub fn tags(items: &[Keyed]) -> String {
        items.iter().map(|k| k.1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{SortAlgorithm, SortSteps};
    use crate::Error;

    const DATA: &[i32] = &[5, -1, 3, 3, 0, 9, 2, -7, 3];

    #[test]
    fn test_all_sort() {
        let mut expected = DATA.to_vec();
        expected.sort();
        for alg in SortAlgorithm::ALL.iter() {
            assert_eq!(alg.sort(DATA), expected, "{}", alg);
        }
    }

    #[test]
    fn test_num_steps() {
        for alg in SortAlgorithm::ALL.iter() {
            for n in 0..8 {
                let data: Vec<_> = (0..n).rev().collect();
                assert_eq!(alg.start(&data).count(), alg.num_steps(n), "{} n={}", alg, n);
            }
        }
    }

    #[test]
    fn test_sort_with_matches_iterator() {
        for alg in SortAlgorithm::ALL.iter() {
            let mut observed = vec![];
            let sorted = alg.sort_with(DATA, |s| observed.push(s));
            let pulled: Vec<_> = alg.start(DATA).collect();
            assert_eq!(observed, pulled);
            assert_eq!(observed.last(), Some(&sorted));
        }
    }

    #[test]
    fn test_restart() {
        let mut steps = SortAlgorithm::Bubble.start(DATA);
        steps.next();
        steps.next();
        let copy = steps.clone();
        assert_eq!(steps.collect::<Vec<_>>(), copy.collect::<Vec<_>>());
    }

    #[test]
    fn test_current() {
        let mut steps = SortAlgorithm::Insertion.start(&[2, 1]);
        assert_eq!(steps.current(), &[2, 1]);
        assert!(steps.step());
        assert_eq!(steps.current(), &[1, 2]);
        assert!(!steps.step());
        assert_eq!(steps.into_vec(), vec![1, 2]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("bubble".parse(), Ok(SortAlgorithm::Bubble));
        assert_eq!(" Selection ".parse(), Ok(SortAlgorithm::Selection));
        assert_eq!("insertion".parse(), Ok(SortAlgorithm::Insertion));
        assert_eq!(
            "quick".parse::<SortAlgorithm>(),
            Err(Error::UnknownAlgorithm("quick".to_string()))
        );
        for alg in SortAlgorithm::ALL.iter() {
            assert_eq!(alg.to_string().parse(), Ok(*alg));
        }
    }
}
