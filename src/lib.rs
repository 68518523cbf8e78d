// Copyright (c) 2026 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library of basic data structures and elementary algorithms for
//! teaching.
//!
//! The data structures (a singly linked list, a stack, a queue and an
//! unbalanced binary search tree) are plain reference implementations. The
//! algorithms (three quadratic sorts, linear and binary search) are
//! implemented as iterators that produce every intermediate state of the
//! computation, so that a front end can display the algorithm step by step
//! at its own pace.
//!
//! # Example
//!
//! ```
//! use rs_dsa::sort::{bubble, SortSteps};
//!
//! let data = [3, 1, 2];
//! let mut steps = bubble::start(&data);
//! assert_eq!(steps.next(), Some(vec![1, 3, 2]));
//! assert_eq!(steps.into_sorted(), vec![1, 2, 3]);
//! assert_eq!(data, [3, 1, 2]);
//! ```

mod num {
    pub use num_integer as integer;
    pub use num_traits as traits;
}

// # Data structures

pub mod collections;
pub use self::collections::{BinarySearchTree, LinkedList, Queue, Stack};

// # Algorithms

pub mod search;
pub mod sort;
pub use self::search::{binary_search, linear_search, SearchAlgorithm};
pub use self::sort::{bubble_sort, insertion_sort, selection_sort, SortAlgorithm};

// # Input handling

pub mod error;
pub use self::error::{Error, Result};

pub mod input;
pub mod random;
