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

//! Bubble sort.
//!
//! Pass `i` compares the adjacent pairs `(j, j+1)` for `j < n-i-1` and swaps
//! a pair if its first element is larger. After pass `i` the largest `i+1`
//! elements are at their final positions.
//!
//! The iterator returns a snapshot after each comparison, i.e. `n(n-1)/2`
//! snapshots for an input of length `n`.
//!
//! # Example
//!
//! ```
//! use rs_dsa::sort::bubble;
//!
//! let steps: Vec<_> = bubble::start(&[3, 1, 2]).collect();
//! assert_eq!(steps, vec![vec![1, 3, 2], vec![1, 2, 3], vec![1, 2, 3]]);
//! ```

use super::SortSteps;

/// Start and return a bubble sort iterator on a copy of `data`.
pub fn start<T>(data: &[T]) -> Bubble<T>
where
    T: Ord + Clone,
{
    Bubble {
        data: data.to_vec(),
        pass: 0,
        pos: 0,
    }
}

/// The bubble sort iterator.
#[derive(Clone, Debug)]
pub struct Bubble<T> {
    data: Vec<T>,
    /// The current pass.
    pass: usize,
    /// The next pair to be compared in the current pass.
    pos: usize,
}

impl<T> SortSteps<T> for Bubble<T>
where
    T: Ord + Clone,
{
    fn step(&mut self) -> bool {
        let n = self.data.len();
        while self.pass < n {
            let j = self.pos;
            if j + 1 < n - self.pass {
                if self.data[j] > self.data[j + 1] {
                    self.data.swap(j, j + 1);
                }
                self.pos += 1;
                return true;
            }
            self.pass += 1;
            self.pos = 0;
        }
        false
    }

    fn current(&self) -> &[T] {
        &self.data
    }

    fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Iterator for Bubble<T>
where
    T: Ord + Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.step() {
            Some(self.data.clone())
        } else {
            None
        }
    }
}

impl<T> Bubble<T>
where
    T: Ord + Clone,
{
    /// Run the sort completely.
    pub fn run(&mut self) {
        while self.step() {}
    }
}
