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

//! Insertion sort.
//!
//! Element `i` (the key) is inserted into the sorted prefix `data[..i]` by
//! shifting all larger elements one position to the right.
//!
//! The iterator returns one snapshot per inserted element, i.e. `n-1`
//! snapshots for an input of length `n > 0`.
//!
//! # Example
//!
//! ```
//! use rs_dsa::sort::insertion;
//!
//! let steps: Vec<_> = insertion::start(&[3, 1, 2]).collect();
//! assert_eq!(steps, vec![vec![1, 3, 2], vec![1, 2, 3]]);
//! ```

use super::SortSteps;

/// Start and return an insertion sort iterator on a copy of `data`.
pub fn start<T>(data: &[T]) -> Insertion<T>
where
    T: Ord + Clone,
{
    Insertion {
        data: data.to_vec(),
        pos: 1,
    }
}

/// The insertion sort iterator.
#[derive(Clone, Debug)]
pub struct Insertion<T> {
    data: Vec<T>,
    /// The index of the next key.
    pos: usize,
}

impl<T> SortSteps<T> for Insertion<T>
where
    T: Ord + Clone,
{
    fn step(&mut self) -> bool {
        let i = self.pos;
        if i >= self.data.len() {
            return false;
        }
        let key = self.data[i].clone();
        let mut j = i;
        while j > 0 && key < self.data[j - 1] {
            self.data[j] = self.data[j - 1].clone();
            j -= 1;
        }
        self.data[j] = key;
        self.pos += 1;
        true
    }

    fn current(&self) -> &[T] {
        &self.data
    }

    fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Iterator for Insertion<T>
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

impl<T> Insertion<T>
where
    T: Ord + Clone,
{
    /// Run the sort completely.
    pub fn run(&mut self) {
        while self.step() {}
    }
}
