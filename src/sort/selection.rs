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

//! Selection sort.
//!
//! For each position `i` the smallest element of `data[i..]` is swapped into
//! position `i`. The first smallest element is chosen if there are several.
//!
//! The iterator returns one snapshot per position (after the swap), i.e. `n`
//! snapshots for an input of length `n`.
//!
//! # Example
//!
//! ```
//! use rs_dsa::sort::selection;
//!
//! let steps: Vec<_> = selection::start(&[3, 1, 2]).collect();
//! assert_eq!(steps, vec![vec![1, 3, 2], vec![1, 2, 3], vec![1, 2, 3]]);
//! ```

use super::SortSteps;

/// Start and return a selection sort iterator on a copy of `data`.
pub fn start<T>(data: &[T]) -> Selection<T>
where
    T: Ord + Clone,
{
    Selection {
        data: data.to_vec(),
        pos: 0,
    }
}

/// The selection sort iterator.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    data: Vec<T>,
    /// The next position to be filled.
    pos: usize,
}

impl<T> SortSteps<T> for Selection<T>
where
    T: Ord + Clone,
{
    fn step(&mut self) -> bool {
        let i = self.pos;
        if i >= self.data.len() {
            return false;
        }
        let mut min = i;
        for j in i + 1..self.data.len() {
            if self.data[j] < self.data[min] {
                min = j;
            }
        }
        self.data.swap(i, min);
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

impl<T> Iterator for Selection<T>
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

impl<T> Selection<T>
where
    T: Ord + Clone,
{
    /// Run the sort completely.
    pub fn run(&mut self) {
        while self.step() {}
    }

    /// The number of positions that already hold their final element.
    pub fn num_sorted(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::start;
    use crate::sort::keyed::{tags, Keyed};
    use crate::sort::SortSteps;

    #[test]
    fn test_steps() {
        let steps: Vec<_> = start(&[4, 3, 2, 1]).collect();
        assert_eq!(
            steps,
            vec![vec![1, 3, 2, 4], vec![1, 2, 3, 4], vec![1, 2, 3, 4], vec![1, 2, 3, 4]]
        );
    }

    #[test]
    fn test_prefix_sorted() {
        let data = [9, 4, 7, 1, 8, 2];
        let mut it = start(&data);
        let mut expected = data.to_vec();
        expected.sort();
        while it.step() {
            let k = it.num_sorted();
            assert_eq!(&it.current()[..k], &expected[..k]);
        }
        assert_eq!(it.into_vec(), expected);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(start(&[2, 2, 1, 2]).into_sorted(), vec![1, 2, 2, 2]);
        assert_eq!(start::<u8>(&[]).count(), 0);
    }

    #[test]
    fn test_run() {
        let mut it = start(&['c', 'a', 'b']);
        it.run();
        assert_eq!(it.current(), &['a', 'b', 'c']);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_ties() {
        let steps: Vec<_> = start(&[Keyed(2, 'a'), Keyed(1, 'x'), Keyed(2, 'b')])
            .map(|s| tags(&s))
            .collect();
        assert_eq!(steps, vec!["xab", "xab", "xab"]);

        let steps: Vec<_> = start(&[Keyed(1, 'x'), Keyed(3, 'a'), Keyed(3, 'b'), Keyed(3, 'c')])
            .map(|s| tags(&s))
            .collect();
        assert!(steps.iter().all(|s| s == "xabc"));
    }
}
