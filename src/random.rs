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

//! Random sample data.
//!
//! All values are drawn from `MIN_VALUE..=MAX_VALUE`.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rs_dsa::random;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let data = random::random_array(&mut rng);
//! assert!(data.len() >= 5 && data.len() <= 15);
//! assert!(data.iter().all(|&x| x >= 1 && x <= 99));
//! ```

use crate::collections::BinarySearchTree;

use rand::seq::index;
use rand::Rng;

/// The smallest random value.
pub const MIN_VALUE: i64 = 1;
/// The largest random value.
pub const MAX_VALUE: i64 = 99;

/// The number of values inserted by [`fill_tree`].
pub const TREE_FILL_SIZE: usize = 10;

/// Return a random array with 5 to 15 elements.
pub fn random_array<R>(rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let n = rng.random_range(5..=15);
    (0..n).map(|_| rng.random_range(MIN_VALUE..=MAX_VALUE)).collect()
}

/// Return `amount` pairwise distinct random values in random order.
///
/// At most `MAX_VALUE - MIN_VALUE + 1` values are returned.
pub fn random_distinct<R>(rng: &mut R, amount: usize) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let range = (MAX_VALUE - MIN_VALUE + 1) as usize;
    index::sample(rng, range, amount.min(range))
        .into_iter()
        .map(|i| MIN_VALUE + i as i64)
        .collect()
}

/// Replace the contents of `tree` by [`TREE_FILL_SIZE`] distinct random
/// values.
///
/// Returns the values in insertion order.
pub fn fill_tree<R>(tree: &mut BinarySearchTree<i64>, rng: &mut R) -> Vec<i64>
where
    R: Rng + ?Sized,
{
    let values = random_distinct(rng, TREE_FILL_SIZE);
    tree.reset();
    tree.extend(values.iter().copied());
    values
}
