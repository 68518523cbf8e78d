/*
 * Copyright (c) 2018, 2020, 2022, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Basic container data structures.
//!
//! All containers are created empty, modified in place and can be returned
//! to the empty state with `reset`. Accessing an empty container is not an
//! error, the corresponding methods simply return `None`.
//!
//! The `Display` implementations produce a simple textual listing of the
//! stored values, or `Empty` if there are none.

mod bst;
mod linkedlist;
mod queue;
mod stack;

pub use self::bst::{BinarySearchTree, Inorder, Node};
pub use self::linkedlist::{Iter as LinkedListIter, LinkedList};
pub use self::queue::Queue;
pub use self::stack::{ItemStack, Stack};

use std::fmt;

/// Text shown for an empty container.
pub const EMPTY: &str = "Empty";

/// Write `items` separated by `sep`, or [`EMPTY`] if there are none.
fn write_joined<I>(f: &mut fmt::Formatter, items: I, sep: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut it = items.into_iter().peekable();
    if it.peek().is_none() {
        return write!(f, "{}", EMPTY);
    }
    let mut first = true;
    for x in it {
        if !first {
            write!(f, "{}", sep)?;
        }
        first = false;
        write!(f, "{}", x)?;
    }
    Ok(())
}

/// Write `items` as a bracketed list `[a, b, c]`, or [`EMPTY`] if there are none.
fn write_list<I>(f: &mut fmt::Formatter, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut it = items.into_iter().peekable();
    if it.peek().is_none() {
        return write!(f, "{}", EMPTY);
    }
    write!(f, "[")?;
    write_joined(f, it, ", ")?;
    write!(f, "]")
}
