/*
 * Copyright (c) 2018, 2026 Frank Fischer <frank-fischer@shadow-soft.de>
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

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A last-in-first-out container.
pub trait ItemStack<I> {
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn clear(&mut self);

    fn push(&mut self, u: I);

    fn pop(&mut self) -> Option<I>;

    fn top(&self) -> Option<&I>;
}

impl<'a, I, D> ItemStack<I> for &'a mut D
where
    D: ItemStack<I>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn push(&mut self, u: I) {
        (**self).push(u)
    }

    fn pop(&mut self) -> Option<I> {
        (**self).pop()
    }

    fn top(&self) -> Option<&I> {
        (**self).top()
    }
}

impl<I> ItemStack<I> for Vec<I> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn push(&mut self, u: I) {
        Vec::push(self, u)
    }

    fn pop(&mut self) -> Option<I> {
        Vec::pop(self)
    }

    fn top(&self) -> Option<&I> {
        self.as_slice().last()
    }
}

/// A stack over a dynamic array.
///
/// The top of the stack is the last element of the array, so `push` and
/// `pop` run in amortized constant time.
///
/// # Example
///
/// ```
/// use rs_dsa::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.to_string(), "[a, b]");
/// assert_eq!(stack.pop(), Some('b'));
/// assert_eq!(stack.pop(), Some('a'));
/// assert_eq!(stack.pop(), None);
/// assert_eq!(stack.to_string(), "Empty");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value)
    }

    /// Remove and return the top element, or `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Return the top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all elements.
    pub fn reset(&mut self) {
        self.items.clear()
    }

    /// Iterate over the elements from bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> ItemStack<T> for Stack<T> {
    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        self.reset()
    }

    fn push(&mut self, u: T) {
        Stack::push(self, u)
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    fn top(&self) -> Option<&T> {
        self.peek()
    }
}

impl<T> fmt::Display for Stack<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        super::write_list(f, &self.items)
    }
}
