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

use std::collections::VecDeque;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A queue over a ring buffer.
///
/// Elements are enqueued at the rear and dequeued at the front, both in
/// amortized constant time.
///
/// # Example
///
/// ```
/// use rs_dsa::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.to_string(), "[2]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue { items: VecDeque::new() }
    }
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value)
    }

    /// Remove and return the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Return the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all elements.
    pub fn reset(&mut self) {
        self.items.clear()
    }

    /// Iterate over the elements from front to rear.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> fmt::Display for Queue<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        super::write_list(f, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::Queue;

    #[test]
    fn test_fifo() {
        let mut q = Queue::new();
        for c in "abc".chars() {
            q.enqueue(c);
        }
        assert_eq!(q.len(), 3);
        let mut out = String::new();
        while let Some(c) = q.dequeue() {
            out.push(c);
        }
        assert_eq!(out, "abc");
        assert!(q.is_empty());
    }

    #[test]
    fn test_empty() {
        let mut q = Queue::<i32>::new();
        assert_eq!(q.dequeue(), None);
        assert_eq!(q.front(), None);
        assert_eq!(q.to_string(), "Empty");
    }

    #[test]
    fn test_interleaved() {
        let mut q = Queue::new();
        q.enqueue(1);
        q.enqueue(2);
        assert_eq!(q.dequeue(), Some(1));
        q.enqueue(3);
        assert_eq!(q.front(), Some(&2));
        assert_eq!(q.to_string(), "[2, 3]");
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
        q.reset();
        assert!(q.is_empty());
    }
}
