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

//! A singly linked list.
//!
//! Each node owns its successor, the list owns the head node. There is no
//! tail pointer, hence appending an element walks the whole list.

use std::fmt;

type Link<T> = Option<Box<ListNode<T>>>;

struct ListNode<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list.
///
/// # Example
///
/// ```
/// use rs_dsa::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.append(1);
/// list.append(2);
/// list.prepend(0);
/// assert_eq!(list.to_string(), "0 -> 1 -> 2");
///
/// list.reverse();
/// assert_eq!(list.to_string(), "2 -> 1 -> 0");
///
/// assert!(list.delete(&1));
/// assert!(!list.delete(&7));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 0]);
/// ```
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList { head: None, len: 0 }
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` at the end of the list.
    ///
    /// This takes O(n) time.
    pub fn append(&mut self, value: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(ListNode { value, next: None }));
        self.len += 1;
    }

    /// Add `value` at the front of the list.
    pub fn prepend(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    /// Remove the first element equal to `value`.
    ///
    /// Returns `true` if an element has been removed and `false` if no
    /// element is equal to `value`. In the latter case the list is not
    /// changed.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cur = &mut self.head;
        loop {
            match cur {
                None => return false,
                Some(node) if node.value == *value => {
                    let next = node.next.take();
                    *cur = next;
                    self.len -= 1;
                    return true;
                }
                Some(node) => cur = &mut node.next,
            }
        }
    }

    /// Reverse the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Return `true` if some element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|x| x == value)
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove all elements.
    pub fn reset(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }

    /// Iterate over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // unlink iteratively, dropping a long chain of boxes recursively
        // would overflow the stack
        self.reset()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.append(x);
        }
    }
}

impl<T> std::iter::FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for x in iter {
            list.prepend(x);
        }
        list.reverse();
        list
    }
}

impl<T> fmt::Display for LinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        super::write_joined(f, self.iter(), " -> ")
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the elements of a [`LinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::LinkedList;

    fn values(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_append_prepend() {
        let mut list = LinkedList::new();
        assert_eq!(list.to_string(), "Empty");
        list.append(1);
        list.append(2);
        list.prepend(0);
        assert_eq!(list.to_string(), "0 -> 1 -> 2");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete() {
        let mut list: LinkedList<i32> = vec![1, 2, 3, 2].into_iter().collect();
        assert!(list.delete(&2));
        assert_eq!(values(&list), vec![1, 3, 2]);
        assert!(list.delete(&1));
        assert_eq!(values(&list), vec![3, 2]);
        assert!(list.delete(&2));
        assert_eq!(values(&list), vec![3]);
        assert!(!list.delete(&5));
        assert_eq!(values(&list), vec![3]);
        assert!(list.delete(&3));
        assert!(list.is_empty());
        assert!(!list.delete(&3));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_reverse() {
        let mut list: LinkedList<i32> = (1..=5).collect();
        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        list.reverse();
        assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);

        let mut empty = LinkedList::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_strings() {
        let mut list = LinkedList::new();
        list.append("apple".to_string());
        list.append("pear".to_string());
        assert!(list.contains(&"pear".to_string()));
        assert!(list.delete(&"apple".to_string()));
        assert_eq!(format!("{:?}", list), "[\"pear\"]");
    }

    #[test]
    fn test_reset_and_long_drop() {
        let mut list: LinkedList<u32> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
        list.reset();
        assert!(list.is_empty());
        list.extend(0..3);
        assert_eq!(list.to_string(), "0 -> 1 -> 2");
        let long: LinkedList<u32> = (0..200_000).collect();
        drop(long);
    }
}
