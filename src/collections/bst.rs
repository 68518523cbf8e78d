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

//! An unbalanced binary search tree.
//!
//! Node data is stored in an array (Vec), nodes are identified by their
//! index in this array. Each node is referenced by exactly one parent (or
//! is the root), and nodes are never removed individually, so the arena
//! does not contain holes.
//!
//! Values smaller than a node's value go to its left subtree, all other
//! values (including duplicates) go to its right subtree. The tree is never
//! rebalanced, inserting sorted values produces a path.

use super::stack::ItemStack;

use std::fmt;

/// Node of a binary search tree.
///
/// This is basically a newtype of the node index.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Node(usize);

impl Node {
    /// The index of the node in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
struct NodeData<T> {
    value: T,
    left: Option<Node>,
    right: Option<Node>,
}

/// An unbalanced binary search tree.
///
/// # Example
///
/// ```
/// use rs_dsa::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for &x in &[5, 3, 8] {
///     tree.insert(x);
/// }
/// assert!(tree.search(&3));
/// assert!(!tree.search(&4));
/// assert_eq!(tree.inorder_traversal(), vec![3, 5, 8]);
/// ```
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    nodes: Vec<NodeData<T>>,
    root: Option<Node>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        BinarySearchTree {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<T> BinarySearchTree<T> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` as a new leaf.
    ///
    /// The new leaf is attached at the first free slot on the search path of
    /// `value`. Returns the new node.
    pub fn insert(&mut self, value: T) -> Node
    where
        T: Ord,
    {
        let new = Node(self.nodes.len());
        if let Some(mut u) = self.root {
            loop {
                let data = &mut self.nodes[u.0];
                let child = if value < data.value {
                    &mut data.left
                } else {
                    &mut data.right
                };
                match *child {
                    Some(v) => u = v,
                    None => {
                        *child = Some(new);
                        break;
                    }
                }
            }
        } else {
            self.root = Some(new);
        }
        self.nodes.push(NodeData {
            value,
            left: None,
            right: None,
        });
        new
    }

    /// Return `true` if some node holds a value equal to `value`.
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cur = self.root;
        while let Some(u) = cur {
            let data = &self.nodes[u.0];
            if *value == data.value {
                return true;
            }
            cur = if *value < data.value { data.left } else { data.right };
        }
        false
    }

    /// Return all values in ascending order.
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inorder().cloned().collect()
    }

    /// Return an iterator over the values in ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        self.inorder_with_data(Vec::new())
    }

    /// Return an iterator over the values in ascending order using `stack`
    /// as the internal data structure.
    ///
    /// The stack is cleared before it is used, so it can be reused for
    /// multiple traversals.
    pub fn inorder_with_data<S>(&self, mut stack: S) -> Inorder<'_, T, S>
    where
        S: ItemStack<Node>,
    {
        stack.clear();
        Inorder {
            tree: self,
            stack,
            cur: self.root,
        }
    }

    /// The number of nodes on a longest path from the root to a leaf.
    ///
    /// The empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Node, usize)> = self.root.iter().map(|&u| (u, 1)).collect();
        while let Some((u, depth)) = stack.pop() {
            height = height.max(depth);
            let data = &self.nodes[u.0];
            for &v in data.left.iter().chain(data.right.iter()) {
                stack.push((v, depth + 1));
            }
        }
        height
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Remove all nodes.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The root node, `None` if the tree is empty.
    pub fn root(&self) -> Option<Node> {
        self.root
    }

    /// The left child of `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of this tree, e.g. a handle kept from
    /// before the last call to [`reset`](Self::reset).
    pub fn left(&self, u: Node) -> Option<Node> {
        self.nodes[u.0].left
    }

    /// The right child of `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of this tree, e.g. a handle kept from
    /// before the last call to [`reset`](Self::reset).
    pub fn right(&self, u: Node) -> Option<Node> {
        self.nodes[u.0].right
    }

    /// The value stored at `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of this tree, e.g. a handle kept from
    /// before the last call to [`reset`](Self::reset).
    pub fn value(&self, u: Node) -> &T {
        &self.nodes[u.0].value
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T> std::iter::FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        super::write_joined(f, self.inorder(), " -> ")
    }
}

/// In-order iterator over a [`BinarySearchTree`].
pub struct Inorder<'a, T, S = Vec<Node>>
where
    S: ItemStack<Node>,
{
    tree: &'a BinarySearchTree<T>,
    stack: S,
    cur: Option<Node>,
}

impl<'a, T, S> Iterator for Inorder<'a, T, S>
where
    S: ItemStack<Node>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(u) = self.cur {
            self.stack.push(u);
            self.cur = self.tree.nodes[u.0].left;
        }
        let u = self.stack.pop()?;
        self.cur = self.tree.nodes[u.0].right;
        Some(&self.tree.nodes[u.0].value)
    }
}

impl<'a, T, S> Inorder<'a, T, S>
where
    S: ItemStack<Node>,
{
    /// Return the data structure used in the traversal.
    pub fn into_data(self) -> S {
        self.stack
    }
}
