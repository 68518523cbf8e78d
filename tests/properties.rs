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

use proptest::prelude::*;

use rs_dsa::search::{binary, linear, Decision};
use rs_dsa::sort::SortAlgorithm;
use rs_dsa::{BinarySearchTree, LinkedList, Queue, Stack};

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #[test]
    fn reverse_twice_is_identity(data in values()) {
        let mut list: LinkedList<i32> = data.iter().copied().collect();
        list.reverse();
        let reversed: Vec<_> = list.iter().copied().collect();
        let mut expected = data.clone();
        expected.reverse();
        prop_assert_eq!(reversed, expected);
        list.reverse();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), data.clone());
        prop_assert_eq!(list.len(), data.len());
    }

    #[test]
    fn delete_removes_first_match(data in values(), target in -50i32..50) {
        let mut list: LinkedList<i32> = data.iter().copied().collect();
        let mut expected = data.clone();
        let pos = expected.iter().position(|&x| x == target);
        if let Some(i) = pos {
            expected.remove(i);
        }
        prop_assert_eq!(list.delete(&target), pos.is_some());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn stack_is_lifo(data in values()) {
        let mut stack = Stack::new();
        for &x in &data {
            stack.push(x);
        }
        let mut popped = vec![];
        while let Some(x) = stack.pop() {
            popped.push(x);
        }
        popped.reverse();
        prop_assert_eq!(popped, data);
    }

    #[test]
    fn queue_is_fifo(data in values()) {
        let mut queue = Queue::new();
        for &x in &data {
            queue.enqueue(x);
        }
        let mut dequeued = vec![];
        while let Some(x) = queue.dequeue() {
            dequeued.push(x);
        }
        prop_assert_eq!(dequeued, data);
    }

    #[test]
    fn bst_inorder_is_sorted(data in values()) {
        let tree: BinarySearchTree<i32> = data.iter().copied().collect();
        let mut expected = data.clone();
        expected.sort();
        prop_assert_eq!(tree.inorder_traversal(), expected);
        for x in -50..50 {
            prop_assert_eq!(tree.search(&x), data.contains(&x));
        }
    }

    #[test]
    fn sorts_agree_with_reference(data in values()) {
        let mut expected = data.clone();
        expected.sort();
        for alg in SortAlgorithm::ALL.iter() {
            let input = data.clone();
            let mut count = 0;
            let sorted = alg.sort_with(&input, |snapshot| {
                assert_eq!(snapshot.len(), data.len());
                count += 1;
            });
            prop_assert_eq!(&sorted, &expected);
            prop_assert_eq!(count, alg.num_steps(data.len()));
            prop_assert_eq!(&input, &data);
        }
    }

    #[test]
    fn snapshots_are_permutations(data in values()) {
        let mut expected = data.clone();
        expected.sort();
        for alg in SortAlgorithm::ALL.iter() {
            for mut snapshot in alg.start(&data) {
                snapshot.sort();
                prop_assert_eq!(&snapshot, &expected);
            }
        }
    }

    #[test]
    fn binary_search_finds_present(data in values(), target in -60i32..60) {
        let mut search = binary::start(&data, target);
        let steps: Vec<_> = search.by_ref().collect();
        match search.result() {
            Some(i) => {
                prop_assert_eq!(search.sorted()[i], target);
                prop_assert_eq!(steps.last().map(|s| s.decision), Some(Decision::Found));
            }
            None => prop_assert!(!data.contains(&target)),
        }
        for s in &steps {
            prop_assert!(s.left <= s.mid && s.mid <= s.right);
        }
    }

    #[test]
    fn linear_search_finds_first(data in values(), target in -60i32..60) {
        let mut search = linear::start(&data, target);
        let steps: Vec<_> = search.by_ref().collect();
        let expected = data.iter().position(|&x| x == target);
        prop_assert_eq!(search.result(), expected);
        prop_assert_eq!(steps.len(), expected.map_or(data.len(), |i| i + 1));
    }
}
