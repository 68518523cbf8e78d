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

//! Interactive shell for the container data structures.
//!
//! Reads one command per line from standard input, e.g.
//!
//! ```text
//! list append 3
//! stack push x
//! queue dequeue
//! bst insert 42
//! bst random
//! stack clear
//! ```
//!
//! and prints a status line and the state of the modified structure.

use rand::rngs::StdRng;
use rand::SeedableRng;

use rustop::opts;

use rs_dsa::input::parse_value;
use rs_dsa::random;
use rs_dsa::{BinarySearchTree, LinkedList, Queue, Stack};

use std::error::Error;
use std::io::{self, BufRead};

/// The outcome of a command: a success or an error message.
type Status = Result<String, String>;

struct Shell {
    list: LinkedList<String>,
    stack: Stack<String>,
    queue: Queue<String>,
    bst: BinarySearchTree<i64>,
    rng: StdRng,
}

fn need_value(value: Option<&str>) -> Result<&str, String> {
    value.ok_or_else(|| "Please enter a value".to_string())
}

fn need_integer(value: Option<&str>) -> Result<i64, String> {
    parse_value(value.unwrap_or("")).map_err(|_| "Please enter a valid integer".to_string())
}

/// Split off the first word of `text` and return it with the trimmed rest.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

/// Split a command line into structure, operation and value.
///
/// The value is the whole remaining text, so it may contain whitespace.
fn split_command(line: &str) -> (&str, &str, Option<&str>) {
    let (structure, rest) = split_word(line.trim());
    let (op, value) = split_word(rest);
    (structure, op, Some(value).filter(|v| !v.is_empty()))
}

impl Shell {
    fn new(rng: StdRng) -> Self {
        Shell {
            list: LinkedList::new(),
            stack: Stack::new(),
            queue: Queue::new(),
            bst: BinarySearchTree::new(),
            rng,
        }
    }

    fn list(&mut self, op: &str, value: Option<&str>) -> Status {
        match op {
            "append" => {
                let v = need_value(value)?;
                self.list.append(v.to_string());
                Ok(format!("Appended '{}'", v))
            }
            "prepend" => {
                let v = need_value(value)?;
                self.list.prepend(v.to_string());
                Ok(format!("Prepended '{}'", v))
            }
            "delete" => {
                let v = need_value(value)?;
                if self.list.delete(&v.to_string()) {
                    Ok(format!("Deleted '{}'", v))
                } else {
                    Err(format!("'{}' not found", v))
                }
            }
            "reverse" => {
                self.list.reverse();
                Ok("List reversed".to_string())
            }
            "clear" => {
                self.list.reset();
                Ok("List cleared".to_string())
            }
            _ => Err(format!("unknown list operation: {}", op)),
        }
    }

    fn stack(&mut self, op: &str, value: Option<&str>) -> Status {
        match op {
            "push" => {
                let v = need_value(value)?;
                self.stack.push(v.to_string());
                Ok(format!("Pushed '{}'", v))
            }
            "pop" => match self.stack.pop() {
                Some(v) => Ok(format!("Popped '{}'", v)),
                None => Err("Stack is empty".to_string()),
            },
            "peek" => match self.stack.peek() {
                Some(v) => Ok(format!("Top element: '{}'", v)),
                None => Err("Stack is empty".to_string()),
            },
            "clear" => {
                self.stack.reset();
                Ok("Stack cleared".to_string())
            }
            _ => Err(format!("unknown stack operation: {}", op)),
        }
    }

    fn queue(&mut self, op: &str, value: Option<&str>) -> Status {
        match op {
            "enqueue" => {
                let v = need_value(value)?;
                self.queue.enqueue(v.to_string());
                Ok(format!("Enqueued '{}'", v))
            }
            "dequeue" => match self.queue.dequeue() {
                Some(v) => Ok(format!("Dequeued '{}'", v)),
                None => Err("Queue is empty".to_string()),
            },
            "front" => match self.queue.front() {
                Some(v) => Ok(format!("Front element: '{}'", v)),
                None => Err("Queue is empty".to_string()),
            },
            "clear" => {
                self.queue.reset();
                Ok("Queue cleared".to_string())
            }
            _ => Err(format!("unknown queue operation: {}", op)),
        }
    }

    fn bst(&mut self, op: &str, value: Option<&str>) -> Status {
        match op {
            "insert" => {
                let v = need_integer(value)?;
                self.bst.insert(v);
                Ok(format!("Inserted {}", v))
            }
            "search" => {
                let v = need_integer(value)?;
                if self.bst.search(&v) {
                    Ok(format!("{} found", v))
                } else {
                    Err(format!("{} not found", v))
                }
            }
            "random" => {
                let values = random::fill_tree(&mut self.bst, &mut self.rng);
                Ok(format!("Inserted random values: {:?}", values))
            }
            "clear" => {
                self.bst.reset();
                Ok("BST cleared".to_string())
            }
            _ => Err(format!("unknown bst operation: {}", op)),
        }
    }

    fn show(&self, structure: &str) {
        match structure {
            "list" => {
                println!("Linked List: {}", self.list);
                println!("Visual: HEAD -> {} -> NULL", self.list);
            }
            "stack" => {
                println!("Stack (LIFO): {}", self.stack);
                println!("Size: {}", self.stack.len());
                match self.stack.peek() {
                    Some(top) => println!("Top: {}", top),
                    None => println!("Top: None"),
                }
            }
            "queue" => {
                println!("Queue (FIFO): {}", self.queue);
                println!("Size: {}", self.queue.len());
                match self.queue.front() {
                    Some(front) => println!("Front: {}", front),
                    None => println!("Front: None"),
                }
            }
            "bst" => {
                println!("Inorder Traversal: {:?}", self.bst.inorder_traversal());
                println!("Size: {}", self.bst.len());
                println!("Height: {}", self.bst.height());
                println!("Tree structure (inorder): {}", self.bst);
            }
            _ => {}
        }
    }

    fn execute(&mut self, line: &str) {
        let (structure, op, value) = split_command(line);
        if structure.is_empty() {
            return;
        }
        let status = match structure {
            "list" => self.list(op, value),
            "stack" => self.stack(op, value),
            "queue" => self.queue(op, value),
            "bst" => self.bst(op, value),
            _ => Err(format!("unknown structure: {}", structure)),
        };
        match status {
            Ok(msg) => println!("ok: {}", msg),
            Err(msg) => println!("error: {}", msg),
        }
        self.show(structure);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Manipulate a linked list, a stack, a queue and a binary search tree.";
        opt seed:Option<u64>, desc:"Seed for random tree values.";
    }
    .parse_or_exit();

    let mut shell = Shell::new(match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    });

    for line in io::stdin().lock().lines() {
        shell.execute(&line?);
    }

    Ok(())
}
