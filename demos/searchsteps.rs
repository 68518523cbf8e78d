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

use time::OffsetDateTime;

use rustop::opts;

use rs_dsa::input::{parse_value, parse_values};
use rs_dsa::search::{binary, linear, Decision, SearchAlgorithm};

use std::error::Error;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Search an integer in an array and show the intermediate steps.";
        opt delay:Option<u64>, desc:"Delay between two steps in milliseconds (default 200 for linear, 300 for binary search).";
        param algorithm:String, desc:"Search algorithm (linear, binary)";
        param target:String, desc:"The integer to be searched";
        param array:String, desc:"Whitespace separated integers";
    }
    .parse_or_exit();

    let algorithm: SearchAlgorithm = args.algorithm.parse()?;
    let data: Vec<i64> = parse_values(&args.array)?;
    let target: i64 = parse_value(&args.target)?;

    println!("=== {} SEARCH ===", algorithm.name().to_uppercase());
    println!("Array: {:?}", data);
    println!("Target: {}", target);
    println!("Array size: {} elements", data.len());
    println!();

    let tstart = OffsetDateTime::now_utc();
    let result = match algorithm {
        SearchAlgorithm::Linear => {
            let delay = Duration::from_millis(args.delay.unwrap_or(200));
            println!("Linear Search Process:");
            let mut search = linear::start(&data, target);
            for (i, step) in search.by_ref().enumerate() {
                print!("Step {}: Checking index {}, value = {}", i + 1, step.index, step.value);
                if step.matched {
                    println!(" FOUND!");
                } else {
                    println!(" no match");
                    thread::sleep(delay);
                }
            }
            search.result()
        }
        SearchAlgorithm::Binary => {
            let delay = Duration::from_millis(args.delay.unwrap_or(300));
            let mut search = binary::start(&data, target);
            println!("Sorted array: {:?}", search.sorted());
            println!("Binary Search Process:");
            for (i, step) in search.by_ref().enumerate() {
                println!("Step {}: left={}, right={}, mid={}", i + 1, step.left, step.right, step.mid);
                println!("         Checking middle value: {}", step.value);
                if step.decision == Decision::Found {
                    println!("         FOUND at index {}!", step.mid);
                } else {
                    println!("         {}", step.decision);
                    thread::sleep(delay);
                }
            }
            search.result()
        }
    };
    let tend = OffsetDateTime::now_utc();

    println!();
    match result {
        Some(i) => println!("Result: Target {} found at index {}", target, i),
        None => println!("Result: Target {} not found", target),
    }
    println!("Time taken: {:.4} seconds", (tend - tstart).as_seconds_f64());
    println!("Time complexity: {}", algorithm.complexity());

    Ok(())
}
