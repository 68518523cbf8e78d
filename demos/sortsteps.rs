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

use rand::rngs::StdRng;
use rand::SeedableRng;
use time::OffsetDateTime;

use rustop::opts;

use rs_dsa::input::parse_values;
use rs_dsa::random;
use rs_dsa::sort::{SortAlgorithm, SortSteps};

use std::error::Error;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Sort an array of integers and show the intermediate steps.";
        opt random:bool, desc:"Sort a random array instead of the given one.";
        opt seed:Option<u64>, desc:"Seed for the random array.";
        opt max_steps:usize=20, desc:"Maximal number of steps shown.";
        opt delay:u64=100, desc:"Delay between two shown steps in milliseconds.";
        param algorithm:String, desc:"Sorting algorithm (bubble, selection, insertion)";
        param array:Option<String>, desc:"Whitespace separated integers";
    }
    .parse_or_exit();

    let algorithm: SortAlgorithm = args.algorithm.parse()?;
    let data: Vec<i64> = if args.random {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        random::random_array(&mut rng)
    } else {
        parse_values(args.array.as_deref().unwrap_or(""))?
    };

    println!("=== {} SORT ===", algorithm.name().to_uppercase());
    println!("Original array: {:?}", data);
    println!("Array size: {} elements", data.len());
    println!();

    let tstart = OffsetDateTime::now_utc();
    let mut steps = algorithm.start(&data);
    let mut nsteps = 0;
    while steps.step() {
        nsteps += 1;
        if nsteps <= args.max_steps {
            println!("Step {}: {:?}", nsteps, steps.current());
            thread::sleep(Duration::from_millis(args.delay));
        }
    }
    let sorted = steps.into_vec();
    let tend = OffsetDateTime::now_utc();

    if nsteps > args.max_steps {
        println!("... (showing first {} of {} steps)", args.max_steps, nsteps);
    }
    println!();
    println!("Final sorted array: {:?}", sorted);
    println!("Total steps: {}", nsteps);
    println!("Time taken: {:.4} seconds", (tend - tstart).as_seconds_f64());
    println!("Time complexity: O(n^2) average case");

    Ok(())
}
