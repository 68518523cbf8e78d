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

#![cfg(feature = "serialize")]

use rs_dsa::search::{binary, linear, BinaryStep, Decision, LinearStep};
use rs_dsa::{SortAlgorithm, Stack};

use std::error::Error;

#[test]
fn test_steps() -> Result<(), Box<dyn Error>> {
    let step = binary::start(&[1, 2, 3], 3).next().ok_or("no step")?;
    let json = serde_json::to_string(&step)?;
    assert_eq!(
        json,
        r#"{"left":0,"right":2,"mid":1,"value":2,"decision":"SearchRight"}"#
    );
    let back: BinaryStep<i32> = serde_json::from_str(&json)?;
    assert_eq!(back.decision, Decision::SearchRight);

    let step = linear::start(&["a", "b"], "a").next().ok_or("no step")?;
    let json = serde_json::to_string(&step)?;
    assert_eq!(json, r#"{"index":0,"value":"a","matched":true}"#);
    let back: LinearStep<String> = serde_json::from_str(&json)?;
    assert!(back.matched);
    Ok(())
}

#[test]
fn test_containers() -> Result<(), Box<dyn Error>> {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    let json = serde_json::to_string(&stack)?;
    let back: Stack<i32> = serde_json::from_str(&json)?;
    assert_eq!(back, stack);

    let json = serde_json::to_string(&SortAlgorithm::Insertion)?;
    assert_eq!(json, r#""Insertion""#);
    Ok(())
}
