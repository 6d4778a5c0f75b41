// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Fill a tree with kurbo rectangles, query a window, move one box, and delete another.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_basics`

use kurbo::Rect as KRect;
use understory_quadtree::{QuadTree, Rect};

fn main() {
    let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 400.0, 400.0));

    // A 10x10 grid of 20x20 tiles, enough to split the root
    for i in 0..100_u32 {
        let x = f64::from(i % 10) * 40.0;
        let y = f64::from(i / 10) * 40.0;
        tree.insert(KRect::new(x, y, x + 20.0, y + 20.0).into(), i);
    }
    // One box straddling the center stays at the root
    tree.insert(KRect::new(180.0, 180.0, 220.0, 220.0).into(), 1000);
    println!("entries: {}", tree.len());

    let window = Rect::new(0.0, 0.0, 60.0, 60.0);
    let mut hits = Vec::new();
    tree.search(window, |_, id| {
        hits.push(*id);
        true
    });
    hits.sort_unstable();
    println!("window {:?} hits {:?}", KRect::from(window), hits);
    assert_eq!(hits, [0, 1, 10, 11]);

    // Move tile 0 far away; it drops out of the window
    tree.replace(
        Rect::new(0.0, 0.0, 20.0, 20.0),
        &0,
        Rect::new(380.0, 380.0, 400.0, 400.0),
        0,
    );
    assert!(tree.delete(Rect::new(40.0, 0.0, 60.0, 20.0), &1));
    assert!(!tree.delete(Rect::new(40.0, 0.0, 60.0, 20.0), &1), "already gone");

    hits.clear();
    tree.search(window, |_, id| {
        hits.push(*id);
        true
    });
    hits.sort_unstable();
    assert_eq!(hits, [10, 11]);

    // Stop after the first hit
    let mut first = None;
    tree.search(Rect::new(0.0, 0.0, 400.0, 400.0), |r, id| {
        first = Some((*r, *id));
        false
    });
    println!("first hit: {:?}", first);
    println!("bounds: {:?}", tree.bounds());
}
