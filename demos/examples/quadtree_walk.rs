// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree structure walk.
//!
//! Insert clustered points and print the live node structure as an indented outline,
//! the way a visualizer would traverse it.
//!
//! Run:
//! - `cargo run -p understory_examples --example quadtree_walk`

use understory_quadtree::{Child, QuadTree, Rect};

fn print_child(child: &Child<'_, u32>, depth: usize, items: &mut usize) {
    let indent = "  ".repeat(depth);
    let r = child.rect();
    match child {
        Child::Item(_) => {
            *items += 1;
            return;
        }
        Child::Group { entries, .. } => {
            println!("{indent}group ({} straddlers)", entries.len());
        }
        Child::Node(view) => {
            println!(
                "{indent}node [{:.1}, {:.1}] - [{:.1}, {:.1}]: {} entries{}",
                r.min[0],
                r.min[1],
                r.max[0],
                r.max[1],
                view.len(),
                if view.is_leaf() { " (leaf)" } else { "" }
            );
        }
    }
    let mut kids = Vec::new();
    child.children(&mut kids);
    for k in &kids {
        print_child(k, depth + 1, items);
    }
}

fn main() {
    let mut tree = QuadTree::new_uninit();

    // Dense cluster near Paris, sparse points elsewhere
    let mut id = 0_u32;
    for i in 0..120 {
        let dx = f64::from(i % 12) * 0.1;
        let dy = f64::from(i / 12) * 0.1;
        tree.insert(Rect::from_point([2.0 + dx, 48.5 + dy]), id);
        id += 1;
    }
    for i in 0..20 {
        let x = -170.0 + f64::from(i) * 17.0;
        tree.insert(Rect::from_point([x, -45.0]), id);
        id += 1;
    }
    // Spans the prime meridian and the equator
    tree.insert(Rect::new(-10.0, -10.0, 10.0, 10.0), id);

    let Some(root) = tree.root() else {
        println!("empty tree");
        return;
    };
    let mut items = 0;
    print_child(&Child::Node(root), 0, &mut items);
    println!("visited {items} of {} entries", tree.len());
    assert_eq!(items, tree.len());
}
