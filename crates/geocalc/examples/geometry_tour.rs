//! Run every engine once on a seeded random point set and print the results.
//!
//! Usage:
//!   cargo run -p geocalc --example geometry_tour -- [count] [seed]

use std::time::Instant;

use geocalc::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let count: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(50);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let points = random_points(count, PointBounds::default(), ReplayToken::new(seed, 0));
    println!("points={} seed={seed}", points.len());

    let t = Instant::now();
    let cp = closest_pair(&points);
    match cp.pair {
        Some((a, b)) => println!(
            "closest_pair distance={:.3} pair=({a}, {b}) time_us={}",
            cp.distance,
            t.elapsed().as_micros()
        ),
        None => println!("closest_pair: fewer than two points"),
    }

    let t = Instant::now();
    match convex_hull(&points) {
        Ok(hull) => println!(
            "convex_hull vertices={} time_us={}",
            hull.len() - 1,
            t.elapsed().as_micros()
        ),
        Err(e) => println!("convex_hull: {e}"),
    }

    let t = Instant::now();
    match largest_empty_circle(&points) {
        Some(c) => println!("largest_empty_circle {c} time_us={}", t.elapsed().as_micros()),
        None => println!("largest_empty_circle: no triangulation"),
    }

    let lines = random_lines(8, PointBounds::default(), ReplayToken::new(seed, 1));
    let mut crossings = 0usize;
    for (i, a) in lines.iter().enumerate() {
        for b in &lines[i + 1..] {
            if do_intersect(a.start(), a.end(), b.start(), b.end()) {
                crossings += 1;
            }
        }
    }
    println!("segment_pairs_intersecting={crossings} of {}", lines.len() * (lines.len() - 1) / 2);
}
