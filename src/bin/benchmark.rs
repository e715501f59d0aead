//! Performance benchmark comparing neighbor-counting algorithms

use std::collections::HashSet;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use zoomlife::domain::{step, Algorithm, Cell, Resolution};

/// Random soup of roughly `density` alive cells inside a `size`×`size` square
fn soup(size: i64, density: f64, resolution: Resolution) -> HashSet<Cell> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let r = resolution.step();

    (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|_| rng.random_bool(density))
        .map(|(x, y)| Cell::new(x * r, y * r))
        .collect()
}

/// Average milliseconds per generation
fn benchmark(algorithm: Algorithm, cells: &HashSet<Cell>, resolution: Resolution, iterations: u32) -> f64 {
    let mut cells = cells.clone();

    let start = Instant::now();
    for _ in 0..iterations {
        cells = step(&cells, resolution, algorithm).cells;
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Sparse Life Performance Benchmark ===\n");

    let resolution = Resolution::MIN;
    let sizes = [64, 256, 1024, 2048];
    let iterations = 10;

    print!("{:>10} {:>10}", "Size", "Live");
    for algorithm in Algorithm::all() {
        print!(" {:>12}", algorithm.name());
    }
    println!();
    println!("{:-<75}", "");

    for size in sizes {
        // Dense soup anchored at the origin
        let cells = soup(size, 0.3, resolution);
        print!("{:>10} {:>10}", format!("{}x{}", size, size), cells.len());

        for algorithm in Algorithm::all() {
            // The naive scan is O(area); skip it where it dominates the run
            if algorithm == Algorithm::Naive && size > 1024 {
                print!(" {:>12}", "-");
                continue;
            }
            print!(" {:>12.2}", benchmark(algorithm, &cells, resolution, iterations));
        }
        println!();
    }

    println!("\n=== Sparse vs Naive on a spread-out population ===\n");

    // Two small clusters far apart: the bounding box is huge, live count tiny
    let far = 4096;
    let cells: HashSet<Cell> = soup(32, 0.4, resolution)
        .into_iter()
        .flat_map(|c| [c, Cell::new(c.x + far, c.y + far)])
        .collect();

    for algorithm in Algorithm::all() {
        println!(
            "{:<12} {:>10.3} ms/gen ({} live cells)",
            algorithm.name(),
            benchmark(algorithm, &cells, resolution, 3),
            cells.len()
        );
    }
}
