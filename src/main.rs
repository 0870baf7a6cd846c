//! Throughput comparison of the naive, SIMD and tiled multiplies.

use densemm::{Matrix, Result, equals, multiply_naive, multiply_simd, multiply_tiled};
use std::time::Instant;

const SEED: u64 = 0x5eed;

fn main() -> Result<()> {
    println!("=== Square Matrix Multiplication Throughput ===\n");

    let sizes = [16, 32, 64, 70, 128, 256];

    print_row("COUNT", "SIZE", "NAIVE", "SIMD", "TILED", "SCALE");
    println!("{}", "-".repeat(62));

    for &size in &sizes {
        let iterations = iterations_for(size);
        let a = Matrix::random_seeded(size, 1, 10, SEED)?;
        let b = Matrix::random_seeded(size, 1, 10, SEED + 1)?;

        let (naive, naive_ms) = bench(iterations, || multiply_naive(&a, &b))?;
        let (simd, simd_ms) = bench(iterations, || multiply_simd(&a, &b))?;
        let (tiled, tiled_ms) = bench(iterations, || multiply_tiled(&a, &b))?;

        assert!(equals(&naive, &simd), "simd result differs at size {}", size);
        assert!(equals(&naive, &tiled), "tiled result differs at size {}", size);

        let scale = (naive_ms / tiled_ms * 100.0).round() / 100.0;
        print_row(
            &iterations.to_string(),
            &size.to_string(),
            &throughput_per_s(naive_ms, iterations).to_string(),
            &throughput_per_s(simd_ms, iterations).to_string(),
            &throughput_per_s(tiled_ms, iterations).to_string(),
            &format!("{:.2}", scale),
        );
    }

    Ok(())
}

/// Runs `f` `iterations` times; returns the last result and the total in ms.
fn bench<F>(iterations: usize, f: F) -> Result<(Matrix, f64)>
where
    F: Fn() -> Result<Matrix>,
{
    // Warmup
    let mut result = f()?;

    let start = Instant::now();
    for _ in 0..iterations {
        result = f()?;
    }
    Ok((result, start.elapsed().as_secs_f64() * 1000.0))
}

/// Calls per second, rounded.
fn throughput_per_s(total_ms: f64, calls: usize) -> u64 {
    (calls as f64 / total_ms * 1000.0).round() as u64
}

// Keep total naive work roughly constant across sizes
fn iterations_for(size: usize) -> usize {
    (50_000_000 / (size * size * size)).clamp(1, 10_000)
}

fn print_row(count: &str, size: &str, naive: &str, simd: &str, tiled: &str, scale: &str) {
    println!(
        "{:>6} | {:>5} | {:>10} | {:>10} | {:>10} | {:>6}",
        count, size, naive, simd, tiled, scale
    );
}
