//! Side-by-side timing of the two reconstruction strategies

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use restitch_engine::{BruteForceReconstructor, PriorityReconstructor, Reconstructor};

/// Slice a deterministic pseudo-random base text into overlapping windows
fn overlapping_windows(count: usize, window: usize, overlap: usize) -> Vec<String> {
    let stride = window - overlap;
    let mut base = String::with_capacity(count * stride + overlap);
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    while base.len() < (count - 1) * stride + window {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        base.push(char::from(b'a' + ((state >> 33) % 26) as u8));
    }

    (0..count)
        .map(|i| base[i * stride..i * stride + window].to_string())
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    for &count in &[16usize, 64] {
        let fragments = overlapping_windows(count, 64, 16);

        c.bench_function(&format!("brute-force/{count}"), |b| {
            b.iter(|| BruteForceReconstructor.reconstruct(black_box(fragments.clone())))
        });

        c.bench_function(&format!("priority/{count}"), |b| {
            b.iter(|| PriorityReconstructor::new().reconstruct(black_box(fragments.clone())))
        });
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
