//! Performance benchmarks for the Huffman codec.
//!
//! Covers compression and decompression speed across synthetic corpora:
//! uniform and gaussian-like symbol distributions over alphabets from 2 to
//! 128 distinct symbols, plus a few fixed byte patterns. All corpora are
//! generated from a seeded LCG so runs are reproducible.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffarc_huffman::codec;
use std::hint::black_box;

/// Deterministic corpus generators.
mod corpus {
    /// Linear congruential generator, fixed seed.
    pub struct Lcg(u64);

    impl Lcg {
        pub fn new() -> Self {
            Lcg(0x123456789ABCDEF0)
        }

        pub fn next_u32(&mut self) -> u32 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
            (self.0 >> 32) as u32
        }
    }

    /// Uniformly distributed symbols drawn from an alphabet of
    /// `alphabet_size` distinct byte values.
    pub fn uniform(size: usize, alphabet_size: usize) -> Vec<u8> {
        let mut rng = Lcg::new();
        (0..size)
            .map(|_| (b'a'.wrapping_add((rng.next_u32() as usize % alphabet_size) as u8)) % 128)
            .collect()
    }

    /// Non-uniform (gaussian-like) symbols: sums of uniform draws cluster
    /// around the low end of the alphabet, giving skewed frequencies.
    pub fn nonuniform(size: usize, alphabet_size: usize) -> Vec<u8> {
        let mut rng = Lcg::new();
        (0..size)
            .map(|_| {
                let spread = (alphabet_size / 6).max(1) as u32;
                let g: u32 = (0..6).map(|_| rng.next_u32() % spread).sum();
                let idx = (g as usize) % alphabet_size;
                (b'a'.wrapping_add(idx as u8)) % 128
            })
            .collect()
    }

    /// All bytes identical (best case).
    pub fn constant(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Full-range random bytes (worst case).
    pub fn random(size: usize) -> Vec<u8> {
        let mut rng = Lcg::new();
        (0..size).map(|_| rng.next_u32() as u8).collect()
    }

    /// Text-like data.
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk]);
        }
        data
    }
}

const CORPUS_SIZE: usize = 64 * 1024;

/// Compression speed across fixed byte patterns.
fn bench_compress_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_patterns");

    let patterns: [(&str, Vec<u8>); 3] = [
        ("constant", corpus::constant(CORPUS_SIZE)),
        ("random", corpus::random(CORPUS_SIZE)),
        ("text", corpus::text_like(CORPUS_SIZE)),
    ];

    for (name, data) in patterns {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = codec::compress(black_box(data)).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

/// Compression speed as the alphabet grows, uniform distribution.
fn bench_compress_uniform_alphabets(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_uniform_alphabets");

    for alphabet_size in [2, 23, 44, 65, 86, 107, 128] {
        let data = corpus::uniform(CORPUS_SIZE, alphabet_size);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(alphabet_size),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = codec::compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            },
        );
    }

    group.finish();
}

/// Compression speed as the alphabet grows, skewed distribution.
fn bench_compress_nonuniform_alphabets(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_nonuniform_alphabets");

    for alphabet_size in [2, 23, 44, 65, 86, 107, 128] {
        let data = corpus::nonuniform(CORPUS_SIZE, alphabet_size);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(alphabet_size),
            &data,
            |b, data| {
                b.iter(|| {
                    let compressed = codec::compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            },
        );
    }

    group.finish();
}

/// Decompression speed across distributions.
fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    let corpora: [(&str, Vec<u8>); 4] = [
        ("uniform_64", corpus::uniform(CORPUS_SIZE, 64)),
        ("nonuniform_64", corpus::nonuniform(CORPUS_SIZE, 64)),
        ("random", corpus::random(CORPUS_SIZE)),
        ("text", corpus::text_like(CORPUS_SIZE)),
    ];

    for (name, original) in corpora {
        let compressed = codec::compress(&original).unwrap();

        group.throughput(Throughput::Bytes(original.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let restored = codec::decompress(black_box(compressed)).unwrap();
                    black_box(restored);
                });
            },
        );
    }

    group.finish();
}

/// Round-trip (compress + decompress) across sizes.
fn bench_roundtrip_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip_sizes");

    for (name, size) in [("4KB", 4 * 1024), ("64KB", 64 * 1024), ("512KB", 512 * 1024)] {
        let data = corpus::nonuniform(size, 64);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = codec::compress(black_box(data)).unwrap();
                let restored = codec::decompress(&compressed).unwrap();
                black_box(restored);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress_patterns,
    bench_compress_uniform_alphabets,
    bench_compress_nonuniform_alphabets,
    bench_decompress,
    bench_roundtrip_sizes,
);
criterion_main!(benches);
