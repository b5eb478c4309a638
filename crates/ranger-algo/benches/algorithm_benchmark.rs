// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ranger_algo::algorithm::replace_copy_if::replace_copy_if;
use ranger_algo::algorithm::set_union::set_union;
use ranger_algo::memory::buffer::TemporaryBuffer;
use ranger_algo::memory::vector::TemporaryVector;
use ranger_core::cursor::output::back_inserter;
use ranger_core::cursor::slice::SliceCursorMut;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(rng: &mut StdRng, n: usize) -> Vec<i64> {
    (0..n).map(|_| rng.random_range(-1_000..1_000)).collect()
}

fn bench_replace_copy_if(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("replace_copy_if");

    for n in SIZES {
        let src = random_values(&mut rng, n);
        let mut dst = vec![0i64; n];

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &src, |b, src| {
            b.iter(|| {
                replace_copy_if(
                    black_box(src),
                    SliceCursorMut::new(&mut dst),
                    |x: &i64| *x < 0,
                    &0,
                );
                black_box(&dst);
            })
        });
    }

    group.finish();
}

fn bench_set_union(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let mut group = c.benchmark_group("set_union");

    for n in SIZES {
        let mut a = random_values(&mut rng, n);
        let mut b = random_values(&mut rng, n);
        a.sort_unstable();
        b.sort_unstable();
        let mut out: Vec<i64> = Vec::with_capacity(2 * n);

        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(a, b), |bench, (a, b)| {
            bench.iter(|| {
                out.clear();
                set_union(black_box(a), black_box(b), back_inserter(&mut out));
                black_box(out.len());
            })
        });
    }

    group.finish();
}

fn bench_temporary_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("temporary_vector");

    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut buffer: TemporaryBuffer<u64> = TemporaryBuffer::allocate(n);
                let mut scratch = TemporaryVector::new(&mut buffer);
                for i in 0..scratch.capacity() as u64 {
                    scratch.push(i);
                }
                black_box(scratch.len());
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_replace_copy_if,
    bench_set_union,
    bench_temporary_vector
);
criterion_main!(benches);
