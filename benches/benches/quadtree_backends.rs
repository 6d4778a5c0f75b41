// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{FlatVec, QuadTree, Rect, SpatialIndex, WORLD};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0, y0, x0 + cell, y0 + cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Small boxes scattered over the longitude/latitude plane.
fn gen_geo_rects(count: usize, size: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = WORLD.min[0] + rng.next_f64() * (360.0 - size);
        let y0 = WORLD.min[1] + rng.next_f64() * (180.0 - size);
        out.push(Rect::new(x0, y0, x0 + size, y0 + size));
    }
    out
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Rect::from_point([cx + dx, cy + dy]));
        }
    }
    out
}

fn build<I: SpatialIndex<u32>>(mut idx: I, rects: &[Rect]) -> I {
    for (i, r) in rects.iter().copied().enumerate() {
        idx.insert(r, i as u32);
    }
    idx
}

fn count_hits<I: SpatialIndex<u32>>(idx: &I, query: Rect) -> usize {
    let mut hits = 0;
    idx.search(query, &mut |_, _| {
        hits += 1;
        true
    });
    hits
}

fn bench_build_query_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query_grid");
    let query = Rect::new(100.0, 100.0, 500.0, 500.0);
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let domain = Rect::new(0.0, 0.0, n as f64 * 10.0, n as f64 * 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("quadtree_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(domain),
                |tree| {
                    let tree = build(tree, &rects);
                    black_box(count_hits(&tree, query));
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("flatvec_n{}", n), |b| {
            b.iter_batched(
                FlatVec::new,
                |flat| {
                    let flat = build(flat, &rects);
                    black_box(count_hits(&flat, query));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy_geo");
    let rects = gen_geo_rects(16_384, 0.5);
    let tree = build(QuadTree::new_uninit(), &rects);
    let flat = build(FlatVec::new(), &rects);
    let queries: Vec<Rect> = (0..256)
        .map(|q| {
            let x = -180.0 + (q % 16) as f64 * 22.5;
            let y = -90.0 + (q / 16) as f64 * 11.25;
            Rect::new(x, y, x + 10.0, y + 5.0)
        })
        .collect();
    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("quadtree", |b| {
        b.iter(|| {
            let total: usize = queries.iter().map(|q| count_hits(&tree, *q)).sum();
            black_box(total);
        })
    });
    group.bench_function("flatvec", |b| {
        b.iter(|| {
            let total: usize = queries.iter().map(|q| count_hits(&flat, *q)).sum();
            black_box(total);
        })
    });
    group.finish();
}

fn bench_churn_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn_clustered");
    let points = gen_clustered_points(16, 256, 50.0);
    let domain = Rect::new(-50.0, -50.0, 2050.0, 2050.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("quadtree_delete_all", |b| {
        b.iter_batched(
            || build(QuadTree::new(domain), &points),
            |mut tree| {
                for (i, r) in points.iter().enumerate() {
                    black_box(tree.delete(*r, &(i as u32)));
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("quadtree_replace_all", |b| {
        b.iter_batched(
            || build(QuadTree::new(domain), &points),
            |mut tree| {
                for (i, r) in points.iter().enumerate() {
                    let moved = Rect::from_point([r.min[0] + 1.0, r.min[1] - 1.0]);
                    tree.replace(*r, &(i as u32), moved, i as u32);
                }
                black_box(tree.len());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query_grid,
    bench_query_heavy,
    bench_churn_clustered
);
criterion_main!(benches);
