//! Benchmarks for the shortest-path engine.
//!
//! Run with: cargo bench -p surface-geodesic

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use nalgebra::Point3;
use surface_geodesic::{DijkstraPathfinder, PathQuery};
use surface_types::{Cell, SurfaceMesh};

/// A flat n-by-n grid of unit squares, each split into two triangles.
fn grid_mesh(n: u32) -> SurfaceMesh {
    let mut mesh = SurfaceMesh::new();
    for j in 0..=n {
        for i in 0..=n {
            mesh.add_point(Point3::new(f64::from(i), f64::from(j), 0.0));
        }
    }
    let stride = n + 1;
    for j in 0..n {
        for i in 0..n {
            let v00 = j * stride + i;
            let v10 = v00 + 1;
            let v01 = v00 + stride;
            let v11 = v01 + 1;
            mesh.add_cell(Cell::Triangle([v00, v10, v11]));
            mesh.add_cell(Cell::Triangle([v00, v11, v01]));
        }
    }
    mesh
}

fn bench_find_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_path");

    for n in [16_u32, 64, 128] {
        let mesh = grid_mesh(n);
        let last = (n + 1) * (n + 1) - 1;

        group.bench_with_input(BenchmarkId::new("corner_to_corner", n), &mesh, |b, mesh| {
            let mut finder = DijkstraPathfinder::new();
            let query = PathQuery::between(0, last).with_stop_at_end(true);
            // First call pays the graph build; iterations measure the
            // cached-graph search.
            b.iter(|| finder.find_path(black_box(mesh), black_box(&query)));
        });

        group.bench_with_input(BenchmarkId::new("full_sweep", n), &mesh, |b, mesh| {
            let mut finder = DijkstraPathfinder::new();
            let query = PathQuery::between(0, last);
            b.iter(|| finder.find_path(black_box(mesh), black_box(&query)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
