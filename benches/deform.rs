use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wave_morph::deform::wave_height;
use wave_morph::mesh::PlaneMesh;
use wave_morph::params::Parameters;

/// Benchmark: raw height function over one default-sized grid of samples
fn bench_wave_height(c: &mut Criterion) {
    c.bench_function("wave_height_101x101", |b| {
        b.iter(|| {
            let mut sum = 0.0f32;
            for iy in 0..=100 {
                for ix in 0..=100 {
                    let x = ix as f32 * 0.1 - 5.0;
                    let y = iy as f32 * 0.1 - 5.0;
                    sum += wave_height(black_box(x), black_box(y), 1.25, 4.0, 2.0, 0.2);
                }
            }
            black_box(sum)
        })
    });
}

/// Benchmark: one full frame of CPU work (deform + normals) by resolution
fn bench_deform_and_normals(c: &mut Criterion) {
    let mut group = c.benchmark_group("deform_frame");
    let params = Parameters::default();

    for segments in [50u32, 100, 200].iter() {
        let mut mesh = PlaneMesh::new(10.0, 10.0, *segments, *segments);
        let mut time = 0.0f64;

        group.bench_with_input(BenchmarkId::new("segments", segments), segments, |b, _| {
            b.iter(|| {
                time += 0.016;
                mesh.deform(black_box(time), &params);
                mesh.compute_vertex_normals();
                black_box(mesh.normals().len())
            })
        });
    }

    group.finish();
}

/// Benchmark: interleaving vertices for the GPU upload
fn bench_vertex_packing(c: &mut Criterion) {
    let mut mesh = PlaneMesh::new(10.0, 10.0, 100, 100);
    mesh.deform(0.5, &Parameters::default());
    mesh.compute_vertex_normals();

    c.bench_function("vertices_101x101", |b| {
        b.iter(|| black_box(mesh.vertices()))
    });
}

criterion_group!(
    benches,
    bench_wave_height,
    bench_deform_and_normals,
    bench_vertex_packing,
);

criterion_main!(benches);
