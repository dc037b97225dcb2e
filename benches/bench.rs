use criterion::{criterion_group, criterion_main, Criterion};
use fractri::{
    classify, generate_outline, perturb::RandomPerturbation, Delaunator, OutlineParams,
    Triangulator,
};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generate_depth_5", |b| {
        let params = OutlineParams {
            depth: 5,
            ..Default::default()
        };
        b.iter(|| {
            let _points = generate_outline(&params, &mut RandomPerturbation::seeded(1)).unwrap();
        })
    });

    c.bench_function("triangulate_depth_3", |b| {
        let points =
            generate_outline(&OutlineParams::default(), &mut RandomPerturbation::seeded(1))
                .unwrap();
        b.iter(|| {
            let _triangles = Delaunator.triangulate(&points);
        })
    });

    c.bench_function("triangulate_depth_4", |b| {
        let params = OutlineParams {
            depth: 4,
            ..Default::default()
        };
        let points = generate_outline(&params, &mut RandomPerturbation::seeded(1)).unwrap();
        b.iter(|| {
            let _triangles = Delaunator.triangulate(&points);
        })
    });

    c.bench_function("classify_depth_4", |b| {
        let params = OutlineParams {
            depth: 4,
            ..Default::default()
        };
        let points = generate_outline(&params, &mut RandomPerturbation::seeded(1)).unwrap();
        let triangles = Delaunator.triangulate(&points);
        b.iter(|| {
            let _classification = classify(&points, &triangles);
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
