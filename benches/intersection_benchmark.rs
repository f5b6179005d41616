// benches/intersection_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spatial_primitives::{
    intersection_aabb_ray, intersection_sphere_ray, Aabb3f, LineVolumef, Rayf, Spheref,
    Vector2f, Vector3f, VolumeGenerator,
};

const NUM_BENCH_ITEMS: usize = 100;

fn random_point(rng: &mut impl Rng, extent: f32) -> Vector3f {
    Vector3f::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

fn random_ray(rng: &mut impl Rng) -> Rayf {
    let origin = random_point(rng, 10.0);
    let mut target = random_point(rng, 2.0);
    if target == origin {
        target.x += 1.0;
    }
    Rayf::from_points(origin, target)
}

fn line_volume_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let volumes: Vec<(LineVolumef, Vector2f)> = (0..NUM_BENCH_ITEMS)
        .map(|_| {
            let sides = rng.gen_range(3..=8);
            let radius = rng.gen_range(60.0..100.0);
            let volume =
                VolumeGenerator::convex_line_volume(&mut rng, Vector2f::ZERO, radius, sides);
            let probe = Vector2f::new(rng.gen_range(-120.0..120.0), rng.gen_range(-120.0..120.0));
            (volume, probe)
        })
        .collect();

    let mut group = c.benchmark_group("VolumeContainment");
    group.bench_function("line_volume_is_inside_100_polygons", |b| {
        let mut iter = volumes.iter().cycle();
        b.iter(|| {
            let (volume, probe) = iter.next().unwrap();
            black_box(volume).is_inside(black_box(probe))
        })
    });
    group.finish();
}

fn ray_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let rays: Vec<Rayf> = (0..NUM_BENCH_ITEMS).map(|_| random_ray(&mut rng)).collect();
    let aabb = Aabb3f::new(-Vector3f::ONE, Vector3f::ONE);
    let sphere = Spheref::new(Vector3f::ZERO, 1.0);

    let mut group = c.benchmark_group("RayIntersection");
    group.bench_function("aabb_ray_100_rays", |b| {
        let mut iter = rays.iter().cycle();
        b.iter(|| intersection_aabb_ray(black_box(&aabb), black_box(iter.next().unwrap())))
    });
    group.bench_function("sphere_ray_100_rays", |b| {
        let mut iter = rays.iter().cycle();
        b.iter(|| intersection_sphere_ray(black_box(&sphere), black_box(iter.next().unwrap())))
    });
    group.finish();
}

criterion_group!(benches, line_volume_benchmark_fn, ray_benchmark_fn);
criterion_main!(benches);
