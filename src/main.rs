// src/main.rs
//
// `probe`: runs a fixed set of containment and ray queries and logs each
// result. Exits non-zero when any query disagrees with its expected answer.
// Set RUST_LOG=debug (or trace) for more detail.

use std::process::ExitCode;

use spatial_primitives::{
    intersection_aabb_ray, intersection_plane_ray, intersection_sphere_ray, Aabb3f, AabbCollider,
    Matrix4x4f, Plane, PlaneVolumef, Rayf, Spheref, Vector2f, Vector3f,
};

struct Probe {
    name: &'static str,
    expected: bool,
    actual: bool,
}

fn unit_square_volume() -> PlaneVolumef {
    [
        Plane::new(Vector3f::ZERO, Vector3f::new(-1.0, 0.0, 0.0)),
        Plane::new(Vector3f::ZERO, Vector3f::new(0.0, -1.0, 0.0)),
        Plane::new(Vector3f::ONE, Vector3f::RIGHT),
        Plane::new(Vector3f::ONE, Vector3f::UP),
    ]
    .into_iter()
    .collect()
}

fn run_probes() -> Vec<Probe> {
    let unit_box = Aabb3f::new(Vector3f::ZERO, Vector3f::ONE);
    let unit_sphere = Spheref::new(Vector3f::ZERO, 1.0);
    let square = unit_square_volume();
    let floor = Plane::new(Vector3f::ZERO, Vector3f::UP);

    let menu_button = AabbCollider::with_pivot(
        Vector2f::new(400.0, 300.0),
        Vector2f::new(200.0, 60.0),
        Vector2f::new(0.5, 0.5),
    );
    let cursor = AabbCollider::from_xywh(450.0, 310.0, 1.0, 1.0);

    let camera = Matrix4x4f::create_rotation_around_y(0.5)
        * Matrix4x4f::create_translation(Vector3f::new(3.0, 1.0, -2.0));
    let round_trip = camera.fast_inverse().fast_inverse();
    let round_trip_ok = camera
        .as_slice()
        .iter()
        .zip(round_trip.as_slice())
        .all(|(a, b)| (a - b).abs() < 1e-5);

    let falling = Rayf::new(Vector3f::new(2.0, 10.0, -1.0), Vector3f::new(0.0, -1.0, 0.0));
    let floor_hit = intersection_plane_ray(&floor, &falling);
    log::debug!("floor hit: {:?}", floor_hit);

    vec![
        Probe {
            name: "ray from the left enters the unit box",
            expected: true,
            actual: intersection_aabb_ray(
                &unit_box,
                &Rayf::new(Vector3f::new(-1.0, 0.5, 0.5), Vector3f::RIGHT),
            ),
        },
        Probe {
            name: "ray pointing away from the unit box misses",
            expected: false,
            actual: intersection_aabb_ray(
                &unit_box,
                &Rayf::new(Vector3f::new(2.0, 2.0, 2.0), Vector3f::ONE),
            ),
        },
        Probe {
            name: "ray towards the unit sphere hits",
            expected: true,
            actual: intersection_sphere_ray(
                &unit_sphere,
                &Rayf::new(Vector3f::new(5.0, 0.0, 0.0), -Vector3f::RIGHT),
            ),
        },
        Probe {
            name: "ray away from the unit sphere misses",
            expected: false,
            actual: intersection_sphere_ray(
                &unit_sphere,
                &Rayf::new(Vector3f::new(5.0, 0.0, 0.0), Vector3f::RIGHT),
            ),
        },
        Probe {
            name: "square volume contains (0.5, 0.5, 0)",
            expected: true,
            actual: square.is_inside(&Vector3f::new(0.5, 0.5, 0.0)),
        },
        Probe {
            name: "square volume excludes (2, 2, 0)",
            expected: false,
            actual: square.is_inside(&Vector3f::new(2.0, 2.0, 0.0)),
        },
        Probe {
            name: "falling ray lands on the floor",
            expected: true,
            actual: floor_hit.is_some_and(|p| p.y.abs() < 1e-5),
        },
        Probe {
            name: "cursor is over the menu button",
            expected: true,
            actual: menu_button.check_collision(&cursor),
        },
        Probe {
            name: "fast inverse round-trips a camera transform",
            expected: true,
            actual: round_trip_ok,
        },
    ]
}

fn main() -> ExitCode {
    env_logger::init();

    let probes = run_probes();
    let mut failures = 0;
    for probe in &probes {
        if probe.actual == probe.expected {
            log::info!("ok   {} ({})", probe.name, probe.actual);
        } else {
            log::error!("FAIL {} (expected {}, got {})", probe.name, probe.expected, probe.actual);
            failures += 1;
        }
    }

    println!("{}/{} probes passed", probes.len() - failures, probes.len());
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
