use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use raymarch_camera::{Camera, DirectionalCamera, MoveDelta, MoveHandler, OrbitCamera, Viewport};
use std::f32::consts::FRAC_PI_4;

/// Benchmark: single pose change (view + view-projection + inverse)
fn bench_set_position(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, FRAC_PI_4, 16.0 / 9.0);
    let mut i = 0u32;

    c.bench_function("camera_set_position", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            let angle = i as f32 * 0.01;
            camera.set_position(black_box(Vec3::new(angle.sin() * 5.0, 2.0, angle.cos() * 5.0)));
            black_box(camera.inverse_view_projection_matrix())
        })
    });
}

/// Benchmark: orbit input event
fn bench_orbit_move(c: &mut Criterion) {
    let mut orbit = OrbitCamera::new(Vec3::ZERO, FRAC_PI_4, Viewport::default(), 0.3, -0.3, 6.0);

    c.bench_function("orbit_handle_move", |b| {
        b.iter(|| {
            orbit.handle_move(black_box(MoveDelta::pointer(1.5, -0.5)));
            black_box(orbit.camera().position())
        })
    });
}

/// Benchmark: directional update at an absolute timestamp
fn bench_directional_update(c: &mut Criterion) {
    let mut camera = DirectionalCamera::new(
        Vec3::new(0.0, 6.0, 0.0),
        Vec3::new(0.0, 4.0, -10.0),
        Vec3::NEG_Z,
        3.0,
        1.0,
        16.0 / 9.0,
    )
    .expect("valid direction");
    let mut ts = 0.0f64;

    c.bench_function("directional_update", |b| {
        b.iter(|| {
            ts += 16.6;
            camera.update(black_box(ts));
            black_box(camera.camera().to_uniform(0.0, Viewport::default()))
        })
    });
}

criterion_group!(
    benches,
    bench_set_position,
    bench_orbit_move,
    bench_directional_update,
);

criterion_main!(benches);
