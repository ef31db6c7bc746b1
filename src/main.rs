use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::time::{Duration, Instant};

use raymarch_camera::cli::Cli;
use raymarch_camera::core::{FpsCounter, WinitInputAdapter};
use raymarch_camera::frame::FrameClock;
use raymarch_camera::scene::SceneCatalog;
use raymarch_camera::traits::{CameraRig, InputSource, MoveDelta, MoveHandler};
use raymarch_camera::types::Viewport;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;

fn run(cli: &Cli) -> Result<()> {
    cli.validate()?;

    let catalog = SceneCatalog::load(&cli.scenes)?;
    let scene_id = match cli.requested_scene() {
        Some(id) => id,
        None => catalog
            .default_scene_id()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Scene catalog {} is empty", cli.scenes))?,
    };
    let scene = catalog
        .get(&scene_id)
        .ok_or_else(|| anyhow!("Scene {} not found", scene_id))?;

    let viewport = Viewport::new(cli.width, cli.height);
    let mut rig = scene
        .camera
        .build(viewport)
        .with_context(|| format!("Failed to build camera for scene {}", scene_id))?;
    log::info!("Switching to scene: {} ({})", scene_id, scene.name);

    // Scripted drag goes through the same adapter live input would
    let mut input = WinitInputAdapter::new();
    if cli.drag.is_some() {
        input.on_click();
    }

    let mut fps = FpsCounter::new(FPS_UPDATE_INTERVAL);
    let frame_budget = Duration::from_secs_f32(1.0 / cli.hz);
    let clock = if cli.realtime {
        FrameClock::realtime()
    } else {
        FrameClock::fixed(cli.hz)
    };

    for frame in clock.take(cli.frames as usize) {
        let frame_start = Instant::now();

        if let Some((dx, dy, wheel)) = cli.drag {
            input.on_pointer_motion(dx, dy);
            if wheel != 0.0 {
                input.on_wheel(wheel);
            }
        }
        match rig.as_move_handler() {
            Some(handler) => input.drain_moves(handler),
            None => input.drain_moves(&mut Discard),
        }

        rig.update(frame.timestamp_ms);

        let uniform = rig.camera().to_uniform(frame.seconds(), viewport);
        log::debug!(
            "frame {} t={:.3}s camera_pos={:?}",
            frame.number,
            uniform.time,
            uniform.camera_position
        );

        if cli.realtime {
            if let Some(value) = fps.tick(frame.delta) {
                log::info!("FPS: {:.1}", value);
            }
            if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }

    if !cli.no_ui {
        report(&scene_id, rig.as_ref());
    }
    Ok(())
}

fn report(scene_id: &str, rig: &dyn CameraRig) {
    let camera = rig.camera();
    println!("Scene {}", scene_id);
    println!("  position: {}", camera.position());
    println!("  target:   {}", camera.target());
    println!("  fov:      {:.3} rad, aspect {:.3}", camera.field_of_view(), camera.aspect_ratio());
    println!("  inverse view-projection (column-major):");
    for column in camera.inverse_view_projection_matrix().to_cols_array_2d() {
        println!(
            "    [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]",
            column[0], column[1], column[2], column[3]
        );
    }
}

/// Sink for input when the active rig does not take any
struct Discard;

impl MoveHandler for Discard {
    fn handle_move(&mut self, _delta: MoveDelta) {}
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    run(&cli)
}
