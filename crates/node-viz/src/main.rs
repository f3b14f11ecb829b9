mod amplitude;
mod config;
mod render;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::{error, info};
use nannou::prelude::*;
use node_viz_core::{Simulation, StepResult};

use config::Config;

fn main() {
    env_logger::init();

    nannou::app(model).update(update).run();
}

struct Model {
    sim: Simulation,
    /// Playback clock; elapsed time since this instant indexes the
    /// amplitude data.
    started: Instant,
}

fn setup() -> Result<Simulation> {
    let config = Config::load();
    let sim_config = config.sim_config();

    let samples = amplitude::load(Path::new(config.amplitude_path()))?;
    info!(
        "loaded {} amplitude frames (~{:.1}s at {:.2} data fps)",
        samples.len(),
        samples.len() as f32 / sim_config.timeline.data_fps(),
        sim_config.timeline.data_fps(),
    );

    Ok(Simulation::new(sim_config, samples)?)
}

fn model(app: &App) -> Model {
    let sim = match setup() {
        Ok(sim) => sim,
        Err(err) => {
            error!("startup failed: {err:#}");
            std::process::exit(1);
        }
    };

    let config = sim.config();
    app.new_window()
        .title("Amplitude Node Visualizer")
        .size(config.width as u32, config.height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    Model {
        sim,
        started: Instant::now(),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let elapsed_ms = model.started.elapsed().as_millis() as u64;

    if model.sim.step(elapsed_ms) == StepResult::Finished {
        info!("amplitude data exhausted, shutting down");
        app.quit();
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    render::draw_frame(&draw, app.window_rect(), &model.sim);
    draw.to_frame(app, &frame).unwrap();
}

fn key_pressed(app: &App, _model: &mut Model, key: Key) {
    if key == Key::Q || key == Key::Escape {
        app.quit();
    }
}
