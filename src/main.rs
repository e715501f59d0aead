use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zoomlife::{
    Config, SimulationState,
    application::Scheduler,
    domain::Viewport,
    input, rendering,
};

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.width as i32,
        window_height: config.height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    config.validate().context("invalid configuration")?;

    let state = SimulationState::new(&config).context("failed to build simulation")?;
    let scheduler = Scheduler::new(config.tick_interval()?);

    info!(
        resolution = config.resolution,
        tick_rate = config.tick_rate,
        algorithm = %config.algorithm,
        seed = ?config.seed,
        "starting"
    );

    macroquad::Window::from_config(window_conf(&config), run(state, scheduler));
    Ok(())
}

/// Frame loop: discrete input every frame, full simulation cycle per tick
async fn run(mut state: SimulationState, mut scheduler: Scheduler) {
    loop {
        state.resize(Viewport::new(screen_width() as u32, screen_height() as u32));

        let frame = input::poll();
        if frame.quit_requested() {
            break;
        }
        state = frame.events.iter().fold(state, |s, event| s.apply(*event));

        if scheduler.advance(get_frame_time()) {
            state = state.tick(frame.pan);
        }

        rendering::draw_frame(&state);

        next_frame().await;
    }
}
