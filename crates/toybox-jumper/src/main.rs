use anyhow::{Context, Result};
use toybox_engine::device::GpuInit;
use toybox_engine::logging::{init_logging, LoggingConfig};
use toybox_engine::window::Runtime;
use toybox_jumper::{JumperApp, JumperConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = JumperConfig::default();
    log::info!(
        "gravity {} px/s², jump {} px/s, move {} px/s",
        config.physics.gravity,
        config.physics.jump_speed,
        config.physics.move_speed,
    );
    println!("Arrow keys to move, Space to jump, Esc to quit.");

    let app = JumperApp::new(config);
    let runtime_config = app.runtime_config();

    Runtime::run(runtime_config, GpuInit::default(), app).context("jumper exited with an error")
}
