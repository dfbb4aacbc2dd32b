use anyhow::{Context, Result};
use toybox_engine::device::GpuInit;
use toybox_engine::logging::{init_logging, LoggingConfig};
use toybox_engine::window::Runtime;
use toybox_paint::{PaintApp, PaintConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = PaintConfig::default();
    log::info!(
        "canvas {}x{}, export to {}",
        config.canvas_width,
        config.canvas_height,
        config.export_path.display(),
    );
    println!("Hold the left mouse button to draw.");
    println!("Brushes: 1 pencil, 2 spray, 3 star, 4 circle");
    println!("Colors: K black, R red, G green, B blue, Y yellow, M magenta");
    println!("C clears, S saves, Esc quits.");

    let app = PaintApp::new(config);
    let runtime_config = app.runtime_config();

    Runtime::run(runtime_config, GpuInit::default(), app).context("paint exited with an error")
}
