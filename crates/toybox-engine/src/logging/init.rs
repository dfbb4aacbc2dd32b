use std::sync::Once;

use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

/// Logger settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string, e.g. `"toybox_paint=debug"`. Takes
    /// precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto }
    }
}

/// wgpu logs every resource creation at info.
const QUIET_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect, and an
/// already installed logger (a test harness, say) is left alone.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.env_filter.or_else(|| std::env::var("RUST_LOG").ok());
        let mut builder = build(filter.as_deref());
        builder.write_style(config.write_style);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized (filter: {})", filter.as_deref().unwrap_or("default"));
        }
    });
}

fn build(filter: Option<&str>) -> Builder {
    let mut builder = Builder::new();
    match filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(LevelFilter::Info);
            for module in QUIET_MODULES {
                builder.filter_module(module, LevelFilter::Warn);
            }
        }
    }
    builder
}
