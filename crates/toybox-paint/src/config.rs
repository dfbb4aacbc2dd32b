use std::path::PathBuf;

use toybox_engine::paint::Color;

use crate::brush::BrushParams;
use crate::export::ExportConfig;

/// Window, canvas and brush settings for the drawing app.
#[derive(Debug, Clone)]
pub struct PaintConfig {
    pub title: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub target_fps: u32,

    pub background: Color,
    /// Side length of the square drawn for each point.
    pub point_size: u32,
    pub brush: BrushParams,

    /// Where `S` writes the PNG.
    pub export_path: PathBuf,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            title: "Drawing Canvas".to_string(),
            canvas_width: 800,
            canvas_height: 600,
            target_fps: 60,
            background: Color::rgb(255, 255, 255),
            point_size: 2,
            brush: BrushParams::default(),
            export_path: PathBuf::from("drawing.png"),
        }
    }
}

impl PaintConfig {
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            width: self.canvas_width,
            height: self.canvas_height,
            background: self.background,
            point_size: self.point_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_matches_canvas() {
        let cfg = PaintConfig::default();
        let export = cfg.export_config();
        assert_eq!((export.width, export.height), (800, 600));
        assert_eq!(export.point_size, 2);
        assert_eq!(export.background.to_srgb_u8(), [255, 255, 255, 255]);
        assert_eq!(cfg.export_path, PathBuf::from("drawing.png"));
    }
}
