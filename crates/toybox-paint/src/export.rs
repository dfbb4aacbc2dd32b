//! Offscreen rasterisation of the canvas to a PNG file.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use toybox_engine::paint::Color;

use crate::brush::StrokePoint;

/// Size and look of the exported image.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub point_size: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot export a {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Paints `points` over the background, each as a `point_size` square whose
/// top-left corner is the point truncated to whole pixels. Squares are
/// clipped to the image.
pub fn rasterize(points: &[StrokePoint], config: &ExportConfig) -> RgbaImage {
    let background = Rgba(config.background.to_srgb_u8());
    let mut img = RgbaImage::from_pixel(config.width, config.height, background);
    let (w, h) = (i64::from(config.width), i64::from(config.height));
    let size = i64::from(config.point_size);

    for p in points {
        if !p.pos.is_finite() {
            continue;
        }
        let x0 = p.pos.x.floor() as i64;
        let y0 = p.pos.y.floor() as i64;
        let px = Rgba(p.color.to_srgb_u8());

        for y in y0.max(0)..(y0 + size).min(h) {
            for x in x0.max(0)..(x0 + size).min(w) {
                img.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    img
}

/// Rasterises `points` and writes them to `path` as PNG.
pub fn export_png(
    points: &[StrokePoint],
    config: &ExportConfig,
    path: &Path,
) -> Result<(), ExportError> {
    if config.width == 0 || config.height == 0 {
        return Err(ExportError::EmptyImage { width: config.width, height: config.height });
    }

    let img = rasterize(points, config);
    img.save_with_format(path, ImageFormat::Png).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
