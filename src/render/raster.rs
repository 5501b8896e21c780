use std::path::Path;

use image::{ImageBuffer, RgbImage};

use super::RenderOptions;
use crate::error::RenderError;
use crate::models::QrSymbol;

/// Rasterize a symbol into an RGB image
pub fn to_image(symbol: &QrSymbol, options: &RenderOptions) -> RgbImage {
    let options = options.clamped();
    let cell = options.module_px;
    let margin = options.quiet_zone;
    let canvas = options.canvas_px(symbol.size());

    ImageBuffer::from_fn(canvas, canvas, |px, py| {
        let mx = (px / cell).checked_sub(margin);
        let my = (py / cell).checked_sub(margin);
        match (mx, my) {
            (Some(x), Some(y)) if symbol.is_dark(x as usize, y as usize) => options.foreground,
            _ => options.background,
        }
    })
}

/// Rasterize and write a PNG file
pub fn save_png<P: AsRef<Path>>(
    symbol: &QrSymbol,
    options: &RenderOptions,
    path: P,
) -> Result<(), RenderError> {
    to_image(symbol, options).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
