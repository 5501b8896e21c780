//! Rendering of encoded symbols
//!
//! Every renderer maps one module to a square cell, honours the caller's
//! foreground/background pair and surrounds the grid with a light quiet zone.

/// Raster output through the `image` crate
pub mod raster;
/// Inline SVG markup
pub mod svg;
/// Terminal text output
pub mod text;

pub use raster::{save_png, to_image};
pub use svg::to_svg;
pub use text::to_text;

use image::Rgb;

use crate::config;
use crate::error::RenderError;

/// Colour presets matching the page theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark modules on white
    #[default]
    Light,
    /// Light modules on a near-black page
    Dark,
}

impl Theme {
    /// Foreground (module) colour
    pub fn foreground(&self) -> Rgb<u8> {
        match self {
            Theme::Light => Rgb([0x33, 0x33, 0x33]),
            Theme::Dark => Rgb([0xE5, 0xE5, 0xE5]),
        }
    }

    /// Background colour
    pub fn background(&self) -> Rgb<u8> {
        match self {
            Theme::Light => Rgb([0xFF, 0xFF, 0xFF]),
            Theme::Dark => Rgb([0x11, 0x11, 0x11]),
        }
    }
}

/// Layout and colours shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels (or SVG user units) per module
    pub module_px: u32,
    /// Light margin in modules
    pub quiet_zone: u32,
    /// Dark module colour
    pub foreground: Rgb<u8>,
    /// Light module and margin colour
    pub background: Rgb<u8>,
}

impl RenderOptions {
    /// Options for a theme, using the configured sizes
    pub fn themed(theme: Theme) -> Self {
        Self {
            module_px: config::module_px(),
            quiet_zone: config::quiet_zone(),
            foreground: theme.foreground(),
            background: theme.background(),
        }
    }

    /// Copy with `module_px` in 1..=64 and `quiet_zone` at most 32
    pub fn clamped(&self) -> Self {
        Self {
            module_px: self.module_px.clamp(1, config::MAX_MODULE_PX),
            quiet_zone: self.quiet_zone.min(config::MAX_QUIET_ZONE),
            ..*self
        }
    }

    /// Total side length in pixels for a symbol of `size` modules
    pub fn canvas_px(&self, size: usize) -> u32 {
        let options = self.clamped();
        let modules = u32::try_from(size)
            .unwrap_or(u32::MAX)
            .saturating_add(2 * options.quiet_zone);
        modules.saturating_mul(options.module_px)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::themed(Theme::default())
    }
}

/// Parse `#rgb` or `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(value.to_string());
    let hex = value.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                let v = channel(&hex[i..i + 1])?;
                *slot = v * 17;
            }
            Ok(Rgb(out))
        }
        6 => Ok(Rgb([
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ])),
        _ => Err(invalid()),
    }
}

/// `#rrggbb` form of a colour
pub fn hex_color(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}
