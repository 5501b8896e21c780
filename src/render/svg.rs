use super::{RenderOptions, hex_color};
use crate::models::QrSymbol;

/// Render a symbol as standalone SVG markup.
///
/// One background rect covers the canvas; each dark module becomes a
/// `module_px` square offset by the quiet zone.
pub fn to_svg(symbol: &QrSymbol, options: &RenderOptions) -> String {
    let options = options.clamped();
    let size = symbol.size();
    let cell = options.module_px as usize;
    let margin = options.quiet_zone as usize;
    let canvas = options.canvas_px(size);

    let mut svg = String::with_capacity(128 + symbol.modules.count_ones() * 48);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {canvas} {canvas}" "#
    ));
    svg.push_str(&format!(
        r#"width="{canvas}" height="{canvas}" shape-rendering="crispEdges">"#
    ));
    svg.push_str(&format!(
        r#"<rect width="{canvas}" height="{canvas}" fill="{}"/>"#,
        hex_color(options.background)
    ));

    let fg = hex_color(options.foreground);
    for y in 0..size {
        for x in 0..size {
            if symbol.is_dark(x, y) {
                let px = (x + margin) * cell;
                let py = (y + margin) * cell;
                svg.push_str(&format!(
                    r#"<rect x="{px}" y="{py}" width="{cell}" height="{cell}" fill="{fg}"/>"#
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}
