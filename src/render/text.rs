use crate::models::QrSymbol;

const DARK: &str = "\u{2588}\u{2588}";
const LIGHT: &str = "  ";

/// Render a symbol for a terminal, two characters per module.
///
/// Dark modules print as full blocks; `invert` swaps the glyphs for
/// terminals with a dark background.
pub fn to_text(symbol: &QrSymbol, quiet_zone: usize, invert: bool) -> String {
    let (on, off) = if invert { (LIGHT, DARK) } else { (DARK, LIGHT) };
    let size = symbol.size();
    let width = size + 2 * quiet_zone;
    let mut out = String::with_capacity(width * width * 7);

    let blank_row = off.repeat(width);
    for _ in 0..quiet_zone {
        out.push_str(&blank_row);
        out.push('\n');
    }
    for row in symbol.to_rows() {
        out.push_str(&off.repeat(quiet_zone));
        for dark in row {
            out.push_str(if dark { on } else { off });
        }
        out.push_str(&off.repeat(quiet_zone));
        out.push('\n');
    }
    for _ in 0..quiet_zone {
        out.push_str(&blank_row);
        out.push('\n');
    }
    out
}
