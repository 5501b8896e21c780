//! Helpers shared by the `qrtool` binary

use crate::models::QrSymbol;
use std::fs;
use std::path::{Path, PathBuf};

/// Read one payload per line, skipping blank lines and `#` comments
pub fn read_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<String>, std::io::Error> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Summary statistics for an encoded symbol
#[derive(Debug, Clone, Copy)]
pub struct SymbolStats {
    /// Side length in modules
    pub size: usize,
    /// Count of dark modules
    pub dark_modules: usize,
    /// Total modules.
    pub total_modules: usize,
    /// Ratio of dark modules to total.
    pub dark_ratio: f32,
}

/// Compute dark-module statistics for a symbol
pub fn symbol_stats(symbol: &QrSymbol) -> SymbolStats {
    let size = symbol.size();
    let total_modules = size * size;
    let dark_modules = symbol.modules.count_ones();
    let dark_ratio = if total_modules > 0 {
        dark_modules as f32 / total_modules as f32
    } else {
        0.0
    };
    SymbolStats {
        size,
        dark_modules,
        total_modules,
        dark_ratio,
    }
}

/// File name for the `index`-th batch payload: `0003-example-com.svg`
pub fn batch_output_path(out_dir: &Path, index: usize, text: &str, extension: &str) -> PathBuf {
    let stripped = text
        .trim_start_matches("https://")
        .trim_start_matches("http://");
    let mut slug = String::with_capacity(32);
    for c in stripped.chars() {
        if slug.len() >= 32 {
            break;
        }
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let name = if slug.is_empty() {
        format!("{index:04}.{extension}")
    } else {
        format!("{index:04}-{slug}.{extension}")
    };
    out_dir.join(name)
}

/// Shorten a URL for display under the symbol, as the contact page does
pub fn display_url(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/');
    if trimmed.chars().count() > 40 {
        let head: String = trimmed.chars().take(37).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    }
}
