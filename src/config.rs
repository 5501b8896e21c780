//! Environment-driven defaults, read once per process

use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Largest accepted pixels-per-module value
pub const MAX_MODULE_PX: u32 = 64;
/// Largest accepted quiet zone in modules
pub const MAX_QUIET_ZONE: u32 = 32;

static MODULE_PX: OnceLock<u32> = OnceLock::new();

/// Pixels per module for raster and vector output (`QR_MODULE_PX`, default 4)
pub fn module_px() -> u32 {
    *MODULE_PX.get_or_init(|| parse_env_u32("QR_MODULE_PX", 4).clamp(1, MAX_MODULE_PX))
}

static QUIET_ZONE: OnceLock<u32> = OnceLock::new();

/// Light margin around the symbol in modules (`QR_QUIET_ZONE`, default 4)
pub fn quiet_zone() -> u32 {
    *QUIET_ZONE.get_or_init(|| parse_env_u32("QR_QUIET_ZONE", 4).min(MAX_QUIET_ZONE))
}

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Verbose pipeline logging requested through `QR_DEBUG`
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}
