//! Application constants and configuration

pub const APP_NAME: &str = "Sunwatch";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the reprocessed SOHO image archive
pub const SOHO_BASE_URL: &str = "https://soho.nascom.nasa.gov/data/REPROCESSING/Completed/";
pub const SOHO_RESOLUTION: u32 = 1024;
pub const DEFAULT_INSTRUMENT: &str = "hmiigr";
pub const DEFAULT_CADENCE_MINUTES: i64 = 90;

// Network
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const FETCH_TIMEOUT_SECS: u64 = 30;

pub const PANEL_TITLE: &str = "Panel de control";
