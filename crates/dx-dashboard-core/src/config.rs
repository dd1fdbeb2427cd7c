//! Dashboard constants
//!
//! Storage keys, export defaults and notification tone parameters shared by the
//! core and the browser bindings.

/// Storage slot holding the serialized preference object
pub const PREFS_STORAGE_KEY: &str = "dxspider_dashboard_prefs";

/// Default filename offered for CSV downloads
pub const DEFAULT_EXPORT_FILENAME: &str = "dxspider_spots.csv";

/// Media type of exported spot lists
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Column headers of exported spot lists, in output order
pub const CSV_HEADERS: [&str; 6] = ["Time", "Frequency", "Callsign", "Spotter", "Comment", "Band"];

/// Label returned for frequencies outside every known band
pub const OTHER_BAND_LABEL: &str = "other";

/// Default beep pitch in Hz
pub const DEFAULT_BEEP_FREQUENCY_HZ: f32 = 800.0;

/// Default beep length in milliseconds
pub const DEFAULT_BEEP_DURATION_MS: f32 = 100.0;

/// New-spot chime pitch in Hz
pub const NEW_SPOT_FREQUENCY_HZ: f32 = 880.0;

/// New-spot chime length in milliseconds
pub const NEW_SPOT_DURATION_MS: f32 = 80.0;

/// Linear gain at the start of a beep
pub const BEEP_START_GAIN: f32 = 0.3;

/// Linear gain the exponential decay reaches at the end of a beep
pub const BEEP_END_GAIN: f32 = 0.01;
