//! DX Dashboard Core Library
//!
//! Platform-agnostic helpers for a DX spot dashboard. Everything here runs on
//! the host as plain Rust; browser integration lives in `dx-dashboard-wasm`.
//!
//! # Modules
//!
//! - [`callsign`] - Callsign validation, prefix extraction, SSID stripping
//! - [`band`] - Amateur band table and frequency formatting
//! - [`export`] - Spot records and CSV rendering
//! - [`prefs`] - Key-value store seam and persisted dashboard preferences
//! - [`tone`] - Notification beep description and sample rendering
//! - [`notifier`] - New-spot notifier over a pluggable audio backend
//! - [`config`] - Compile-time constants
//! - [`error`] - Error type

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod band;
pub mod callsign;
pub mod config;
pub mod error;
pub mod export;
pub mod notifier;
pub mod prefs;
pub mod tone;

// Re-export commonly used types
pub use band::{band_from_frequency, format_frequency, Band};
pub use callsign::{extract_prefix, is_valid_callsign, normalize_callsign, strip_ssid};
pub use error::{DashboardError, Result};
pub use export::{export_to_csv, write_csv, Spot};
pub use notifier::{AudioBackend, SpotNotifier, ToneOutput};
pub use prefs::{DashboardPreferences, FileStore, KeyValueStore, MemoryStore};
pub use tone::Beep;
