//! Callsign and Band Lookup Tests
//!
//! Tests for callsign parsing and frequency-to-band classification.
//! Run with: cargo test -p dx-dashboard-core --test lookup_tests

use dx_dashboard_core::{
    band_from_frequency, extract_prefix, format_frequency, is_valid_callsign, strip_ssid, Band,
};

// =============================================================================
// Callsign Tests
// =============================================================================

#[test]
fn test_valid_callsigns() {
    for call in ["W1AW", "JA1ABC", "G4ABC", "DL1XYZ", "VE3ABC", "9A1A"] {
        assert!(is_valid_callsign(call), "{} should be valid", call);
    }
}

#[test]
fn test_malformed_callsigns() {
    for call in ["1234", "", "ABCDEFGHIJK", "W1AW-10", "W 1AW", "WAW"] {
        assert!(!is_valid_callsign(call), "{:?} should be invalid", call);
    }
}

#[test]
fn test_validation_is_case_sensitive() {
    assert!(!is_valid_callsign("ja1abc"));
    assert!(is_valid_callsign("JA1ABC"));
}

#[test]
fn test_prefix() {
    assert_eq!(extract_prefix("JA1ABC"), "JA1");
    assert_eq!(extract_prefix("NOPREFIX"), "");
}

#[test]
fn test_strip_ssid() {
    assert_eq!(strip_ssid("W1AW-10"), "W1AW");
    assert_eq!(strip_ssid("W1AW/P"), "W1AW");
    assert_eq!(strip_ssid("W1AW"), "W1AW");
}

#[test]
fn test_stripped_spotter_validates() {
    let spotter = strip_ssid("DL1ABC-2");
    assert!(is_valid_callsign(spotter));
    assert_eq!(extract_prefix(spotter), "DL1");
}

// =============================================================================
// Band Tests
// =============================================================================

#[test]
fn test_band_from_frequency() {
    assert_eq!(band_from_frequency(14_200.0), "20m");
    assert_eq!(band_from_frequency(14_000.0), "20m");
    assert_eq!(band_from_frequency(14_350.0), "20m");
    assert_eq!(band_from_frequency(999_999.0), "other");
}

#[test]
fn test_common_dx_frequencies() {
    assert_eq!(band_from_frequency(1_830.0), "160m");
    assert_eq!(band_from_frequency(3_573.0), "80m");
    assert_eq!(band_from_frequency(5_357.0), "60m");
    assert_eq!(band_from_frequency(7_074.0), "40m");
    assert_eq!(band_from_frequency(10_136.0), "30m");
    assert_eq!(band_from_frequency(18_100.0), "17m");
    assert_eq!(band_from_frequency(21_074.0), "15m");
    assert_eq!(band_from_frequency(24_915.0), "12m");
    assert_eq!(band_from_frequency(28_074.0), "10m");
    assert_eq!(band_from_frequency(50_313.0), "6m");
    assert_eq!(band_from_frequency(144_174.0), "2m");
    assert_eq!(band_from_frequency(432_100.0), "70cm");
}

#[test]
fn test_gaps_between_bands() {
    assert_eq!(band_from_frequency(2_500.0), "other");
    assert_eq!(band_from_frequency(11_000.0), "other");
    assert_eq!(band_from_frequency(27_555.0), "other");
}

#[test]
fn test_band_table_size() {
    assert_eq!(Band::ALL.len(), 13);
    assert_eq!(Band::ALL[0], Band::M160);
    assert_eq!(Band::ALL[12], Band::Cm70);
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_format_frequency() {
    assert_eq!(format_frequency(14_200.0), "14.2 MHz");
    assert_eq!(format_frequency(500.0), "500.0 kHz");
    assert_eq!(format_frequency(144_174.0), "144.2 MHz");
}

#[test]
fn test_format_frequency_halves_round_up() {
    assert_eq!(format_frequency(14_250.0), "14.3 MHz");
    assert_eq!(format_frequency(7_250.0), "7.3 MHz");
    assert_eq!(format_frequency(21_250.0), "21.3 MHz");
    assert_eq!(format_frequency(14_750.0), "14.8 MHz");
    assert_eq!(format_frequency(500.25), "500.3 kHz");
}
