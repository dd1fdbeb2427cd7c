//! Amateur radio bands and frequency display.
//!
//! Frequencies are carried as kHz in `f64`, the unit DX cluster spots use.

use core::fmt;

use crate::config::OTHER_BAND_LABEL;

/// Amateur radio band allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// 160 meters (1.8 - 2.0 MHz)
    M160,
    /// 80 meters (3.5 - 4.0 MHz)
    M80,
    /// 60 meters (5.25 - 5.45 MHz)
    M60,
    /// 40 meters (7.0 - 7.3 MHz)
    M40,
    /// 30 meters (10.1 - 10.15 MHz)
    M30,
    /// 20 meters (14.0 - 14.35 MHz)
    M20,
    /// 17 meters (18.068 - 18.168 MHz)
    M17,
    /// 15 meters (21.0 - 21.45 MHz)
    M15,
    /// 12 meters (24.89 - 24.99 MHz)
    M12,
    /// 10 meters (28.0 - 29.7 MHz)
    M10,
    /// 6 meters (50 - 54 MHz)
    M6,
    /// 2 meters (144 - 148 MHz)
    M2,
    /// 70 centimeters (420 - 450 MHz)
    Cm70,
}

impl Band {
    /// Every band in lookup order, lowest frequency first.
    pub const ALL: [Band; 13] = [
        Band::M160,
        Band::M80,
        Band::M60,
        Band::M40,
        Band::M30,
        Band::M20,
        Band::M17,
        Band::M15,
        Band::M12,
        Band::M10,
        Band::M6,
        Band::M2,
        Band::Cm70,
    ];

    /// Find the band containing a frequency. Both band edges are inclusive.
    #[must_use]
    pub fn from_frequency_khz(freq_khz: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.contains_khz(freq_khz))
    }

    /// Look a band up by its label (`"20m"`, `"70cm"`, ...).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.label() == label)
    }

    /// Check whether a frequency falls inside this band.
    #[must_use]
    pub fn contains_khz(self, freq_khz: f64) -> bool {
        freq_khz >= self.low_khz() && freq_khz <= self.high_khz()
    }

    /// Get the band start frequency in kHz
    #[must_use]
    pub const fn low_khz(self) -> f64 {
        match self {
            Self::M160 => 1_800.0,
            Self::M80 => 3_500.0,
            Self::M60 => 5_250.0,
            Self::M40 => 7_000.0,
            Self::M30 => 10_100.0,
            Self::M20 => 14_000.0,
            Self::M17 => 18_068.0,
            Self::M15 => 21_000.0,
            Self::M12 => 24_890.0,
            Self::M10 => 28_000.0,
            Self::M6 => 50_000.0,
            Self::M2 => 144_000.0,
            Self::Cm70 => 420_000.0,
        }
    }

    /// Get the band end frequency in kHz
    #[must_use]
    pub const fn high_khz(self) -> f64 {
        match self {
            Self::M160 => 2_000.0,
            Self::M80 => 4_000.0,
            Self::M60 => 5_450.0,
            Self::M40 => 7_300.0,
            Self::M30 => 10_150.0,
            Self::M20 => 14_350.0,
            Self::M17 => 18_168.0,
            Self::M15 => 21_450.0,
            Self::M12 => 24_990.0,
            Self::M10 => 29_700.0,
            Self::M6 => 54_000.0,
            Self::M2 => 148_000.0,
            Self::Cm70 => 450_000.0,
        }
    }

    /// Short band label as shown on the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::M160 => "160m",
            Self::M80 => "80m",
            Self::M60 => "60m",
            Self::M40 => "40m",
            Self::M30 => "30m",
            Self::M20 => "20m",
            Self::M17 => "17m",
            Self::M15 => "15m",
            Self::M12 => "12m",
            Self::M10 => "10m",
            Self::M6 => "6m",
            Self::M2 => "2m",
            Self::Cm70 => "70cm",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band label for a frequency in kHz, or `"other"` outside every band.
#[must_use]
pub fn band_from_frequency(freq_khz: f64) -> &'static str {
    Band::from_frequency_khz(freq_khz).map_or(OTHER_BAND_LABEL, Band::label)
}

/// Format a kHz frequency for display with one decimal place.
///
/// `14200.0` becomes `"14.2 MHz"`, `500.0` becomes `"500.0 kHz"`.
#[must_use]
pub fn format_frequency(freq_khz: f64) -> String {
    if freq_khz >= 1_000.0 {
        format!("{} MHz", fixed_1(freq_khz / 1_000.0))
    } else {
        format!("{} kHz", fixed_1(freq_khz))
    }
}

/// One decimal place, exact halves rounded away from zero.
///
/// `{:.1}` sends exact ties to the even digit (`14.25` -> `14.2`); dashboard
/// frequencies like 14250 kHz must read `14.3`.
fn fixed_1(value: f64) -> String {
    // value * 10 ends in exactly .5 only when value * 4 is an odd integer
    let quarters = value * 4.0;
    if value.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (value.abs() * 10.0 + 0.5).floor();
        format!("{:.1}", (tenths / 10.0).copysign(value))
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_and_disjoint() {
        for pair in Band::ALL.windows(2) {
            assert!(pair[0].low_khz() < pair[0].high_khz());
            assert!(pair[0].high_khz() < pair[1].low_khz());
        }
    }

    #[test]
    fn test_band_edges_inclusive() {
        for band in Band::ALL {
            assert_eq!(Band::from_frequency_khz(band.low_khz()), Some(band));
            assert_eq!(Band::from_frequency_khz(band.high_khz()), Some(band));
        }
    }

    #[test]
    fn test_just_outside_band() {
        assert_eq!(Band::from_frequency_khz(13_999.9), None);
        assert_eq!(Band::from_frequency_khz(14_350.1), None);
    }

    #[test]
    fn test_other_label() {
        assert_eq!(band_from_frequency(999_999.0), "other");
        assert_eq!(band_from_frequency(0.0), "other");
        assert_eq!(band_from_frequency(f64::NAN), "other");
    }

    #[test]
    fn test_label_roundtrip() {
        for band in Band::ALL {
            assert_eq!(Band::from_label(band.label()), Some(band));
        }
        assert_eq!(Band::from_label("11m"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Band::Cm70.to_string(), "70cm");
    }

    #[test]
    fn test_format_frequency() {
        assert_eq!(format_frequency(14_200.0), "14.2 MHz");
        assert_eq!(format_frequency(1_000.0), "1.0 MHz");
        assert_eq!(format_frequency(500.0), "500.0 kHz");
        assert_eq!(format_frequency(999.94), "999.9 kHz");
    }

    #[test]
    fn test_fixed_1_ties_round_up() {
        assert_eq!(fixed_1(14.25), "14.3");
        assert_eq!(fixed_1(0.75), "0.8");
        assert_eq!(fixed_1(14.75), "14.8");
        assert_eq!(fixed_1(-0.25), "-0.3");
        assert_eq!(fixed_1(0.5), "0.5");
        assert_eq!(fixed_1(14.24), "14.2");
    }
}
