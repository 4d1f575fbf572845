//! Default thresholds and reference values for facial color screening
//!
//! Every constant here is only a default: the classifier reads its values
//! from [`crate::config::ThresholdConfig`], which starts from these.
//! Hue values are degrees on a 0-360 scale, saturation and value are
//! fractions in 0-1.

/// Numeric guard used when dividing by channel sums or maxima
pub const STATS_EPSILON: f64 = 1e-6;

/// Full hue circle in degrees
pub const HUE_CIRCLE_DEGREES: f32 = 360.0;

/// Yellow band: jaundice
pub mod jaundice {
    pub const HUE_START: f32 = 40.0;
    pub const HUE_END: f32 = 65.0;
    pub const MIN_SATURATION: f32 = 0.15;
    /// Brightness floor that excludes shadowed or underexposed photos
    pub const MIN_VALUE: f32 = 0.35;
}

/// Blue band: cyanosis
pub mod cyanosis {
    pub const HUE_START: f32 = 180.0;
    pub const HUE_END: f32 = 250.0;
    pub const MIN_SATURATION: f32 = 0.15;
}

/// Pale, bright skin: anemia
pub mod anemia {
    pub const MAX_SATURATION: f32 = 0.15;
    /// Rules out merely dark photos, which are also desaturated
    pub const MIN_VALUE: f32 = 0.60;
}

/// Red band: inflammation / allergy. The band wraps through 0 degrees.
pub mod inflammation {
    pub const HUE_START: f32 = 340.0;
    pub const HUE_END: f32 = 10.0;
    pub const MIN_REDNESS_RATIO: f32 = 0.85;
}

/// Dull, dark, low-chroma skin: fatigue / stress
pub mod fatigue {
    pub const MIN_DARKNESS_INDEX: f32 = 0.60;
    pub const MAX_SATURATION: f32 = 0.35;
}

/// Broad envelope a healthy, well-lit face falls into
pub mod normal {
    pub const MIN_VALUE: f32 = 0.30;
    pub const MAX_VALUE: f32 = 0.95;
    pub const MIN_SATURATION: f32 = 0.10;
    pub const MAX_SATURATION: f32 = 0.60;
}

/// Facial region layout as fractions of the frame, `(start, end)`
pub mod regions {
    pub const FOREHEAD_ROWS: (f32, f32) = (0.10, 0.30);
    pub const FOREHEAD_COLS: (f32, f32) = (0.30, 0.70);

    pub const CHEEKS_ROWS: (f32, f32) = (0.30, 0.60);
    pub const CHEEKS_COLS: (f32, f32) = (0.0, 1.0);

    pub const CHIN_ROWS: (f32, f32) = (0.60, 0.90);
    pub const CHIN_COLS: (f32, f32) = (0.30, 0.70);

    pub const UNDER_EYES_ROWS: (f32, f32) = (0.25, 0.40);
    pub const UNDER_EYES_COLS: (f32, f32) = (0.20, 0.80);
}

/// Health score bookkeeping
pub mod scoring {
    pub const FULL_SCORE: u8 = 100;

    pub const JAUNDICE_PENALTY: u8 = 30;
    pub const CYANOSIS_PENALTY: u8 = 35;
    pub const ANEMIA_PENALTY: u8 = 20;
    pub const INFLAMMATION_PENALTY: u8 = 15;
    pub const FATIGUE_PENALTY: u8 = 15;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_bands_within_circle() {
        for hue in [
            jaundice::HUE_START,
            jaundice::HUE_END,
            cyanosis::HUE_START,
            cyanosis::HUE_END,
            inflammation::HUE_START,
            inflammation::HUE_END,
        ] {
            assert!((0.0..=HUE_CIRCLE_DEGREES).contains(&hue));
        }
    }

    #[test]
    fn test_envelope_ordering() {
        assert!(normal::MIN_VALUE < normal::MAX_VALUE);
        assert!(normal::MIN_SATURATION < normal::MAX_SATURATION);
        // Anemia must be reachable before the brightness floor of jaundice cuts in
        assert!(anemia::MIN_VALUE > jaundice::MIN_VALUE);
    }

    #[test]
    fn test_region_fractions() {
        for (start, end) in [
            regions::FOREHEAD_ROWS,
            regions::FOREHEAD_COLS,
            regions::CHEEKS_ROWS,
            regions::CHEEKS_COLS,
            regions::CHIN_ROWS,
            regions::CHIN_COLS,
            regions::UNDER_EYES_ROWS,
            regions::UNDER_EYES_COLS,
        ] {
            assert!(start < end);
            assert!((0.0..=1.0).contains(&start));
            assert!((0.0..=1.0).contains(&end));
        }
    }
}
