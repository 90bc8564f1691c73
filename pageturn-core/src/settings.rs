//! Reader display settings

/// Text scale preference with fixed bounds and damped pinch response
///
/// The scale multiplies the base font sizes of the rendering layer. Pinch
/// magnification is applied sub-linearly so zooming is not overly sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderSettings {
    pub text_scale: f64,
}

impl ReaderSettings {
    pub const MIN_TEXT_SCALE: f64 = 0.8;
    pub const MAX_TEXT_SCALE: f64 = 1.8;

    /// Exponent applied to a raw magnification factor before use
    pub const MAGNIFICATION_DAMPING: f64 = 0.65;

    pub fn new() -> Self {
        Self { text_scale: 1.0 }
    }

    /// Clamp a candidate scale into the supported range
    pub fn clamped_text_scale(&self, value: f64) -> f64 {
        value.clamp(Self::MIN_TEXT_SCALE, Self::MAX_TEXT_SCALE)
    }

    /// Fold a finished magnification gesture into the persistent scale
    pub fn apply_magnification(&mut self, magnification: f64) {
        let damped = magnification.powf(Self::MAGNIFICATION_DAMPING);
        self.text_scale = self.clamped_text_scale(self.text_scale * damped);
    }
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_text_scale_clamps_to_min_max() {
        let settings = ReaderSettings::new();

        assert_eq!(
            settings.clamped_text_scale(-10.0),
            ReaderSettings::MIN_TEXT_SCALE
        );
        assert_eq!(
            settings.clamped_text_scale(0.0),
            ReaderSettings::MIN_TEXT_SCALE
        );
        assert_eq!(settings.clamped_text_scale(1.0), 1.0);
        assert_eq!(
            settings.clamped_text_scale(10.0),
            ReaderSettings::MAX_TEXT_SCALE
        );
    }

    #[test]
    fn test_damping_makes_pinch_sub_linear() {
        let magnification: f64 = 2.0;
        let damped = magnification.powf(ReaderSettings::MAGNIFICATION_DAMPING);

        assert!(damped < magnification);
        assert!(damped > 1.0);
    }

    #[test]
    fn test_apply_magnification_stays_in_bounds() {
        let mut settings = ReaderSettings::new();
        for _ in 0..10 {
            settings.apply_magnification(3.0);
        }
        assert_eq!(settings.text_scale, ReaderSettings::MAX_TEXT_SCALE);

        for _ in 0..10 {
            settings.apply_magnification(0.1);
        }
        assert_eq!(settings.text_scale, ReaderSettings::MIN_TEXT_SCALE);
    }
}
