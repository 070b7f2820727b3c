//! Structured HSL colors.

use rand::Rng;

/// A hue/saturation/lightness color.
///
/// Hue is in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, always wrapped into `[0, 360)`.
    pub hue: f32,
    /// Saturation in percent.
    pub saturation: f32,
    /// Lightness in percent.
    pub lightness: f32,
}

impl Hsl {
    /// Creates a color, wrapping the hue into `[0, 360)`.
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            lightness,
        }
    }

    /// Random hue with the given saturation and lightness.
    pub fn random(rng: &mut impl Rng, saturation: f32, lightness: f32) -> Self {
        Self::new(rng.random_range(0.0..360.0), saturation, lightness)
    }

    /// Returns a copy with the hue shifted by `delta` degrees.
    #[must_use]
    pub fn shifted(self, delta: f32) -> Self {
        Self::new(self.hue + delta, self.saturation, self.lightness)
    }

    /// Components normalized to `[0, 1]`, in the order hue, saturation, lightness.
    pub fn normalized(&self) -> (f32, f32, f32) {
        (self.hue / 360.0, self.saturation / 100.0, self.lightness / 100.0)
    }
}

fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
