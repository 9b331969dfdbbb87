//! Fill colors for chart datasets.

use rand::rngs::ThreadRng;
use rand::Rng;

// Every dataset gets a random drift around the same indigo base, so charts
// stay in one family without repeating exactly.
const BASE_RGB: [i16; 3] = [99, 100, 255];
const CHANNEL_JITTER: i16 = 42;

/// Hands out one `rgba(...)` fill per dataset. Unseeded: colors are meant to
/// vary between renders, and callers must not rely on getting the same color
/// for the same dataset twice.
#[derive(Debug, Default)]
pub struct ColorGenerator {
    rng: ThreadRng,
}

impl ColorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next fill color: each channel drifts independently within
    /// ±`CHANNEL_JITTER` of the base, clamped to the valid range, at half
    /// opacity.
    pub fn next_color(&mut self) -> String {
        let [r, g, b] = BASE_RGB.map(|base| {
            let offset = self.rng.gen_range(-CHANNEL_JITTER..=CHANNEL_JITTER);
            (base + offset).clamp(0, 255)
        });
        format!("rgba({r}, {g}, {b}, 0.5)")
    }
}
