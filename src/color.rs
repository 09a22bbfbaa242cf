//! Agent colors and the primary-biased sampler that produces them.

use rand::Rng;
use rand_distr::StandardNormal;

/// Mean of the dominant channel distribution.
const STRONG_MEAN: f64 = 200.0;
/// Deviation of the dominant channel distribution.
const STRONG_DEVIATION: f64 = 50.0;
/// Deviation of the two muted channels (centered at zero).
const MUTED_DEVIATION: f64 = 150.0;

/// A 24-bit RGB color occupying one canvas cell.
///
/// Pure white is special: it marks a cell nobody has claimed yet, so it is
/// reserved and never issued as an agent color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Color {
    /// White color (255, 255, 255), the unclaimed-cell sentinel.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };
    /// Black color (0, 0, 0).
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Red color (255, 0, 0).
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };
    /// Green color (0, 255, 0).
    pub const GREEN: Self = Self { r: 0, g: 255, b: 0 };
    /// Blue color (0, 0, 255).
    pub const BLUE: Self = Self { r: 0, g: 0, b: 255 };

    /// Create a new color from RGB components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a random color biased toward one of the three primaries.
    ///
    /// One of red, green or blue is chosen uniformly as the dominant channel;
    /// that channel is drawn from Normal(200, 50) and the other two from
    /// Normal(0, 150), each clamped to the 8-bit range. Draws are not
    /// guaranteed distinct or non-white; issue-once guarantees belong to
    /// [`UniqueAllocator`](crate::allocator::UniqueAllocator).
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let strong = channel(rng, STRONG_MEAN, STRONG_DEVIATION);
        let muted_a = channel(rng, 0.0, MUTED_DEVIATION);
        let muted_b = channel(rng, 0.0, MUTED_DEVIATION);
        match rng.gen_range(0..3u8) {
            0 => Self::new(strong, muted_a, muted_b),
            1 => Self::new(muted_a, strong, muted_b),
            _ => Self::new(muted_a, muted_b, strong),
        }
    }
}

/// One channel draw: truncated normal, quantized to 8 bits.
fn channel<R: Rng + ?Sized>(rng: &mut R, mean: f64, deviation: f64) -> u8 {
    let z: f64 = rng.sample(StandardNormal);
    (mean + deviation * z).clamp(0.0, 255.0) as u8
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
