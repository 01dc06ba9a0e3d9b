//! Axis score: how many of the four channel values fall inside a biome's ranges.

use std::fmt;

/// Number of matching axes, `0..=4`, read as a fraction in quarter steps.
///
/// Stored as a count so comparisons are exact and the score can never be
/// negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AxisScore(u8);

impl AxisScore {
    pub const ZERO: AxisScore = AxisScore(0);
    /// All four axes match.
    pub const PERFECT: AxisScore = AxisScore(4);
    /// Minimum score for a cell to be assigned a biome (two of four axes).
    pub const THRESHOLD: AxisScore = AxisScore(2);

    /// Score from a count of matching axes. Counts above 4 saturate.
    pub const fn from_matches(matches: u8) -> Self {
        if matches > 4 { Self(4) } else { Self(matches) }
    }

    pub const fn matches(self) -> u8 {
        self.0
    }

    /// Score as a fraction: one of `0.0, 0.25, 0.5, 0.75, 1.0`.
    pub fn fraction(self) -> f64 {
        f64::from(self.0) / 4.0
    }

    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Returns `true` if the score is at least [`AxisScore::THRESHOLD`].
    pub fn meets_threshold(self) -> bool {
        self >= Self::THRESHOLD
    }
}

impl fmt::Display for AxisScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.fraction())
    }
}
