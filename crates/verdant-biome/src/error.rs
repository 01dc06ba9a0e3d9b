//! Biome validation errors.

use verdant_noise::Channel;

/// A biome record or catalog that violates the data model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BiomeError {
    /// A range bound lies outside `[0, 1]`, is not finite, or `min > max`.
    #[error("invalid {channel} range [{min}, {max}]: bounds must satisfy 0 <= min <= max <= 1")]
    InvalidRange { channel: Channel, min: f64, max: f64 },

    /// A required text field is empty or whitespace.
    #[error("biome field `{0}` must not be empty")]
    EmptyField(&'static str),

    /// Two biomes share a name.
    #[error("duplicate biome name: {0}")]
    DuplicateName(String),

    /// More biomes than a [`BiomeId`](crate::BiomeId) can address.
    #[error("catalog holds {0} biomes, more than the supported maximum")]
    TooManyBiomes(usize),
}
