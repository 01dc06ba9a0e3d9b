//! Catalog loading errors.

use std::path::PathBuf;

use verdant_biome::BiomeError;

/// Errors returned while loading a biome catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of biome records.
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// The file parsed but holds no biomes.
    #[error("catalog contains no biomes")]
    Empty,

    /// One record failed validation.
    #[error("invalid biome record #{index} ({name}): {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        #[source]
        source: RecordError,
    },

    /// Records were valid individually but not as a set (e.g., duplicate names).
    #[error("invalid catalog: {0}")]
    Catalog(#[from] BiomeError),
}

/// Why a single record was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// A color component is outside `[0, 255]`.
    #[error("color component {component} = {value} is outside 0..=255")]
    InvalidColor { component: &'static str, value: i64 },

    /// Range or text field validation failed.
    #[error(transparent)]
    Biome(#[from] BiomeError),
}
