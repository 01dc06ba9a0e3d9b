//! Biome data model: validated definitions, axis scoring, and the ordered catalog.
//!
//! A [`Biome`] is immutable once built. A [`BiomeCatalog`] keeps biomes in the
//! order they were supplied; that order is the tie-break priority used when
//! two biomes score equally for a cell.

mod catalog;
mod def;
mod error;
mod score;

pub use catalog::{BiomeCatalog, BiomeId};
pub use def::{AxisRange, Biome, BiomeRanges, Resource, Rgb};
pub use error::BiomeError;
pub use score::AxisScore;
