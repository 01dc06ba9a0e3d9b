//! Biome catalog loading from JSON.
//!
//! Reads a JSON array of flat biome records, validates every record, and
//! produces a [`BiomeCatalog`](verdant_biome::BiomeCatalog) in file order.

mod error;
mod loader;
mod record;

pub use error::{CatalogError, RecordError};
pub use loader::{load_catalog, parse_catalog, to_json};
pub use record::BiomeRecord;
