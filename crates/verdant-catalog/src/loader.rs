//! Catalog file loading.

use std::path::Path;

use tracing::{debug, info};
use verdant_biome::BiomeCatalog;

use crate::{BiomeRecord, CatalogError};

/// Load and validate a catalog from a JSON file.
///
/// # Errors
///
/// See [`parse_catalog`]; additionally returns [`CatalogError::Io`] if the
/// file cannot be read.
pub fn load_catalog(path: &Path) -> Result<BiomeCatalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents)?;
    info!(
        biomes = catalog.len(),
        path = %path.display(),
        "loaded biome catalog"
    );
    Ok(catalog)
}

/// Parse and validate a catalog from JSON text.
///
/// Records keep their file order, which becomes the classification tie-break
/// order. Unknown fields in a record are ignored.
///
/// # Errors
///
/// - [`CatalogError::Json`] if the text is not an array of records.
/// - [`CatalogError::Empty`] if the array is empty.
/// - [`CatalogError::InvalidRecord`] for the first record that fails validation.
/// - [`CatalogError::Catalog`] if two records share a name.
pub fn parse_catalog(json: &str) -> Result<BiomeCatalog, CatalogError> {
    let records: Vec<BiomeRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut biomes = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let name = record.name.clone();
        let biome = record
            .into_biome()
            .map_err(|source| CatalogError::InvalidRecord {
                index,
                name,
                source,
            })?;
        debug!(index, biome = biome.name(), "validated biome record");
        biomes.push(biome);
    }

    Ok(BiomeCatalog::new(biomes)?)
}

/// Serialize a catalog back to pretty JSON in the file format.
pub fn to_json(catalog: &BiomeCatalog) -> Result<String, CatalogError> {
    let records: Vec<BiomeRecord> = catalog.biomes().iter().map(BiomeRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_biome::BiomeError;

    const TWO_BIOMES: &str = r#"[
        {
            "name": "Ember Wastes",
            "height_min": 0.0, "height_max": 0.5,
            "humidity_min": 0.0, "humidity_max": 0.2,
            "temperature_min": 0.7, "temperature_max": 1.0,
            "mystical_min": 0.0, "mystical_max": 1.0,
            "resource_type": "mineral", "resource_variant": "obsidian",
            "color": [120, 30, 20]
        },
        {
            "name": "Moonlit Glade",
            "height_min": 0.2, "height_max": 0.6,
            "humidity_min": 0.4, "humidity_max": 0.9,
            "temperature_min": 0.2, "temperature_max": 0.6,
            "mystical_min": 0.7, "mystical_max": 1.0,
            "resource_type": "herb", "resource_variant": "moonpetal",
            "color": [90, 110, 200],
            "notes": "ignored"
        }
    ]"#;

    #[test]
    fn test_parse_keeps_file_order() {
        let catalog = parse_catalog(TWO_BIOMES).unwrap();
        let names: Vec<&str> = catalog.biomes().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Ember Wastes", "Moonlit Glade"]);
    }

    #[test]
    fn test_empty_array_rejected() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(parse_catalog("{not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"[{ "name": "Half", "height_min": 0.0 }]"#;
        assert!(matches!(parse_catalog(json), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_invalid_record_reports_index_and_name() {
        let json = TWO_BIOMES.replace("[90, 110, 200]", "[90, 110, 300]");
        match parse_catalog(&json) {
            Err(CatalogError::InvalidRecord { index, name, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "Moonlit Glade");
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let json = TWO_BIOMES.replace("Moonlit Glade", "Ember Wastes");
        assert!(matches!(
            parse_catalog(&json),
            Err(CatalogError::Catalog(BiomeError::DuplicateName(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biomes.json");
        std::fs::write(&path, TWO_BIOMES).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_by_name("Moonlit Glade").map(|id| id.0), Some(1));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        match load_catalog(&path) {
            Err(CatalogError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_to_json_parses_back() {
        let catalog = parse_catalog(TWO_BIOMES).unwrap();
        let json = to_json(&catalog).unwrap();
        let reparsed = parse_catalog(&json).unwrap();
        assert_eq!(catalog.biomes(), reparsed.biomes());
    }
}
