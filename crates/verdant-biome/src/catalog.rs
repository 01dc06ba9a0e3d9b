//! Biome catalog: ordered, immutable list of biomes with name-based lookup.

use hashbrown::HashMap;

use crate::{Biome, BiomeError};

/// Index of a biome in its [`BiomeCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BiomeId(pub u16);

/// Ordered biome definitions. Order is significant: earlier biomes win ties
/// during classification.
///
/// The catalog is immutable after construction. It may be empty; consumers
/// that need at least one biome reject empty catalogs themselves.
#[derive(Clone, Debug, Default)]
pub struct BiomeCatalog {
    biomes: Vec<Biome>,
    name_to_id: HashMap<String, BiomeId>,
}

impl BiomeCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::DuplicateName`] if two biomes share a name, or
    /// [`BiomeError::TooManyBiomes`] if the list cannot be indexed by [`BiomeId`].
    pub fn new(biomes: Vec<Biome>) -> Result<Self, BiomeError> {
        if biomes.len() > usize::from(u16::MAX) + 1 {
            return Err(BiomeError::TooManyBiomes(biomes.len()));
        }

        let mut name_to_id = HashMap::with_capacity(biomes.len());
        for (index, biome) in biomes.iter().enumerate() {
            if name_to_id
                .insert(biome.name().to_owned(), BiomeId(index as u16))
                .is_some()
            {
                return Err(BiomeError::DuplicateName(biome.name().to_owned()));
            }
        }

        Ok(Self { biomes, name_to_id })
    }

    /// Returns the biome for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalog.
    pub fn get(&self, id: BiomeId) -> &Biome {
        &self.biomes[usize::from(id.0)]
    }

    /// Looks up a biome ID by name.
    pub fn lookup_by_name(&self, name: &str) -> Option<BiomeId> {
        self.name_to_id.get(name).copied()
    }

    /// Biomes with their IDs, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (BiomeId, &Biome)> + '_ {
        self.biomes
            .iter()
            .enumerate()
            .map(|(index, biome)| (BiomeId(index as u16), biome))
    }

    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// Distinct resource types, in order of first appearance.
    pub fn resource_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for biome in &self.biomes {
            if !types.contains(&biome.resource_type()) {
                types.push(biome.resource_type());
            }
        }
        types
    }

    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BiomeRanges, Resource, Rgb};

    fn biome(name: &str, resource_type: &str) -> Biome {
        Biome::new(
            name,
            BiomeRanges::FULL,
            Resource::new(resource_type, "common"),
            Rgb::new(10, 20, 30),
        )
        .unwrap()
    }

    #[test]
    fn test_ids_follow_catalog_order() {
        let catalog =
            BiomeCatalog::new(vec![biome("tundra", "ice"), biome("desert", "sand")]).unwrap();
        let ids: Vec<(BiomeId, &str)> = catalog.iter().map(|(id, b)| (id, b.name())).collect();
        assert_eq!(ids, vec![(BiomeId(0), "tundra"), (BiomeId(1), "desert")]);
        assert_eq!(catalog.get(BiomeId(1)).name(), "desert");
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog =
            BiomeCatalog::new(vec![biome("tundra", "ice"), biome("desert", "sand")]).unwrap();
        assert_eq!(catalog.lookup_by_name("desert"), Some(BiomeId(1)));
        assert_eq!(catalog.lookup_by_name("jungle"), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = BiomeCatalog::new(vec![biome("desert", "sand"), biome("desert", "glass")]);
        assert_eq!(result.unwrap_err(), BiomeError::DuplicateName("desert".into()));
    }

    #[test]
    fn test_empty_catalog_is_representable() {
        let catalog = BiomeCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.resource_types().is_empty());
    }

    #[test]
    fn test_resource_types_distinct_in_first_seen_order() {
        let catalog = BiomeCatalog::new(vec![
            biome("swamp", "herbs"),
            biome("forest", "wood"),
            biome("meadow", "herbs"),
        ])
        .unwrap();
        assert_eq!(catalog.resource_types(), vec!["herbs", "wood"]);
    }
}
