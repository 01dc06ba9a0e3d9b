//! Resource distribution over a classified grid.

use std::collections::BTreeMap;

use crate::ClassifiedGrid;

/// Cell count and share of one resource type.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResourceShare {
    pub count: usize,
    /// `count / matched_cells * 100`, or `0.0` when no cell matched.
    pub percentage: f64,
}

/// Per-resource-type statistics for one grid.
///
/// Every resource type in the grid's catalog is present, including types with
/// no cells. Percentages are relative to matched cells only, so over a grid
/// with at least one match they sum to 100.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceStats {
    shares: BTreeMap<String, ResourceShare>,
    total_cells: usize,
    matched_cells: usize,
}

impl ResourceStats {
    pub fn get(&self, resource_type: &str) -> Option<&ResourceShare> {
        self.shares.get(resource_type)
    }

    /// Shares ordered by resource type name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceShare)> + '_ {
        self.shares.iter().map(|(name, share)| (name.as_str(), share))
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.shares.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    pub fn matched_cells(&self) -> usize {
        self.matched_cells
    }

    pub fn unmatched_cells(&self) -> usize {
        self.total_cells - self.matched_cells
    }
}

/// Computes [`ResourceStats`] from a grid.
pub struct ResourceAggregator;

impl ResourceAggregator {
    pub fn aggregate(grid: &ClassifiedGrid) -> ResourceStats {
        let catalog = grid.catalog();
        let mut shares: BTreeMap<String, ResourceShare> = catalog
            .resource_types()
            .into_iter()
            .map(|name| (name.to_owned(), ResourceShare::default()))
            .collect();

        let mut matched_cells = 0;
        for id in grid.cells().iter().filter_map(|cell| cell.biome) {
            matched_cells += 1;
            let resource_type = catalog.get(id).resource_type();
            if let Some(share) = shares.get_mut(resource_type) {
                share.count += 1;
            }
        }

        if matched_cells > 0 {
            for share in shares.values_mut() {
                share.percentage = share.count as f64 / matched_cells as f64 * 100.0;
            }
        }

        ResourceStats {
            shares,
            total_cells: grid.cell_count(),
            matched_cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use verdant_biome::{AxisScore, Biome, BiomeCatalog, BiomeId, BiomeRanges, Resource, Rgb};
    use verdant_noise::ChannelSample;

    use crate::Cell;

    fn catalog() -> Arc<BiomeCatalog> {
        let biome = |name: &str, resource: &str| {
            Biome::new(
                name,
                BiomeRanges::FULL,
                Resource::new(resource, "any"),
                Rgb::new(0, 0, 0),
            )
            .unwrap()
        };
        Arc::new(
            BiomeCatalog::new(vec![
                biome("forest", "wood"),
                biome("grove", "wood"),
                biome("quarry", "stone"),
                biome("crystal cave", "gems"),
            ])
            .unwrap(),
        )
    }

    fn grid(ids: &[Option<u16>]) -> ClassifiedGrid {
        let cells = ids
            .iter()
            .map(|id| Cell {
                biome: id.map(BiomeId),
                score: if id.is_some() {
                    AxisScore::PERFECT
                } else {
                    AxisScore::ZERO
                },
                sample: ChannelSample::uniform(0.5),
            })
            .collect();
        ClassifiedGrid::from_cells(ids.len(), 1, cells, catalog())
    }

    #[test]
    fn test_counts_and_percentages() {
        let stats = ResourceAggregator::aggregate(&grid(&[
            Some(0),
            Some(1),
            Some(2),
            Some(0),
            None,
        ]));
        assert_eq!(stats.total_cells(), 5);
        assert_eq!(stats.matched_cells(), 4);
        assert_eq!(stats.unmatched_cells(), 1);

        let wood = stats.get("wood").unwrap();
        assert_eq!(wood.count, 3);
        assert!((wood.percentage - 75.0).abs() < 1e-9);
        let stone = stats.get("stone").unwrap();
        assert_eq!(stone.count, 1);
        assert!((stone.percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_unused_resource_types_are_zero_filled() {
        let stats = ResourceAggregator::aggregate(&grid(&[Some(0), Some(2)]));
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.get("gems"), Some(&ResourceShare::default()));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let stats = ResourceAggregator::aggregate(&grid(&[Some(0), Some(2), Some(3), None]));
        let total: f64 = stats.iter().map(|(_, share)| share.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_matches_reports_zero_percent() {
        let stats = ResourceAggregator::aggregate(&grid(&[None, None, None]));
        assert_eq!(stats.matched_cells(), 0);
        assert_eq!(stats.len(), 3);
        for (_, share) in stats.iter() {
            assert_eq!(share.count, 0);
            assert_eq!(share.percentage, 0.0);
        }
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let stats = ResourceAggregator::aggregate(&grid(&[Some(0)]));
        let names: Vec<_> = stats.resource_types().collect();
        assert_eq!(names, ["gems", "stone", "wood"]);
    }
}
