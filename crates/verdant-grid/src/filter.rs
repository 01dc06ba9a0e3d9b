//! Resource-type visibility toggles.

use std::collections::BTreeMap;

use crate::{ClassifiedGrid, ResourceStats};

/// Which resource types a consumer currently shows.
///
/// Built from [`ResourceStats`] with every type visible. Unknown resource types
/// are never visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    visible: BTreeMap<String, bool>,
}

impl ResourceFilter {
    pub fn from_stats(stats: &ResourceStats) -> Self {
        Self {
            visible: stats
                .resource_types()
                .map(|name| (name.to_owned(), true))
                .collect(),
        }
    }

    /// Flip the visibility of `resource_type`. Returns the new state, or
    /// `None` if the type is unknown.
    pub fn toggle(&mut self, resource_type: &str) -> Option<bool> {
        let visible = self.visible.get_mut(resource_type)?;
        *visible = !*visible;
        Some(*visible)
    }

    /// Returns `false` if the type is unknown.
    pub fn set_visible(&mut self, resource_type: &str, visible: bool) -> bool {
        match self.visible.get_mut(resource_type) {
            Some(state) => {
                *state = visible;
                true
            }
            None => false,
        }
    }

    pub fn is_visible(&self, resource_type: &str) -> bool {
        self.visible.get(resource_type).copied().unwrap_or(false)
    }

    pub fn visible_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.visible
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(name, _)| name.as_str())
    }

    /// Whether the cell at `(x, y)` should be drawn. Unmatched and
    /// out-of-bounds cells never are.
    pub fn is_cell_visible(&self, grid: &ClassifiedGrid, x: usize, y: usize) -> bool {
        grid.biome_at(x, y)
            .is_some_and(|biome| self.is_visible(biome.resource_type()))
    }
}
