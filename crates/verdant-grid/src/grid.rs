//! The classified grid: one cell per noise-field coordinate.

use std::sync::Arc;

use verdant_biome::{AxisScore, Biome, BiomeCatalog, BiomeId};
use verdant_noise::ChannelSample;

/// Classification result for one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Assigned biome, or `None` when no biome reached the threshold score.
    pub biome: Option<BiomeId>,
    /// Best score found while scanning the catalog, kept for unmatched cells too.
    pub score: AxisScore,
    /// Raw channel values at this cell, for display only.
    pub sample: ChannelSample,
}

/// A complete, immutable `width x height` classification.
///
/// Grids are only produced whole; resizing means building a new one.
#[derive(Clone, Debug)]
pub struct ClassifiedGrid {
    width: usize,
    height: usize,
    /// Row-major, index `y * width + x`.
    cells: Vec<Cell>,
    catalog: Arc<BiomeCatalog>,
}

impl ClassifiedGrid {
    pub(crate) fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        catalog: Arc<BiomeCatalog>,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
            catalog,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Catalog the cell IDs refer to.
    pub fn catalog(&self) -> &Arc<BiomeCatalog> {
        &self.catalog
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Returns the biome assigned at `(x, y)`, if any.
    pub fn biome_at(&self, x: usize, y: usize) -> Option<&Biome> {
        self.cell(x, y)
            .and_then(|cell| cell.biome)
            .map(|id| self.catalog.get(id))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells with an assigned biome.
    pub fn matched_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.biome.is_some()).count()
    }
}
