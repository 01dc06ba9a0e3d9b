//! One full regeneration: noise fields, classification, aggregation.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use verdant_biome::BiomeCatalog;
use verdant_noise::{ChannelSeeds, NoiseFieldSet};

use crate::{
    CancelToken, ClassifiedGrid, GridClassifier, GridError, ResourceAggregator, ResourceStats,
};

/// Parameters of one regeneration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationRequest {
    pub width: usize,
    pub height: usize,
    pub scale: f64,
    /// Master seed. `None` draws a fresh one per regeneration.
    pub seed: Option<u64>,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            scale: 20.0,
            seed: None,
        }
    }
}

impl GenerationRequest {
    pub fn new(width: usize, height: usize, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same request at new dimensions. The seed is kept.
    pub fn resized(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Same request with the seed cleared, so the next run draws a fresh one.
    pub fn reseeded(mut self) -> Self {
        self.seed = None;
        self
    }
}

/// A completed regeneration.
#[derive(Clone, Debug)]
pub struct Generation {
    pub request: GenerationRequest,
    /// Seeds actually used, including the drawn master when the request had none.
    pub seeds: ChannelSeeds,
    pub grid: ClassifiedGrid,
    pub stats: ResourceStats,
}

impl Generation {
    /// Request that rebuilds this generation's world at new dimensions.
    ///
    /// Pins the recorded master seed, so the overlapping region keeps its values.
    pub fn resize_request(&self, width: usize, height: usize) -> GenerationRequest {
        self.request
            .with_seed(self.seeds.master)
            .resized(width, height)
    }

    /// Matched cells as a percentage of all cells.
    pub fn matched_percentage(&self) -> f64 {
        let total = self.stats.total_cells();
        if total == 0 {
            return 0.0;
        }
        self.stats.matched_cells() as f64 / total as f64 * 100.0
    }
}

/// Run a full regeneration.
///
/// Either returns a complete [`Generation`] or an error; nothing partial is
/// ever produced.
///
/// # Errors
///
/// - [`GridError::EmptyCatalog`] if `catalog` has no biomes.
/// - [`GridError::Noise`] for invalid dimensions or scale.
/// - [`GridError::Cancelled`] if `cancel` is set before the grid is complete.
pub fn regenerate(
    request: &GenerationRequest,
    catalog: Arc<BiomeCatalog>,
    cancel: &CancelToken,
) -> Result<Generation, GridError> {
    let start = Instant::now();
    let classifier = GridClassifier::new(catalog)?;

    let fields = NoiseFieldSet::new(request.width, request.height, request.scale, request.seed)?;
    let seeds = *fields.seeds();
    debug!(master = seeds.master, "noise fields ready");
    if cancel.is_cancelled() {
        return Err(GridError::Cancelled);
    }

    let grid = classifier.classify_with_cancel(&fields, cancel)?;
    debug!(matched = grid.matched_count(), "grid classified");

    let stats = ResourceAggregator::aggregate(&grid);
    let generation = Generation {
        request: *request,
        seeds,
        grid,
        stats,
    };

    if generation.stats.matched_cells() == 0 {
        warn!(
            width = request.width,
            height = request.height,
            "no cell matched any biome"
        );
    }
    info!(
        width = request.width,
        height = request.height,
        seed = seeds.master,
        matched_pct = generation.matched_percentage(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "regeneration complete"
    );
    Ok(generation)
}
