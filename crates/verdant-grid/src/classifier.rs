//! Per-cell biome classification by axis-match scoring.

use std::sync::Arc;

use verdant_biome::{AxisScore, BiomeCatalog, BiomeId};
use verdant_noise::{ChannelSample, NoiseError, NoiseFieldSet};

use crate::{CancelToken, Cell, ClassifiedGrid, GridError};

/// Assigns catalog biomes to channel samples.
///
/// For every sample each biome is scored by how many of the four channels fall
/// inside its ranges. The highest score wins; ties go to the biome listed first.
/// A cell whose best score is below [`AxisScore::THRESHOLD`] stays unassigned.
#[derive(Clone, Debug)]
pub struct GridClassifier {
    catalog: Arc<BiomeCatalog>,
}

impl GridClassifier {
    /// # Errors
    ///
    /// Returns [`GridError::EmptyCatalog`] if the catalog has no biomes.
    pub fn new(catalog: Arc<BiomeCatalog>) -> Result<Self, GridError> {
        if catalog.is_empty() {
            return Err(GridError::EmptyCatalog);
        }
        Ok(Self { catalog })
    }

    pub fn catalog(&self) -> &Arc<BiomeCatalog> {
        &self.catalog
    }

    /// Best biome for one sample and its score.
    ///
    /// The biome is `None` when the best score is below the threshold; the
    /// score is reported either way.
    pub fn classify_sample(&self, sample: &ChannelSample) -> (Option<BiomeId>, AxisScore) {
        let mut best: Option<BiomeId> = None;
        let mut best_score = AxisScore::ZERO;

        for (id, biome) in self.catalog.iter() {
            let score = biome.axis_score(sample);
            if best.is_none() || score > best_score {
                best = Some(id);
                best_score = score;
                if score.is_perfect() {
                    break;
                }
            }
        }

        (best.filter(|_| best_score.meets_threshold()), best_score)
    }

    fn classify_cell(&self, sample: ChannelSample) -> Cell {
        let (biome, score) = self.classify_sample(&sample);
        Cell {
            biome,
            score,
            sample,
        }
    }

    /// Classify every cell of `fields`.
    pub fn classify(&self, fields: &NoiseFieldSet) -> Result<ClassifiedGrid, GridError> {
        self.classify_with_cancel(fields, &CancelToken::new())
    }

    /// Classify every cell of `fields`, checking `cancel` before each row.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Cancelled`] as soon as the token is observed set;
    /// no partial grid is produced.
    pub fn classify_with_cancel(
        &self,
        fields: &NoiseFieldSet,
        cancel: &CancelToken,
    ) -> Result<ClassifiedGrid, GridError> {
        let (width, height) = (fields.width(), fields.height());
        let len = width
            .checked_mul(height)
            .ok_or(NoiseError::InvalidDimensions { width, height })?;
        let mut cells = Vec::with_capacity(len);

        for y in 0..height {
            if cancel.is_cancelled() {
                return Err(GridError::Cancelled);
            }
            for x in 0..width {
                cells.push(self.classify_cell(fields.sample(x, y)?));
            }
        }

        Ok(ClassifiedGrid::from_cells(
            width,
            height,
            cells,
            Arc::clone(&self.catalog),
        ))
    }
}
