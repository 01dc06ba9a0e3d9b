//! Grid classification: assigns a biome to every cell of a noise field set,
//! summarizes resources, and runs full regenerations in the foreground or on
//! a background worker.

mod cancel;
mod classifier;
mod error;
mod filter;
mod grid;
mod pipeline;
mod resources;
mod worker;

pub use cancel::CancelToken;
pub use classifier::GridClassifier;
pub use error::GridError;
pub use filter::ResourceFilter;
pub use grid::{Cell, ClassifiedGrid};
pub use pipeline::{Generation, GenerationRequest, regenerate};
pub use resources::{ResourceAggregator, ResourceShare, ResourceStats};
pub use worker::{RegenerationResult, RegenerationWorker};
