//! Grid classification and regeneration errors.

use verdant_noise::NoiseError;

/// Errors raised by classification or regeneration.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Classification needs at least one biome.
    #[error("biome catalog is empty: at least one biome is required to classify a grid")]
    EmptyCatalog,

    /// Noise field construction or sampling failed.
    #[error(transparent)]
    Noise(#[from] NoiseError),

    /// The regeneration observed its cancel flag and stopped.
    #[error("regeneration cancelled")]
    Cancelled,

    /// The background worker thread has exited.
    #[error("regeneration worker is no longer running")]
    WorkerDisconnected,

    /// The background worker thread could not be started.
    #[error("failed to spawn regeneration worker: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}

impl GridError {
    /// Returns `true` for errors caused by bad inputs rather than runtime events.
    pub fn is_configuration(&self) -> bool {
        match self {
            GridError::EmptyCatalog => true,
            GridError::Noise(err) => err.is_configuration(),
            _ => false,
        }
    }
}
