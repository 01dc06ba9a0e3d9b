//! Noise field error types.

/// Errors raised while building or sampling a noise field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoiseError {
    /// Width or height is zero, or the cell count does not fit in memory.
    #[error("invalid field dimensions {width}x{height}: both must be positive and the grid must fit in memory")]
    InvalidDimensions { width: usize, height: usize },

    /// Base scale is zero, negative, or not finite.
    #[error("invalid noise scale {0}: must be positive and finite")]
    InvalidScale(f64),

    /// A fractal shape parameter is out of its allowed range.
    #[error("invalid noise shape: {parameter} = {value}, expected {expected}")]
    InvalidShape {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Name that is not one of the four channels.
    #[error("unknown channel `{0}`: expected height, humidity, temperature or mystical")]
    UnknownChannel(String),

    /// Lookup outside `[0, width) x [0, height)`.
    #[error("sample ({x}, {y}) is outside the {width}x{height} field")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl NoiseError {
    /// Returns `true` for errors caused by bad construction parameters.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, NoiseError::OutOfBounds { .. })
    }
}
