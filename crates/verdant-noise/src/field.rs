//! Multi-octave fractal Brownian motion (fBm) noise field over a fixed grid.
//!
//! Composites octaves of Perlin noise, divides the sum by the total octave
//! amplitude so the raw value stays nominally in `[-1, 1]`, then maps it into
//! `[0, 1]` with [`normalize`]. The whole grid is computed at construction;
//! lookups afterwards are plain array reads.

use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Channel, NoiseError};

/// Exclusive upper bound for the per-seed sampling window offset.
const OFFSET_RANGE: f64 = 100_000.0;

/// Lattice period of `noise::Perlin`'s permutation table.
const PERLIN_PERIOD: f64 = 256.0;

/// Fractal shape of a noise field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseShape {
    /// Number of noise octaves to composite. Must be at least 1.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves, in `(0.0, 1.0]`.
    /// Higher values keep more high-frequency energy (sharper features).
    pub persistence: f64,
    /// Frequency multiplier between successive octaves. Must exceed 1.0.
    pub lacunarity: f64,
    /// Extra divisor applied on top of the field scale. Values above 1.0
    /// stretch the pattern, producing slower spatial variation.
    pub scale_factor: f64,
}

impl NoiseShape {
    /// Shape preset for a channel.
    ///
    /// | Channel     | octaves | persistence | scale_factor | character                  |
    /// |-------------|---------|-------------|--------------|----------------------------|
    /// | Height      | 2       | 0.8         | 1.0          | sharp peaks and valleys    |
    /// | Humidity    | 4       | 0.5         | 1.0          | medium patches             |
    /// | Temperature | 4       | 0.5         | 3.6          | slower horizontal drift    |
    /// | Mystical    | 6       | 0.3         | 9.0          | large smooth blend regions |
    pub const fn preset(channel: Channel) -> Self {
        match channel {
            Channel::Height => Self {
                octaves: 2,
                persistence: 0.8,
                lacunarity: 2.0,
                scale_factor: 1.0,
            },
            Channel::Humidity => Self {
                octaves: 4,
                persistence: 0.5,
                lacunarity: 2.0,
                scale_factor: 1.0,
            },
            Channel::Temperature => Self {
                octaves: 4,
                persistence: 0.5,
                lacunarity: 2.0,
                scale_factor: 3.6,
            },
            Channel::Mystical => Self {
                octaves: 6,
                persistence: 0.3,
                lacunarity: 2.0,
                scale_factor: 9.0,
            },
        }
    }

    /// Checks every parameter against its allowed range.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidShape {
                parameter: "octaves",
                value: 0.0,
                expected: "at least 1",
            });
        }
        if !(self.persistence > 0.0 && self.persistence <= 1.0) {
            return Err(NoiseError::InvalidShape {
                parameter: "persistence",
                value: self.persistence,
                expected: "a value in (0, 1]",
            });
        }
        if !(self.lacunarity > 1.0 && self.lacunarity.is_finite()) {
            return Err(NoiseError::InvalidShape {
                parameter: "lacunarity",
                value: self.lacunarity,
                expected: "a finite value greater than 1",
            });
        }
        if !(self.scale_factor > 0.0 && self.scale_factor.is_finite()) {
            return Err(NoiseError::InvalidShape {
                parameter: "scale_factor",
                value: self.scale_factor,
                expected: "a finite positive value",
            });
        }
        Ok(())
    }

    /// Sum of all octave amplitudes (geometric series in `persistence`).
    pub fn total_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.octaves {
            sum += amp;
            amp *= self.persistence;
        }
        sum
    }
}

/// Maps raw fBm output (nominally `[-1, 1]`) into `[0, 1]`.
///
/// Uses the contrast-spreading transform `(2v + 1) / 2`, clamped. Compared to
/// `(v + 1) / 2` it keeps the full amplitude of the raw signal, so the bulk of
/// the values spreads across the unit range and the tails saturate at the bounds.
#[inline]
pub fn normalize(raw: f64) -> f64 {
    ((2.0 * raw + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// A dense `width x height` grid of normalized fBm values.
///
/// The field is a pure function of `(x, y)` for its whole lifetime; there is no
/// way to reseed it other than building a new one.
#[derive(Clone, Debug)]
pub struct NoiseField {
    width: usize,
    height: usize,
    scale: f64,
    shape: NoiseShape,
    seed: u64,
    /// Row-major values, index `y * width + x`.
    values: Vec<f64>,
}

impl NoiseField {
    /// Builds a field with an explicit seed. Identical arguments always
    /// produce identical values.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a dimension is zero, `scale` is not a
    /// finite positive number, or `shape` fails [`NoiseShape::validate`].
    pub fn new(
        width: usize,
        height: usize,
        scale: f64,
        shape: NoiseShape,
        seed: u64,
    ) -> Result<Self, NoiseError> {
        if width == 0 || height == 0 {
            return Err(NoiseError::InvalidDimensions { width, height });
        }
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(NoiseError::InvalidScale(scale));
        }
        shape.validate()?;
        let len = cell_count(width, height)?;
        check_sample_extent(width.max(height), scale, &shape)?;

        let sampler = FbmSampler::new(seed, scale, shape);
        let mut values = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                values.push(normalize(sampler.sample(x as f64, y as f64)));
            }
        }

        Ok(Self {
            width,
            height,
            scale,
            shape,
            seed,
            values,
        })
    }

    /// Builds a field with a freshly drawn random seed.
    pub fn with_random_seed(
        width: usize,
        height: usize,
        scale: f64,
        shape: NoiseShape,
    ) -> Result<Self, NoiseError> {
        Self::new(width, height, scale, shape, rand::random())
    }

    /// Returns the normalized value at `(x, y)`, in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::OutOfBounds`] if `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<f64, NoiseError> {
        if x >= self.width || y >= self.height {
            return Err(NoiseError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.values[y * self.width + x])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> &NoiseShape {
        &self.shape
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// Number of values in a `width x height` field, if it can be allocated.
fn cell_count(width: usize, height: usize) -> Result<usize, NoiseError> {
    width
        .checked_mul(height)
        .filter(|&len| {
            len.checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(NoiseError::InvalidDimensions { width, height })
}

/// Rejects parameters whose highest-octave coordinates are not finite.
fn check_sample_extent(extent: usize, scale: f64, shape: &NoiseShape) -> Result<(), NoiseError> {
    let inv_period = 1.0 / (scale * shape.scale_factor);
    if !inv_period.is_finite() {
        return Err(NoiseError::InvalidScale(scale));
    }
    let top_octave = i32::try_from(shape.octaves - 1).unwrap_or(i32::MAX);
    let max_coord = (extent as f64 + OFFSET_RANGE) * inv_period * shape.lacunarity.powi(top_octave);
    if !max_coord.is_finite() {
        return Err(NoiseError::InvalidShape {
            parameter: "lacunarity",
            value: shape.lacunarity,
            expected: "a value whose highest octave keeps sample coordinates finite",
        });
    }
    Ok(())
}

/// Perlin noise repeats every 256 lattice units. Reducing coordinates into one
/// period keeps `floor` within `isize` without changing the sampled value.
#[inline]
fn wrap(coord: f64) -> f64 {
    coord.rem_euclid(PERLIN_PERIOD)
}

/// Seeded fBm evaluator used while filling a field.
struct FbmSampler {
    noise: Perlin,
    shape: NoiseShape,
    inv_period: f64,
    offset: [f64; 2],
    total_amplitude: f64,
}

impl FbmSampler {
    fn new(seed: u64, scale: f64, shape: NoiseShape) -> Self {
        // The seed also shifts the sampling window so fields never share an origin.
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let offset = [
            rng.random_range(0.0..OFFSET_RANGE),
            rng.random_range(0.0..OFFSET_RANGE),
        ];
        Self {
            noise: Perlin::new(seed as u32),
            shape,
            inv_period: 1.0 / (scale * shape.scale_factor),
            offset,
            total_amplitude: shape.total_amplitude(),
        }
    }

    /// Raw fBm at a grid coordinate, nominally in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64 {
        let px = (x + self.offset[0]) * self.inv_period;
        let py = (y + self.offset[1]) * self.inv_period;

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        for _ in 0..self.shape.octaves {
            total += self.noise.get([wrap(px * frequency), wrap(py * frequency)]) * amplitude;
            frequency *= self.shape.lacunarity;
            amplitude *= self.shape.persistence;
        }

        total / self.total_amplitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn field(channel: Channel, seed: u64) -> NoiseField {
        NoiseField::new(48, 32, 20.0, NoiseShape::preset(channel), seed).unwrap()
    }

    fn mean_neighbor_delta(field: &NoiseField) -> f64 {
        let mut sum = 0.0;
        let mut count = 0;
        for y in 0..field.height() {
            for x in 1..field.width() {
                sum += (field.get(x, y).unwrap() - field.get(x - 1, y).unwrap()).abs();
                count += 1;
            }
        }
        sum / count as f64
    }

    #[test]
    fn test_values_within_unit_range() {
        for channel in Channel::ALL {
            for seed in [0, 1, 42, 99_999, u64::MAX] {
                let f = field(channel, seed);
                for y in 0..f.height() {
                    for x in 0..f.width() {
                        let v = f.get(x, y).unwrap();
                        assert!(
                            (0.0..=1.0).contains(&v),
                            "{channel} seed {seed}: value {v} at ({x}, {y}) outside [0, 1]"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_get_is_pure() {
        let f = field(Channel::Humidity, 7);
        let first = f.get(13, 21).unwrap();
        for _ in 0..100 {
            assert_eq!(f.get(13, 21).unwrap(), first, "repeated lookup changed value");
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let a = field(Channel::Temperature, 1234);
        let b = field(Channel::Temperature, 1234);
        assert_eq!(a.values(), b.values(), "same seed must reproduce the field");
    }

    #[test]
    fn test_different_seeds_produce_different_values() {
        let a = field(Channel::Height, 1);
        let b = field(Channel::Height, 2);
        let diff: f64 = a
            .values()
            .iter()
            .zip(b.values())
            .map(|(x, y)| (x - y).abs())
            .sum();
        assert!(diff > EPSILON, "different seeds should differ, total diff {diff}");
    }

    #[test]
    fn test_out_of_bounds_lookup() {
        let f = field(Channel::Height, 3);
        assert_eq!(
            f.get(48, 0),
            Err(NoiseError::OutOfBounds {
                x: 48,
                y: 0,
                width: 48,
                height: 32
            })
        );
        assert!(f.get(0, 32).is_err());
        assert!(f.get(47, 31).is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let shape = NoiseShape::preset(Channel::Height);
        let err = NoiseField::new(0, 10, 20.0, shape, 0).unwrap_err();
        assert_eq!(err, NoiseError::InvalidDimensions { width: 0, height: 10 });
        assert!(err.is_configuration());
        assert!(NoiseField::new(10, 0, 20.0, shape, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        let shape = NoiseShape::preset(Channel::Height);
        for (width, height) in [(usize::MAX, 2), (usize::MAX / 4, 2)] {
            assert_eq!(
                NoiseField::new(width, height, 20.0, shape, 0).unwrap_err(),
                NoiseError::InvalidDimensions { width, height }
            );
        }
    }

    #[test]
    fn test_tiny_scale_stays_in_unit_range() {
        for scale in [1e-15, 1e-200] {
            let f = NoiseField::new(4, 4, scale, NoiseShape::preset(Channel::Height), 5).unwrap();
            assert!(f.values().iter().all(|v| (0.0..=1.0).contains(v)), "scale {scale}");
        }
    }

    #[test]
    fn test_subnormal_scale_rejected() {
        let result = NoiseField::new(4, 4, 1e-310, NoiseShape::preset(Channel::Height), 5);
        assert!(matches!(result, Err(NoiseError::InvalidScale(_))));
    }

    #[test]
    fn test_large_lacunarity_stays_in_unit_range() {
        let shape = NoiseShape {
            lacunarity: 5000.0,
            ..NoiseShape::preset(Channel::Mystical)
        };
        let f = NoiseField::new(6, 6, 20.0, shape, 9).unwrap();
        assert!(f.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_overflowing_lacunarity_rejected() {
        let shape = NoiseShape {
            lacunarity: 1e200,
            ..NoiseShape::preset(Channel::Humidity)
        };
        match NoiseField::new(4, 4, 20.0, shape, 0) {
            Err(NoiseError::InvalidShape { parameter, .. }) => assert_eq!(parameter, "lacunarity"),
            other => panic!("expected InvalidShape(lacunarity), got {other:?}"),
        }
    }

    #[test]
    fn test_wrap_keeps_fractional_position() {
        assert_eq!(wrap(3.25), 3.25);
        assert_eq!(wrap(256.0 * 7.0 + 1.5), 1.5);
        assert_eq!(wrap(-0.5), 255.5);
        let n = Perlin::new(3);
        assert_eq!(n.get([300.3, 12.7]), n.get([wrap(300.3), 12.7]));
    }

    #[test]
    fn test_non_positive_scale_rejected() {
        let shape = NoiseShape::preset(Channel::Humidity);
        for scale in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let result = NoiseField::new(4, 4, scale, shape, 0);
            assert!(
                matches!(result, Err(NoiseError::InvalidScale(_))),
                "scale {scale} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_shapes_rejected() {
        let base = NoiseShape::preset(Channel::Humidity);
        let cases = [
            ("octaves", NoiseShape { octaves: 0, ..base }),
            ("persistence", NoiseShape { persistence: 0.0, ..base }),
            ("persistence", NoiseShape { persistence: 1.5, ..base }),
            ("persistence", NoiseShape { persistence: -0.2, ..base }),
            ("lacunarity", NoiseShape { lacunarity: 1.0, ..base }),
            ("scale_factor", NoiseShape { scale_factor: 0.0, ..base }),
        ];
        for (expected, shape) in cases {
            match NoiseField::new(4, 4, 10.0, shape, 0) {
                Err(NoiseError::InvalidShape { parameter, .. }) => {
                    assert_eq!(parameter, expected)
                }
                other => panic!("expected InvalidShape({expected}), got {other:?}"),
            }
        }
    }

    #[test]
    fn test_persistence_of_one_is_allowed() {
        let shape = NoiseShape {
            persistence: 1.0,
            ..NoiseShape::preset(Channel::Height)
        };
        assert!(shape.validate().is_ok());
        assert!(NoiseField::new(4, 4, 10.0, shape, 5).is_ok());
    }

    #[test]
    fn test_presets_match_channel_table() {
        let height = NoiseShape::preset(Channel::Height);
        assert_eq!((height.octaves, height.persistence), (2, 0.8));
        let humidity = NoiseShape::preset(Channel::Humidity);
        assert_eq!((humidity.octaves, humidity.persistence), (4, 0.5));
        let temperature = NoiseShape::preset(Channel::Temperature);
        assert_eq!(temperature.scale_factor, 3.6);
        let mystical = NoiseShape::preset(Channel::Mystical);
        assert_eq!((mystical.octaves, mystical.persistence), (6, 0.3));
        assert_eq!(mystical.scale_factor, 9.0);
        for channel in Channel::ALL {
            assert_eq!(NoiseShape::preset(channel).lacunarity, 2.0);
            assert!(NoiseShape::preset(channel).validate().is_ok());
        }
    }

    #[test]
    fn test_total_amplitude_calculation() {
        let shape = NoiseShape {
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            scale_factor: 1.0,
        };
        assert!((shape.total_amplitude() - 1.875).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_spread_transform() {
        assert_eq!(normalize(0.0), 0.5);
        assert_eq!(normalize(-0.25), 0.25);
        assert_eq!(normalize(0.25), 0.75);
        assert_eq!(normalize(-1.0), 0.0, "low tail saturates at 0");
        assert_eq!(normalize(0.75), 1.0, "high tail saturates at 1");
    }

    #[test]
    fn test_mystical_smoother_than_height() {
        let height = field(Channel::Height, 11);
        let mystical = field(Channel::Mystical, 11);
        let rough = mean_neighbor_delta(&height);
        let smooth = mean_neighbor_delta(&mystical);
        assert!(
            smooth < rough,
            "mystical should vary more slowly than height: {smooth} vs {rough}"
        );
    }

    #[test]
    fn test_min_max_bounds_all_values() {
        let f = field(Channel::Humidity, 77);
        let (lo, hi) = f.min_max();
        assert!(lo <= hi);
        assert!(f.values().iter().all(|v| (lo..=hi).contains(v)));
    }

    #[test]
    fn test_random_seed_constructor_builds_valid_field() {
        let f = NoiseField::with_random_seed(8, 8, 20.0, NoiseShape::preset(Channel::Height))
            .unwrap();
        assert_eq!(f.values().len(), 64);
        assert!(f.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
