//! Biome definition: environmental ranges, resource tag, and display color.

use rand::Rng;
use verdant_noise::{Channel, ChannelSample};

use crate::{AxisScore, BiomeError};

/// Closed interval `[min, max]` inside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    min: f64,
    max: f64,
}

impl AxisRange {
    /// The whole unit interval.
    pub const FULL: AxisRange = AxisRange { min: 0.0, max: 1.0 };

    /// Validate a range for `channel`. The channel is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::InvalidRange`] if a bound is outside `[0, 1]`,
    /// not finite, or `min > max`.
    pub fn new(channel: Channel, min: f64, max: f64) -> Result<Self, BiomeError> {
        let in_unit = |v: f64| (0.0..=1.0).contains(&v);
        if !in_unit(min) || !in_unit(max) || min > max {
            return Err(BiomeError::InvalidRange { channel, min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// The four channel ranges of a biome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiomeRanges {
    pub height: AxisRange,
    pub humidity: AxisRange,
    pub temperature: AxisRange,
    pub mystical: AxisRange,
}

impl BiomeRanges {
    /// Ranges covering `[0, 1]` on every channel.
    pub const FULL: BiomeRanges = BiomeRanges {
        height: AxisRange::FULL,
        humidity: AxisRange::FULL,
        temperature: AxisRange::FULL,
        mystical: AxisRange::FULL,
    };

    /// Validate `(min, max)` pairs given in [`Channel::ALL`] order.
    pub fn from_bounds(bounds: [(f64, f64); 4]) -> Result<Self, BiomeError> {
        let [height, humidity, temperature, mystical] = bounds;
        Ok(Self {
            height: AxisRange::new(Channel::Height, height.0, height.1)?,
            humidity: AxisRange::new(Channel::Humidity, humidity.0, humidity.1)?,
            temperature: AxisRange::new(Channel::Temperature, temperature.0, temperature.1)?,
            mystical: AxisRange::new(Channel::Mystical, mystical.0, mystical.1)?,
        })
    }

    pub fn get(&self, channel: Channel) -> &AxisRange {
        match channel {
            Channel::Height => &self.height,
            Channel::Humidity => &self.humidity,
            Channel::Temperature => &self.temperature,
            Channel::Mystical => &self.mystical,
        }
    }

    /// Copy of these ranges with `channel` replaced.
    pub fn with(mut self, channel: Channel, range: AxisRange) -> Self {
        match channel {
            Channel::Height => self.height = range,
            Channel::Humidity => self.humidity = range,
            Channel::Temperature => self.temperature = range,
            Channel::Mystical => self.mystical = range,
        }
        self
    }
}

/// Resource found in a biome.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resource {
    /// Resource category (e.g., "wood", "ore"). Used for aggregation and filtering.
    pub resource_type: String,
    /// Specific variant within the category (e.g., "oak", "mithril").
    pub variant: String,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            variant: variant.into(),
        }
    }
}

/// Display color. Each component is in `[0, 255]` by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An immutable biome definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Biome {
    name: String,
    ranges: BiomeRanges,
    resource: Resource,
    color: Rgb,
}

impl Biome {
    /// Build a biome.
    ///
    /// # Errors
    ///
    /// Returns [`BiomeError::EmptyField`] if the name, resource type, or
    /// resource variant is blank.
    pub fn new(
        name: impl Into<String>,
        ranges: BiomeRanges,
        resource: Resource,
        color: Rgb,
    ) -> Result<Self, BiomeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BiomeError::EmptyField("name"));
        }
        if resource.resource_type.trim().is_empty() {
            return Err(BiomeError::EmptyField("resource_type"));
        }
        if resource.variant.trim().is_empty() {
            return Err(BiomeError::EmptyField("resource_variant"));
        }
        Ok(Self {
            name,
            ranges,
            resource,
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ranges(&self) -> &BiomeRanges {
        &self.ranges
    }

    pub fn range(&self, channel: Channel) -> &AxisRange {
        self.ranges.get(channel)
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn resource_type(&self) -> &str {
        &self.resource.resource_type
    }

    pub fn resource_variant(&self) -> &str {
        &self.resource.variant
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Count the channels of `sample` that fall inside this biome's ranges.
    pub fn axis_score(&self, sample: &ChannelSample) -> AxisScore {
        let matches = Channel::ALL
            .iter()
            .filter(|&&channel| self.range(channel).contains(sample.get(channel)))
            .count();
        AxisScore::from_matches(matches as u8)
    }

    /// Returns `true` if every channel of `sample` is inside its range.
    pub fn matches_all(&self, sample: &ChannelSample) -> bool {
        self.axis_score(sample).is_perfect()
    }

    /// Draw a sample uniformly inside this biome's ranges.
    pub fn sample_properties<R: Rng + ?Sized>(&self, rng: &mut R) -> ChannelSample {
        let mut draw = |range: &AxisRange| rng.random_range(range.min..=range.max);
        ChannelSample {
            height: draw(&self.ranges.height),
            humidity: draw(&self.ranges.humidity),
            temperature: draw(&self.ranges.temperature),
            mystical: draw(&self.ranges.mystical),
        }
    }
}
