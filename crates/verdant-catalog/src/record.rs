//! Flat JSON record for one biome.

use serde::{Deserialize, Serialize};
use verdant_biome::{Biome, BiomeRanges, Resource, Rgb};

use crate::RecordError;

/// One biome as written in the catalog file.
///
/// ```json
/// {
///   "name": "Whispering Forest",
///   "height_min": 0.3, "height_max": 0.6,
///   "humidity_min": 0.5, "humidity_max": 1.0,
///   "temperature_min": 0.2, "temperature_max": 0.7,
///   "mystical_min": 0.0, "mystical_max": 0.4,
///   "resource_type": "wood", "resource_variant": "oak",
///   "color": [34, 139, 34]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiomeRecord {
    pub name: String,
    pub height_min: f64,
    pub height_max: f64,
    pub humidity_min: f64,
    pub humidity_max: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub mystical_min: f64,
    pub mystical_max: f64,
    pub resource_type: String,
    pub resource_variant: String,
    /// Kept wide so out-of-range components are reported instead of failing
    /// to deserialize.
    pub color: [i64; 3],
}

impl BiomeRecord {
    /// Validate the record and build a [`Biome`].
    pub fn into_biome(self) -> Result<Biome, RecordError> {
        let ranges = BiomeRanges::from_bounds([
            (self.height_min, self.height_max),
            (self.humidity_min, self.humidity_max),
            (self.temperature_min, self.temperature_max),
            (self.mystical_min, self.mystical_max),
        ])?;
        let [r, g, b] = self.color;
        let color = Rgb::new(component("r", r)?, component("g", g)?, component("b", b)?);
        let resource = Resource::new(self.resource_type, self.resource_variant);
        Ok(Biome::new(self.name, ranges, resource, color)?)
    }
}

impl From<&Biome> for BiomeRecord {
    fn from(biome: &Biome) -> Self {
        let ranges = biome.ranges();
        let color = biome.color();
        Self {
            name: biome.name().to_owned(),
            height_min: ranges.height.min(),
            height_max: ranges.height.max(),
            humidity_min: ranges.humidity.min(),
            humidity_max: ranges.humidity.max(),
            temperature_min: ranges.temperature.min(),
            temperature_max: ranges.temperature.max(),
            mystical_min: ranges.mystical.min(),
            mystical_max: ranges.mystical.max(),
            resource_type: biome.resource_type().to_owned(),
            resource_variant: biome.resource_variant().to_owned(),
            color: [color.r.into(), color.g.into(), color.b.into()],
        }
    }
}

fn component(name: &'static str, value: i64) -> Result<u8, RecordError> {
    u8::try_from(value).map_err(|_| RecordError::InvalidColor {
        component: name,
        value,
    })
}
