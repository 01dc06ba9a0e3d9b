//! The four channel fields of one generation.

use tracing::debug;

use crate::{
    Channel, ChannelSample, ChannelSeeds, NoiseError, NoiseField, NoiseShape,
    derive_channel_seeds, fresh_master_seed,
};

/// One [`NoiseField`] per [`Channel`], all sharing the same dimensions.
///
/// Each field uses its channel's [`NoiseShape::preset`] and its own seed; no
/// state is shared between channels.
#[derive(Clone, Debug)]
pub struct NoiseFieldSet {
    fields: [NoiseField; 4],
    seeds: ChannelSeeds,
}

impl NoiseFieldSet {
    /// Build all four fields.
    ///
    /// With `Some(master)` the channel seeds are derived from `master` and the
    /// set is reproducible. With `None` a fresh master seed is drawn; it is
    /// still recorded in [`seeds`](Self::seeds) so the result can be repeated.
    ///
    /// # Errors
    ///
    /// Propagates configuration errors from [`NoiseField::new`].
    pub fn new(
        width: usize,
        height: usize,
        scale: f64,
        seed: Option<u64>,
    ) -> Result<Self, NoiseError> {
        let master = seed.unwrap_or_else(fresh_master_seed);
        let seeds = derive_channel_seeds(master);

        let build = |channel: Channel| {
            NoiseField::new(
                width,
                height,
                scale,
                NoiseShape::preset(channel),
                seeds.get(channel),
            )
        };
        let fields = [
            build(Channel::Height)?,
            build(Channel::Humidity)?,
            build(Channel::Temperature)?,
            build(Channel::Mystical)?,
        ];

        debug!(width, height, scale, master, "built noise field set");
        Ok(Self { fields, seeds })
    }

    /// Sample all four channels at `(x, y)`.
    pub fn sample(&self, x: usize, y: usize) -> Result<ChannelSample, NoiseError> {
        Ok(ChannelSample {
            height: self.field(Channel::Height).get(x, y)?,
            humidity: self.field(Channel::Humidity).get(x, y)?,
            temperature: self.field(Channel::Temperature).get(x, y)?,
            mystical: self.field(Channel::Mystical).get(x, y)?,
        })
    }

    pub fn field(&self, channel: Channel) -> &NoiseField {
        &self.fields[channel.index()]
    }

    pub fn seeds(&self) -> &ChannelSeeds {
        &self.seeds
    }

    pub fn width(&self) -> usize {
        self.fields[0].width()
    }

    pub fn height(&self) -> usize {
        self.fields[0].height()
    }

    pub fn scale(&self) -> f64 {
        self.fields[0].scale()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_reads_each_channel_field() {
        let set = NoiseFieldSet::new(16, 12, 20.0, Some(5)).unwrap();
        let sample = set.sample(3, 7).unwrap();
        for channel in Channel::ALL {
            assert_eq!(
                sample.get(channel),
                set.field(channel).get(3, 7).unwrap(),
                "{channel} mismatch"
            );
        }
    }

    #[test]
    fn test_fields_share_dimensions_and_use_presets() {
        let set = NoiseFieldSet::new(10, 6, 15.0, Some(1)).unwrap();
        for channel in Channel::ALL {
            let field = set.field(channel);
            assert_eq!((field.width(), field.height()), (10, 6));
            assert_eq!(*field.shape(), NoiseShape::preset(channel));
            assert_eq!(field.seed(), set.seeds().get(channel));
        }
    }

    #[test]
    fn test_explicit_seed_reproducible() {
        let a = NoiseFieldSet::new(20, 20, 20.0, Some(2024)).unwrap();
        let b = NoiseFieldSet::new(20, 20, 20.0, Some(2024)).unwrap();
        for channel in Channel::ALL {
            assert_eq!(a.field(channel).values(), b.field(channel).values());
        }
    }

    #[test]
    fn test_random_seed_is_recorded_and_replayable() {
        let a = NoiseFieldSet::new(12, 12, 20.0, None).unwrap();
        let b = NoiseFieldSet::new(12, 12, 20.0, Some(a.seeds().master)).unwrap();
        assert_eq!(a.seeds(), b.seeds());
        assert_eq!(
            a.field(Channel::Humidity).values(),
            b.field(Channel::Humidity).values()
        );
    }

    #[test]
    fn test_resized_set_keeps_overlapping_values() {
        let small = NoiseFieldSet::new(8, 6, 20.0, Some(77)).unwrap();
        let large = NoiseFieldSet::new(16, 12, 20.0, Some(77)).unwrap();
        for y in 0..6 {
            for x in 0..8 {
                assert_eq!(small.sample(x, y).unwrap(), large.sample(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let set = NoiseFieldSet::new(4, 4, 20.0, Some(0)).unwrap();
        assert!(matches!(
            set.sample(4, 0),
            Err(NoiseError::OutOfBounds { x: 4, y: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_configuration_propagates() {
        assert!(matches!(
            NoiseFieldSet::new(0, 4, 20.0, Some(0)),
            Err(NoiseError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            NoiseFieldSet::new(4, 4, -1.0, Some(0)),
            Err(NoiseError::InvalidScale(_))
        ));
    }
}
