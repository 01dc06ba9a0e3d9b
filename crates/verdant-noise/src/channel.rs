//! Environmental channels and the four-value sample taken per grid cell.

use std::fmt;
use std::str::FromStr;

use crate::NoiseError;

/// One of the four environmental axes sampled for every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Terrain elevation.
    Height,
    /// Ambient moisture.
    Humidity,
    /// Ambient warmth.
    Temperature,
    /// Arcane saturation.
    Mystical,
}

impl Channel {
    /// All channels in canonical order. Seed derivation follows this order.
    pub const ALL: [Channel; 4] = [
        Channel::Height,
        Channel::Humidity,
        Channel::Temperature,
        Channel::Mystical,
    ];

    /// Position of this channel in [`Channel::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Channel::Height => 0,
            Channel::Humidity => 1,
            Channel::Temperature => 2,
            Channel::Mystical => 3,
        }
    }

    /// Lowercase name, as used in catalog files and log output.
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Height => "height",
            Channel::Humidity => "humidity",
            Channel::Temperature => "temperature",
            Channel::Mystical => "mystical",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Channel {
    type Err = NoiseError;

    /// Parses a lowercase channel name, ignoring surrounding whitespace and case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Channel::ALL
            .into_iter()
            .find(|channel| channel.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| NoiseError::UnknownChannel(s.to_owned()))
    }
}

/// The four raw values sampled at one cell, each in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelSample {
    pub height: f64,
    pub humidity: f64,
    pub temperature: f64,
    pub mystical: f64,
}

impl ChannelSample {
    pub const fn new(height: f64, humidity: f64, temperature: f64, mystical: f64) -> Self {
        Self {
            height,
            humidity,
            temperature,
            mystical,
        }
    }

    /// A sample with the same value on every channel.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the value recorded for `channel`.
    #[inline]
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Height => self.height,
            Channel::Humidity => self.humidity,
            Channel::Temperature => self.temperature,
            Channel::Mystical => self.mystical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_channels_in_index_order() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i, "{channel} should sit at index {i}");
        }
    }

    #[test]
    fn test_sample_get_matches_fields() {
        let sample = ChannelSample::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(sample.get(Channel::Height), 0.1);
        assert_eq!(sample.get(Channel::Humidity), 0.2);
        assert_eq!(sample.get(Channel::Temperature), 0.3);
        assert_eq!(sample.get(Channel::Mystical), 0.4);
    }

    #[test]
    fn test_channel_display_uses_lowercase_name() {
        assert_eq!(Channel::Temperature.to_string(), "temperature");
        assert_eq!(format!("{}", Channel::Mystical), "mystical");
    }

    #[test]
    fn test_channel_parses_from_name() {
        for channel in Channel::ALL {
            assert_eq!(channel.name().parse::<Channel>(), Ok(channel));
        }
        assert_eq!(" Height ".parse::<Channel>(), Ok(Channel::Height));
    }

    #[test]
    fn test_unknown_channel_rejected() {
        let err = "altitude".parse::<Channel>().unwrap_err();
        assert_eq!(err, NoiseError::UnknownChannel("altitude".to_owned()));
        assert!(err.is_configuration());
        assert!(err.to_string().contains("altitude"));
    }
}
