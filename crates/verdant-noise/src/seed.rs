//! Deterministic per-channel seed derivation from a single master seed.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Channel;

/// The master seed of a generation and the four channel seeds derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChannelSeeds {
    pub master: u64,
    pub height: u64,
    pub humidity: u64,
    pub temperature: u64,
    pub mystical: u64,
}

impl ChannelSeeds {
    /// Seed used for the field of `channel`.
    pub fn get(&self, channel: Channel) -> u64 {
        match channel {
            Channel::Height => self.height,
            Channel::Humidity => self.humidity,
            Channel::Temperature => self.temperature,
            Channel::Mystical => self.mystical,
        }
    }
}

/// Derive the four channel seeds from `master`.
///
/// A `ChaCha8Rng` seeded with `master` yields one `u64` per channel in
/// [`Channel::ALL`] order, so the result is identical on every platform.
pub fn derive_channel_seeds(master: u64) -> ChannelSeeds {
    let mut rng = ChaCha8Rng::seed_from_u64(master);
    ChannelSeeds {
        master,
        height: rng.next_u64(),
        humidity: rng.next_u64(),
        temperature: rng.next_u64(),
        mystical: rng.next_u64(),
    }
}

/// Draw a new master seed from the thread-local RNG.
pub fn fresh_master_seed() -> u64 {
    rand::random()
}
