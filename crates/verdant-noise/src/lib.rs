//! Deterministic fractal noise fields for the four environmental channels.
//!
//! A [`NoiseField`] is computed eagerly over a fixed grid and is a pure lookup
//! table afterwards. A [`NoiseFieldSet`] bundles one field per [`Channel`], each
//! shaped by its own preset and seeded independently from a master seed.

mod channel;
mod error;
mod field;
mod seed;
mod set;

pub use channel::{Channel, ChannelSample};
pub use error::NoiseError;
pub use field::{NoiseField, NoiseShape, normalize};
pub use seed::{ChannelSeeds, derive_channel_seeds, fresh_master_seed};
pub use set::NoiseFieldSet;
