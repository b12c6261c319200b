//! Engine configuration.
//!
//! The scoring formulas are fixed policy and are not configurable. What can
//! be tuned is how hard the engine looks ahead, how long it remembers
//! recent targets, and whether real combat is capped.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::rng::GameRng;

/// Optional hard limits applied after every real combat mutation.
///
/// `None` leaves that count uncapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatCaps {
    pub max_population: Option<u32>,
    pub max_military: Option<u32>,
    pub max_aliens: Option<u32>,
}

impl CombatCaps {
    /// Preset caps sized for the standard frontier map.
    pub const STANDARD: CombatCaps = CombatCaps {
        max_population: Some(10_000),
        max_military: Some(2_000),
        max_aliens: Some(1_000),
    };
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shallowest search depth (default: 2).
    pub min_depth: u32,

    /// Deepest search depth (default: 4).
    pub max_depth: u32,

    /// How many recent attacker targets are remembered (default: 3).
    pub memory_capacity: usize,

    /// Alpha-beta pruning (default: on).
    /// Turning it off gives an exhaustive search with the same result.
    pub pruning: bool,

    /// Hard caps on real combat results (default: none).
    pub caps: Option<CombatCaps>,

    /// Seed for [`EngineConfig::rng`].
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_depth: 2,
            max_depth: 4,
            memory_capacity: 3,
            pruning: true,
            caps: None,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom depth range.
    pub fn with_depth_range(mut self, min: u32, max: u32) -> Self {
        self.min_depth = min;
        self.max_depth = max;
        self
    }

    /// Create a new config with a custom memory capacity.
    pub fn with_memory_capacity(mut self, capacity: usize) -> Self {
        self.memory_capacity = capacity;
        self
    }

    /// Create a new config with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Create a new config with combat caps.
    pub fn with_caps(mut self, caps: CombatCaps) -> Self {
        self.caps = Some(caps);
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.min_depth > self.max_depth {
            return Err(ConfigError::DepthRange {
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        if self.memory_capacity == 0 {
            return Err(ConfigError::ZeroMemory);
        }
        Ok(())
    }

    /// Search depth for a collection of `station_count` stations:
    /// half the count, clamped to `min_depth..=max_depth`.
    #[must_use]
    pub fn search_depth(&self, station_count: usize) -> u32 {
        let half = u32::try_from(station_count / 2).unwrap_or(u32::MAX);
        half.clamp(self.min_depth, self.max_depth.max(self.min_depth))
    }

    /// A fresh RNG seeded from this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}
