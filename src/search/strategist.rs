//! Decision entry point.
//!
//! The `Strategist` picks a target for whichever side is about to act and
//! keeps the attacker's recent-target memory between turns. Callers own it
//! for the length of a session and call [`Strategist::decide`] once per turn.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{ConfigError, EngineConfig, Station, StationId};

use super::memory::AttackMemory;
use super::minimax::MinimaxSearch;
use super::stats::SearchStats;

/// Chooses targets and remembers what the attacker hit.
///
/// ```
/// use station_defense::scenario::Scenario;
/// use station_defense::search::Strategist;
///
/// let mut scenario = Scenario::frontier();
/// let mut strategist = Strategist::default();
///
/// // Aliens to move
/// let target = strategist.decide(scenario.stations_mut(), false);
/// assert!(target.is_some());
/// assert_eq!(strategist.memory().last(), target);
/// ```
#[derive(Clone, Debug)]
pub struct Strategist {
    config: EngineConfig,
    memory: AttackMemory,
    stats: SearchStats,
}

impl Default for Strategist {
    fn default() -> Self {
        Self::from_valid(EngineConfig::default())
    }
}

impl Strategist {
    /// Create a strategist, rejecting unusable configurations.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EngineConfig) -> Self {
        let memory = AttackMemory::with_capacity(config.memory_capacity);
        Self {
            config,
            memory,
            stats: SearchStats::default(),
        }
    }

    /// Pick the station the side about to act should target.
    ///
    /// The search depth scales with the number of stations. On the player's
    /// turn the search minimizes; on the aliens' turn it maximizes and the
    /// chosen station is remembered as a recent attack.
    ///
    /// Stations are searched in place and left exactly as they were.
    #[instrument(skip_all, fields(player_turn = is_player_turn, stations = stations.len()))]
    pub fn decide(&mut self, stations: &mut [Station], is_player_turn: bool) -> Option<StationId> {
        let start = Instant::now();
        let depth = self.config.search_depth(stations.len());
        let maximizing = !is_player_turn;

        let mut search = MinimaxSearch::new(&self.memory).with_pruning(self.config.pruning);
        let outcome = search.run(
            stations,
            depth,
            maximizing,
            f64::NEG_INFINITY,
            f64::INFINITY,
        );

        self.stats = search.into_stats();
        self.stats.depth = depth;
        self.stats.time_us = start.elapsed().as_micros() as u64;

        debug!(
            depth,
            station = ?outcome.station,
            value = outcome.value,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            "decision made"
        );

        if !is_player_turn {
            if let Some(target) = outcome.station {
                self.memory.record(target);
            }
        }

        outcome.station
    }

    /// The attacker's recent targets, oldest first.
    #[must_use]
    pub fn memory(&self) -> &AttackMemory {
        &self.memory
    }

    /// Statistics from the last decision.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forget recent attacks, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.memory.clear();
        self.stats.reset();
    }
}
