//! # station-defense
//!
//! Decision and combat resolution engine for a turn-based conflict between
//! a human defender and an alien attacker over a set of space stations.
//!
//! ## Design Principles
//!
//! 1. **Search decides, combat resolves**: the search only ever applies
//!    deterministic, reversible lookahead moves. Real outcomes come from the
//!    combat resolver, once a target is chosen.
//!
//! 2. **No hidden state**: the attacker's recent-target memory lives in a
//!    caller-owned `Strategist`; randomness comes from a caller-supplied
//!    source.
//!
//! 3. **Invariants by construction**: counts are unsigned, damage is clamped,
//!    and lookahead rollback is tied to scope.
//!
//! ## Modules
//!
//! - `core`: Stations, base, RNG, configuration, errors
//! - `heuristic`: Station priority scores for either side
//! - `search`: Minimax with alpha-beta pruning, lookahead, attack memory
//! - `combat`: Stochastic attack and defense resolution
//! - `scenario`: World setup
//!
//! ## Example
//!
//! ```
//! use station_defense::combat::CombatResolver;
//! use station_defense::scenario::Scenario;
//! use station_defense::search::Strategist;
//!
//! let mut scenario = Scenario::frontier();
//! let mut strategist = Strategist::default();
//! let mut rng = strategist.config().rng();
//! let resolver = CombatResolver::new();
//!
//! if let Some(target) = strategist.decide(scenario.stations_mut(), false) {
//!     let station = scenario.station_mut(target).unwrap();
//!     resolver.resolve_attack(station, &mut rng);
//!     assert!(station.damage <= 100);
//! }
//! ```

pub mod combat;
pub mod core;
pub mod heuristic;
pub mod scenario;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BaseStation, CombatCaps, ConfigError, EngineConfig, GameRng, Position, ScenarioError,
    SequenceSource, Station, StationId, UniformSource,
};

pub use crate::heuristic::{score, Perspective};

pub use crate::search::{AttackMemory, MinimaxSearch, SearchOutcome, SearchStats, Strategist};

pub use crate::combat::{AttackOutcome, CombatResolver, DefenseOutcome};

pub use crate::scenario::{Scenario, ScenarioBuilder};
