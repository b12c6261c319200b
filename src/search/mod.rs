//! Adversarial target search.
//!
//! ## Overview
//!
//! - **Minimax with alpha-beta pruning** over the stations each side may act
//!   on, scored by the [`heuristic`](crate::heuristic) at the leaves
//! - **Reversible lookahead**: candidate moves are applied in place and
//!   rolled back by a scoped guard
//! - **Attack memory**: the attacker's last few targets bias the heuristic
//! - **Strategist**: the per-turn decision entry point
//!
//! ## Usage
//!
//! ```rust
//! use station_defense::scenario::Scenario;
//! use station_defense::search::Strategist;
//!
//! let mut scenario = Scenario::frontier();
//! let mut strategist = Strategist::default();
//!
//! if let Some(target) = strategist.decide(scenario.stations_mut(), false) {
//!     println!("Aliens strike {}", scenario.station(target).unwrap().name());
//! }
//! println!("searched {} nodes", strategist.stats().nodes);
//! ```

pub mod lookahead;
pub mod memory;
pub mod minimax;
pub mod stats;
pub mod strategist;

pub use lookahead::{simulate, LookaheadGuard, LookaheadSnapshot, Role};
pub use memory::{AttackMemory, DEFAULT_MEMORY_CAPACITY};
pub use minimax::{is_candidate, search, MinimaxSearch, SearchOutcome};
pub use stats::SearchStats;
pub use strategist::Strategist;
