//! Core engine types: stations, randomness, configuration, errors.
//!
//! Everything else in the crate is built from these. The engine never
//! creates or destroys stations; it only changes their counts.

pub mod config;
pub mod error;
pub mod rng;
pub mod station;

pub use config::{CombatCaps, EngineConfig};
pub use error::{ConfigError, Result, ScenarioError};
pub use rng::{GameRng, GameRngState, SequenceSource, UniformSource};
pub use station::{BaseStation, Position, Station, StationId};
