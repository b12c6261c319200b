//! Station priority scoring.
//!
//! The heuristic rates how attractive a station is to act on, from either
//! side's point of view. It is a pure read of station state plus the
//! attacker's recent targets, and is used both by the search leaves and by
//! callers who want to rank stations directly.
//!
//! The weights are fixed game policy.

mod evaluate;

pub use evaluate::{distance_penalty, raw_score, score, Perspective};
