//! Combat resolution.
//!
//! Once the [`Strategist`](crate::search::Strategist) has chosen a target,
//! the caller realizes the move here. Unlike the search lookahead, these
//! results are random and permanent.
//!
//! Failure (nothing to attack, nothing to defend with) is a no-op reported
//! as `false` / `None`. After every resolved action all counts are
//! non-negative and damage is within `0..=100`.

mod resolver;

pub use crate::core::CombatCaps;
pub use resolver::{distance_factor, update_damage, AttackOutcome, CombatResolver, DefenseOutcome};
