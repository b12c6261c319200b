//! Reversible lookahead moves used inside the search.
//!
//! These are deterministic stand-ins for combat, cheap enough to apply and
//! undo at every node. They never replace the real
//! [`CombatResolver`](crate::combat::CombatResolver).
//!
//! ## Rollback
//!
//! [`LookaheadGuard`] applies a move to one station of a collection and
//! restores that station when dropped, so the rollback also happens when a
//! recursive search unwinds early.
//!
//! ```
//! use station_defense::core::{BaseStation, Position, Station, StationId};
//! use station_defense::search::{LookaheadGuard, Role};
//!
//! let base = BaseStation::default();
//! let mut stations = vec![
//!     Station::new(StationId(0), "Alpha", Position::new(0.0, 0.0), 1000, 100, 50, &base),
//! ];
//!
//! {
//!     let mut guard = LookaheadGuard::apply(&mut stations, 0, Role::Attacker);
//!     assert_eq!(guard.stations()[0].population, 800);
//! }
//!
//! assert_eq!(stations[0].population, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Station;

/// Military lost to a simulated attack, percent.
const ATTACK_MILITARY_LOSS: u64 = 30;
/// Population lost to a simulated attack, percent.
const ATTACK_POPULATION_LOSS: u64 = 20;
/// Damage added by a simulated attack, percentage points.
const ATTACK_DAMAGE_DELTA: u8 = 10;
/// Aliens removed by a simulated defense, percent.
const DEFENSE_ALIEN_LOSS: u64 = 40;

/// The side making a move in the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Maximizing side; its move clears aliens.
    Defender,
    /// Minimizing side; its move strikes the station.
    Attacker,
}

impl Role {
    /// Role for an optimization direction.
    #[must_use]
    pub const fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Role::Defender
        } else {
            Role::Attacker
        }
    }

    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Role::Defender)
    }

    /// The role that moves next.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Role::Defender => Role::Attacker,
            Role::Attacker => Role::Defender,
        }
    }
}

/// Remove `percent` of `value`, truncating the loss.
fn reduce_by(value: u32, percent: u64) -> u32 {
    let loss = u64::from(value) * percent / 100;
    // loss <= value, so the difference fits
    (u64::from(value) - loss) as u32
}

/// Apply a lookahead move to a station.
///
/// An attacker move costs 30% of the military, 20% of the population, and
/// adds 10 points of damage (capped at 100). A defender move removes 40% of
/// the aliens.
pub fn simulate(station: &mut Station, role: Role) {
    match role {
        Role::Attacker => {
            station.military_population =
                reduce_by(station.military_population, ATTACK_MILITARY_LOSS);
            station.population = reduce_by(station.population, ATTACK_POPULATION_LOSS);
            station.damage = station.damage.saturating_add(ATTACK_DAMAGE_DELTA).min(100);
        }
        Role::Defender => {
            station.alien_count = reduce_by(station.alien_count, DEFENSE_ALIEN_LOSS);
        }
    }
}

/// The four fields a lookahead move can change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookaheadSnapshot {
    pub population: u32,
    pub military_population: u32,
    pub alien_count: u32,
    pub damage: u8,
}

impl LookaheadSnapshot {
    /// Capture a station's mutable fields.
    #[must_use]
    pub fn capture(station: &Station) -> Self {
        Self {
            population: station.population,
            military_population: station.military_population,
            alien_count: station.alien_count,
            damage: station.damage,
        }
    }

    /// Write the captured fields back.
    pub fn restore(self, station: &mut Station) {
        station.population = self.population;
        station.military_population = self.military_population;
        station.alien_count = self.alien_count;
        station.damage = self.damage;
    }
}

/// A lookahead move applied to one station, undone on drop.
///
/// Holds the whole collection so the search can recurse over it while the
/// move is in effect.
pub struct LookaheadGuard<'a> {
    stations: &'a mut [Station],
    index: usize,
    snapshot: LookaheadSnapshot,
}

impl<'a> LookaheadGuard<'a> {
    /// Snapshot `stations[index]` and apply `role`'s move to it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn apply(stations: &'a mut [Station], index: usize, role: Role) -> Self {
        let snapshot = LookaheadSnapshot::capture(&stations[index]);
        simulate(&mut stations[index], role);
        tracing::trace!(
            station = %stations[index].id(),
            ?role,
            "lookahead applied"
        );
        Self {
            stations,
            index,
            snapshot,
        }
    }

    /// The collection with the move in effect.
    pub fn stations(&mut self) -> &mut [Station] {
        &mut *self.stations
    }

    /// State of the moved station before the move.
    #[must_use]
    pub fn snapshot(&self) -> LookaheadSnapshot {
        self.snapshot
    }
}

impl Drop for LookaheadGuard<'_> {
    fn drop(&mut self) {
        self.snapshot.restore(&mut self.stations[self.index]);
    }
}
