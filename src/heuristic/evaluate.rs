//! Priority score for a station from one side's perspective.

use serde::{Deserialize, Serialize};

use crate::core::Station;
use crate::search::AttackMemory;

/// Distance beyond which a station gets the full distance penalty.
const PENALTY_RANGE: f64 = 1500.0;

/// Which side a score is computed for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    /// The player, reinforcing stations.
    Defender,
    /// The aliens, choosing where to strike.
    Attacker,
}

impl Perspective {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Perspective::Defender => Perspective::Attacker,
            Perspective::Attacker => Perspective::Defender,
        }
    }
}

/// Remoteness of a station, normalized to `[0, 1]`.
#[must_use]
pub fn distance_penalty(station: &Station) -> f64 {
    (station.distance_from_base() / PENALTY_RANGE).clamp(0.0, 1.0)
}

/// Unrounded score. Can be negative.
#[must_use]
pub fn raw_score(station: &Station, perspective: Perspective, recent: &AttackMemory) -> f64 {
    let population = f64::from(station.population);
    let military = f64::from(station.military_population);
    let aliens = f64::from(station.alien_count);
    let damage = f64::from(station.damage);
    let penalty = distance_penalty(station);
    let recently_hit = recent.contains(station.id());

    match perspective {
        Perspective::Defender => {
            // Recently hit stations are left for the attacker to move on from.
            let recent_penalty = if recently_hit { 30.0 } else { 0.0 };
            (population / 800.0) * 5.0 + aliens * 3.0 + damage * 1.5
                - military * 0.3
                - penalty * 2.0
                - recent_penalty
        }
        Perspective::Attacker => {
            let recent_bonus = if recently_hit { 20.0 } else { 0.0 };
            (population / 600.0) * 5.0 - military * 2.5 + aliens * 2.0
                - damage * 0.8
                - penalty * 1.5
                + recent_bonus
        }
    }
}

/// Priority of acting on `station`, always at least 1.
///
/// Higher is more attractive for `perspective`.
///
/// ```
/// use station_defense::core::{BaseStation, Position, Station, StationId};
/// use station_defense::heuristic::{score, Perspective};
/// use station_defense::search::AttackMemory;
///
/// let base = BaseStation::new(Position::new(0.0, 0.0));
/// let station = Station::new(StationId(0), "Alpha", Position::new(300.0, 400.0), 1000, 50, 20, &base);
///
/// assert_eq!(score(&station, Perspective::Defender, &AttackMemory::default()), 51);
/// ```
#[must_use]
pub fn score(station: &Station, perspective: Perspective, recent: &AttackMemory) -> i64 {
    (raw_score(station, perspective, recent).round() as i64).max(1)
}
