//! Real, irreversible combat on a station.
//!
//! Outcomes are probability-weighted: the stronger the defenders are
//! relative to the aliens, the likelier they hold. All randomness comes from
//! the caller's [`UniformSource`].

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::core::{CombatCaps, Station, UniformSource};

/// Base odds of defenders holding against an attack.
const HOLD_ODDS: f64 = 0.7;
/// Chance that an unguarded population repels an attack.
const CIVILIAN_REPEL_CHANCE: f64 = 0.1;
/// Base odds of a reinforced defense succeeding.
const DEFENSE_ODDS: f64 = 0.8;
/// Distance at which reinforcements are wholly lost, before the floor.
const REINFORCEMENT_RANGE: f64 = 2000.0;
/// Fewest reinforcements that arrive, however far the station.
const MIN_DISTANCE_FACTOR: f64 = 0.4;

/// How an attack played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// The garrison held and wiped out the aliens.
    DefendersHeld,
    /// The aliens overran the garrison.
    Overrun,
    /// No garrison, but the civilians drove the aliens off.
    CiviliansRepelled,
    /// No garrison, and the station was lost.
    StationLost,
}

/// How a reinforced defense played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenseOutcome {
    /// The aliens were cleared.
    Cleared,
    /// The aliens were thinned out but not cleared.
    Faltered,
}

/// Truncate `value * factor` back to a count.
fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).floor() as u32
}

/// Chance of success given a strength ratio: `odds * (1 - e^-ratio)`.
fn success_chance(odds: f64, ratio: f64) -> f64 {
    odds * (1.0 - (-ratio).exp())
}

/// Share of reinforcements that reach a station at `distance`.
#[must_use]
pub fn distance_factor(distance: f64) -> f64 {
    (1.0 - distance / REINFORCEMENT_RANGE).max(MIN_DISTANCE_FACTOR)
}

/// Recompute a station's damage from population lost.
pub fn update_damage(station: &mut Station) {
    station.recompute_damage();
}

/// Applies attacks and defenses to real station state.
///
/// ```
/// use station_defense::combat::{AttackOutcome, CombatResolver};
/// use station_defense::core::{BaseStation, Position, SequenceSource, Station, StationId};
///
/// let base = BaseStation::default();
/// let mut station = Station::new(StationId(0), "Alpha", Position::new(1000.0, 100.0), 1000, 100, 10, &base);
///
/// // A roll of 0.0 always lets a garrison hold.
/// let mut source = SequenceSource::new(vec![0.0, 0.0, 0.0]);
/// let outcome = CombatResolver::new().attack(&mut station, &mut source);
///
/// assert_eq!(outcome, Some(AttackOutcome::DefendersHeld));
/// assert_eq!(station.alien_count, 0);
/// assert_eq!(station.military_population, 50);
/// assert_eq!(station.population, 800);
/// assert_eq!(station.damage, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CombatResolver {
    caps: Option<CombatCaps>,
}

impl CombatResolver {
    /// An uncapped resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver that clamps every result to `caps`.
    #[must_use]
    pub fn with_caps(caps: CombatCaps) -> Self {
        Self { caps: Some(caps) }
    }

    /// Resolve an alien attack. Returns `false`, changing nothing, when the
    /// station has no aliens.
    pub fn resolve_attack<R: UniformSource>(&self, station: &mut Station, rng: &mut R) -> bool {
        self.attack(station, rng).is_some()
    }

    /// Resolve a defense with `reinforcements` troops. Returns `false`,
    /// changing nothing, when there are no reinforcements or no aliens.
    ///
    /// On `true` the caller should debit the full `reinforcements` from its
    /// troop pool, including troops lost to distance.
    pub fn resolve_defense<R: UniformSource>(
        &self,
        station: &mut Station,
        reinforcements: u32,
        rng: &mut R,
    ) -> bool {
        self.defend(station, reinforcements, rng).is_some()
    }

    /// Resolve an alien attack, reporting how it went.
    #[instrument(skip_all, fields(station = %station.id()))]
    pub fn attack<R: UniformSource>(
        &self,
        station: &mut Station,
        rng: &mut R,
    ) -> Option<AttackOutcome> {
        if !station.is_occupied() {
            return None;
        }
        station.under_attack = true;

        let outcome = if station.military_population > 0 {
            let ratio =
                f64::from(station.military_population) / (f64::from(station.alien_count) + 1.0);
            if rng.next_unit() < success_chance(HOLD_ODDS, ratio) {
                station.alien_count = 0;
                station.military_population =
                    scale(station.military_population, rng.uniform(0.5, 0.7));
                station.population = scale(station.population, rng.uniform(0.8, 0.9));
                AttackOutcome::DefendersHeld
            } else {
                station.military_population = 0;
                station.alien_count = scale(station.alien_count, rng.uniform(0.5, 0.7));
                station.population = scale(station.population, rng.uniform(0.3, 0.5));
                AttackOutcome::Overrun
            }
        } else if rng.next_unit() < CIVILIAN_REPEL_CHANCE {
            station.alien_count = 0;
            station.population = scale(station.population, rng.uniform(0.1, 0.3));
            AttackOutcome::CiviliansRepelled
        } else {
            station.population = 0;
            AttackOutcome::StationLost
        };

        self.settle(station);
        debug!(
            ?outcome,
            population = station.population,
            military = station.military_population,
            aliens = station.alien_count,
            damage = station.damage,
            "attack resolved"
        );
        Some(outcome)
    }

    /// Resolve a reinforced defense, reporting how it went.
    #[instrument(skip_all, fields(station = %station.id(), reinforcements = reinforcements))]
    pub fn defend<R: UniformSource>(
        &self,
        station: &mut Station,
        reinforcements: u32,
        rng: &mut R,
    ) -> Option<DefenseOutcome> {
        if reinforcements == 0 || !station.is_occupied() {
            return None;
        }

        let arriving = scale(reinforcements, distance_factor(station.distance_from_base()));
        let total_military = station.military_population.saturating_add(arriving);
        let ratio = f64::from(total_military) / (f64::from(station.alien_count) + 1.0);

        let outcome = if rng.next_unit() < success_chance(DEFENSE_ODDS, ratio) {
            station.alien_count = 0;
            station.military_population = scale(total_military, rng.uniform(0.6, 0.8));
            station.population = scale(station.population, rng.uniform(1.05, 1.15));
            DefenseOutcome::Cleared
        } else {
            station.alien_count = scale(station.alien_count, rng.uniform(0.3, 0.5));
            station.military_population = scale(total_military, rng.uniform(0.4, 0.6));
            station.population = scale(station.population, rng.uniform(0.8, 0.9));
            DefenseOutcome::Faltered
        };

        self.settle(station);
        debug!(
            ?outcome,
            arriving,
            population = station.population,
            military = station.military_population,
            aliens = station.alien_count,
            damage = station.damage,
            "defense resolved"
        );
        Some(outcome)
    }

    /// Apply caps, then recompute damage.
    fn settle(&self, station: &mut Station) {
        if let Some(caps) = self.caps {
            if let Some(max) = caps.max_population {
                station.population = station.population.min(max);
            }
            if let Some(max) = caps.max_military {
                station.military_population = station.military_population.min(max);
            }
            if let Some(max) = caps.max_aliens {
                station.alien_count = station.alien_count.min(max);
            }
        }
        update_damage(station);
    }
}
