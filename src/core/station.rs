//! Station entities and the base they are measured against.
//!
//! A `Station` is one outpost in the conflict. Its numeric fields are the
//! only state the engine mutates: the lookahead simulator changes them
//! temporarily during search, the combat resolver changes them for real.
//!
//! ## Identity
//!
//! Every station carries a `StationId` assigned at construction. Identity
//! checks (recent-attack memory, chosen targets) compare ids, never names or
//! mutable counts.
//!
//! ```
//! use station_defense::core::{BaseStation, Position, Station, StationId};
//!
//! let base = BaseStation::new(Position::new(0.0, 0.0));
//! let station = Station::new(StationId(0), "Alpha", Position::new(300.0, 400.0), 1000, 50, 20, &base);
//!
//! assert_eq!(station.distance_from_base(), 500.0);
//! assert_eq!(station.damage, 0);
//! assert!(station.is_populated());
//! assert!(station.is_occupied());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a station within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    /// Create a new station ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for StationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// A point on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The resource base all station distances are measured from.
///
/// The engine never mutates the base.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseStation {
    pub position: Position,
}

impl BaseStation {
    /// Where the resource base sits on the standard map.
    pub const DEFAULT_POSITION: Position = Position::new(1000.0, 100.0);

    #[must_use]
    pub const fn new(position: Position) -> Self {
        Self { position }
    }
}

impl Default for BaseStation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION)
    }
}

/// Combat-relevant state for one outpost.
///
/// ## Mutable fields
///
/// `population`, `military_population`, `alien_count` and `damage` change
/// during play. Counts are unsigned so they can never go negative; `damage`
/// stays within `0..=100` because it is only ever written through
/// [`Station::recompute_damage`] or clamped arithmetic.
///
/// ## Fixed fields
///
/// `original_population`, the position and the distance from base are set
/// once at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    id: StationId,
    name: String,
    position: Position,
    original_population: u32,
    distance_from_base: f64,

    /// Civilians currently living on the station.
    pub population: u32,

    /// Defending troops stationed here.
    pub military_population: u32,

    /// Aliens present on the station.
    pub alien_count: u32,

    /// Percentage of the original population lost, `0..=100`.
    pub damage: u8,

    /// Set by the combat resolver when the station is attacked.
    /// Presentation hint only; callers clear it at the start of each cycle.
    pub under_attack: bool,
}

impl Station {
    /// Width of the station's on-screen footprint.
    pub const WIDTH: f64 = 150.0;
    /// Height of the station's on-screen footprint.
    pub const HEIGHT: f64 = 150.0;

    /// Create a station with full population and no damage.
    ///
    /// The distance from `base` is computed here, once.
    #[must_use]
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        position: Position,
        population: u32,
        military_population: u32,
        alien_count: u32,
        base: &BaseStation,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            original_population: population,
            distance_from_base: position.distance_to(base.position),
            population,
            military_population,
            alien_count,
            damage: 0,
            under_attack: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Display name. Not used by any decision logic.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Population at creation time.
    #[must_use]
    pub fn original_population(&self) -> u32 {
        self.original_population
    }

    #[must_use]
    pub fn distance_from_base(&self) -> f64 {
        self.distance_from_base
    }

    /// Any civilians left?
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.population > 0
    }

    /// Any aliens present?
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.alien_count > 0
    }

    /// Reset the presentation flag at the start of a cycle.
    pub fn clear_under_attack(&mut self) {
        self.under_attack = false;
    }

    /// Recompute `damage` from population lost since creation.
    ///
    /// A station that started empty is never damaged. Growth above the
    /// original population clamps to zero damage.
    pub fn recompute_damage(&mut self) {
        self.damage = if self.original_population == 0 {
            0
        } else {
            let original = f64::from(self.original_population);
            let lost = original - f64::from(self.population);
            (100.0 * lost / original).round().clamp(0.0, 100.0) as u8
        };
    }

    /// Screen rectangle as `(x, y, width, height)`.
    #[must_use]
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        (self.position.x, self.position.y, Self::WIDTH, Self::HEIGHT)
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Population: {}", self.population)?;
        writeln!(f, "Military: {}", self.military_population)?;
        writeln!(f, "Aliens: {}", self.alien_count)?;
        writeln!(f, "Damage: {}%", self.damage)?;
        write!(f, "Distance: {}", self.distance_from_base as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_at(x: f64, y: f64, population: u32) -> Station {
        Station::new(
            StationId(1),
            "Test",
            Position::new(x, y),
            population,
            10,
            5,
            &BaseStation::new(Position::new(0.0, 0.0)),
        )
    }

    #[test]
    fn test_distance_computed_at_construction() {
        let station = station_at(600.0, 800.0, 100);
        assert_eq!(station.distance_from_base(), 1000.0);
    }

    #[test]
    fn test_default_base_position() {
        let base = BaseStation::default();
        assert_eq!(base.position, Position::new(1000.0, 100.0));
    }

    #[test]
    fn test_recompute_damage() {
        let mut station = station_at(0.0, 0.0, 1000);

        station.population = 750;
        station.recompute_damage();
        assert_eq!(station.damage, 25);

        station.population = 0;
        station.recompute_damage();
        assert_eq!(station.damage, 100);
    }

    #[test]
    fn test_recompute_damage_rounds() {
        let mut station = station_at(0.0, 0.0, 3);
        station.population = 1;
        station.recompute_damage();
        // 66.67% lost
        assert_eq!(station.damage, 67);
    }

    #[test]
    fn test_recompute_damage_growth_clamps_to_zero() {
        let mut station = station_at(0.0, 0.0, 1000);
        station.population = 1100;
        station.recompute_damage();
        assert_eq!(station.damage, 0);
    }

    #[test]
    fn test_recompute_damage_empty_station() {
        let mut station = station_at(0.0, 0.0, 0);
        station.recompute_damage();
        assert_eq!(station.damage, 0);
    }

    #[test]
    fn test_original_population_is_fixed() {
        let mut station = station_at(0.0, 0.0, 500);
        station.population = 10;
        assert_eq!(station.original_population(), 500);
    }

    #[test]
    fn test_bounding_box() {
        let station = station_at(100.0, 150.0, 10);
        assert_eq!(station.bounding_box(), (100.0, 150.0, 150.0, 150.0));
    }

    #[test]
    fn test_display_summary() {
        let station = station_at(300.0, 400.0, 1000);
        let text = station.to_string();
        assert!(text.starts_with("Test\n"));
        assert!(text.contains("Population: 1000"));
        assert!(text.contains("Military: 10"));
        assert!(text.contains("Aliens: 5"));
        assert!(text.contains("Damage: 0%"));
        assert!(text.ends_with("Distance: 500"));
    }

    #[test]
    fn test_clear_under_attack() {
        let mut station = station_at(0.0, 0.0, 10);
        station.under_attack = true;
        station.clear_under_attack();
        assert!(!station.under_attack);
    }

    #[test]
    fn test_station_id_display() {
        assert_eq!(format!("{}", StationId(7)), "Station(7)");
    }

    #[test]
    fn test_serialization() {
        let station = station_at(300.0, 400.0, 300);
        let json = serde_json::to_string(&station).unwrap();
        let deserialized: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(station, deserialized);
    }
}
