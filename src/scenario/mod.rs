//! World setup.
//!
//! A `Scenario` is the station collection for one session plus the base the
//! stations are measured from. The engine never adds or removes stations;
//! they are created here, once.
//!
//! ```
//! use station_defense::scenario::ScenarioBuilder;
//!
//! let scenario = ScenarioBuilder::new()
//!     .station("Alpha", (100.0, 150.0), 5000, 400, 120)
//!     .station("Beta", (300.0, 350.0), 2000, 250, 0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(scenario.len(), 2);
//! assert!(scenario.station_by_name("Beta").is_some());
//! ```

use rustc_hash::FxHashMap;

use crate::core::{BaseStation, Position, Result, ScenarioError, Station, StationId};

/// One station as requested from the builder.
#[derive(Clone, Debug)]
struct StationSpec {
    name: String,
    position: Position,
    population: u32,
    military: u32,
    aliens: u32,
}

/// Builder for creating a Scenario.
#[derive(Clone, Debug, Default)]
pub struct ScenarioBuilder {
    base: BaseStation,
    stations: Vec<StationSpec>,
}

impl ScenarioBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the resource base. Defaults to [`BaseStation::DEFAULT_POSITION`].
    pub fn base(mut self, position: impl Into<Position>) -> Self {
        self.base = BaseStation::new(position.into());
        self
    }

    /// Add a station.
    pub fn station(
        mut self,
        name: impl Into<String>,
        position: impl Into<Position>,
        population: u32,
        military: u32,
        aliens: u32,
    ) -> Self {
        self.stations.push(StationSpec {
            name: name.into(),
            position: position.into(),
            population,
            military,
            aliens,
        });
        self
    }

    /// Build the scenario. Station ids follow insertion order from 0.
    ///
    /// Fails on an empty scenario or a repeated station name.
    pub fn build(self) -> Result<Scenario> {
        if self.stations.is_empty() {
            return Err(ScenarioError::Empty);
        }
        let mut seen = FxHashMap::default();
        for spec in &self.stations {
            if seen.insert(spec.name.as_str(), ()).is_some() {
                return Err(ScenarioError::DuplicateName(spec.name.clone()));
            }
        }
        Ok(Scenario::assemble(self.base, self.stations))
    }
}

/// The stations of one session and their base.
#[derive(Clone, Debug)]
pub struct Scenario {
    base: BaseStation,
    stations: Vec<Station>,
    by_name: FxHashMap<String, StationId>,
}

impl Scenario {
    fn assemble(base: BaseStation, specs: Vec<StationSpec>) -> Self {
        let mut stations = Vec::with_capacity(specs.len());
        let mut by_name = FxHashMap::default();

        for (index, spec) in specs.into_iter().enumerate() {
            let id = StationId(index as u32);
            by_name.insert(spec.name.clone(), id);
            stations.push(Station::new(
                id,
                spec.name,
                spec.position,
                spec.population,
                spec.military,
                spec.aliens,
                &base,
            ));
        }

        Self {
            base,
            stations,
            by_name,
        }
    }

    /// The standard three-station map.
    ///
    /// Alpha is garrisoned and occupied, Beta is garrisoned and clear, and
    /// Gamma is an abandoned outpost the aliens hold.
    #[must_use]
    pub fn frontier() -> Self {
        let spec = |name: &str, position: (f64, f64), population, military, aliens| StationSpec {
            name: name.to_string(),
            position: position.into(),
            population,
            military,
            aliens,
        };

        Self::assemble(
            BaseStation::default(),
            vec![
                spec("Station Alpha", (100.0, 150.0), 5000, 400, 120),
                spec("Station Beta", (300.0, 350.0), 2000, 250, 0),
                spec("Station Gamma", (450.0, 200.0), 0, 0, 60),
            ],
        )
    }

    #[must_use]
    pub fn base(&self) -> &BaseStation {
        &self.base
    }

    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Mutable access for the strategist and the combat resolver.
    pub fn stations_mut(&mut self) -> &mut [Station] {
        &mut self.stations
    }

    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0 as usize)
    }

    pub fn station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.get_mut(id.0 as usize)
    }

    #[must_use]
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.by_name.get(name).and_then(|&id| self.station(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Every station has lost its population.
    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.stations.iter().all(|s| !s.is_populated())
    }

    /// No station has aliens left.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.stations.iter().all(|s| !s.is_occupied())
    }

    /// Clear every station's under-attack flag for a new cycle.
    pub fn begin_cycle(&mut self) {
        for station in &mut self.stations {
            station.clear_under_attack();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_assigns_sequential_ids() {
        let scenario = ScenarioBuilder::new()
            .station("A", (0.0, 0.0), 10, 1, 1)
            .station("B", (0.0, 0.0), 20, 2, 2)
            .build()
            .unwrap();

        assert_eq!(scenario.stations()[0].id(), StationId(0));
        assert_eq!(scenario.stations()[1].id(), StationId(1));
        assert_eq!(scenario.station(StationId(1)).unwrap().name(), "B");
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = ScenarioBuilder::new().build().unwrap_err();
        assert_eq!(err, ScenarioError::Empty);
    }

    #[test]
    fn test_build_rejects_duplicate_names() {
        let err = ScenarioBuilder::new()
            .station("A", (0.0, 0.0), 10, 1, 1)
            .station("A", (5.0, 5.0), 10, 1, 1)
            .build()
            .unwrap_err();
        assert_eq!(err, ScenarioError::DuplicateName("A".to_string()));
    }

    #[test]
    fn test_custom_base_sets_distance() {
        let scenario = ScenarioBuilder::new()
            .base((0.0, 0.0))
            .station("A", (30.0, 40.0), 10, 1, 1)
            .build()
            .unwrap();
        assert_eq!(scenario.stations()[0].distance_from_base(), 50.0);
    }

    #[test]
    fn test_frontier() {
        let scenario = Scenario::frontier();
        assert_eq!(scenario.len(), 3);
        assert_eq!(scenario.base(), &BaseStation::default());

        let alpha = scenario.station_by_name("Station Alpha").unwrap();
        assert_eq!(alpha.population, 5000);
        assert!(alpha.is_occupied());

        let beta = scenario.station_by_name("Station Beta").unwrap();
        assert!(!beta.is_occupied());

        let gamma = scenario.station_by_name("Station Gamma").unwrap();
        assert!(!gamma.is_populated());
        assert!(gamma.is_occupied());

        assert!(!scenario.is_defeat());
        assert!(!scenario.is_victory());
    }

    #[test]
    fn test_victory_and_defeat() {
        let mut scenario = Scenario::frontier();
        for station in scenario.stations_mut() {
            station.alien_count = 0;
        }
        assert!(scenario.is_victory());

        for station in scenario.stations_mut() {
            station.population = 0;
        }
        assert!(scenario.is_defeat());
    }

    #[test]
    fn test_begin_cycle_clears_flags() {
        let mut scenario = Scenario::frontier();
        scenario.station_mut(StationId(0)).unwrap().under_attack = true;
        scenario.begin_cycle();
        assert!(scenario.stations().iter().all(|s| !s.under_attack));
    }

    #[test]
    fn test_unknown_lookups() {
        let scenario = Scenario::frontier();
        assert!(scenario.station(StationId(99)).is_none());
        assert!(scenario.station_by_name("Nowhere").is_none());
    }
}
