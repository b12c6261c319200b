//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The branching factor at each ply is the set of stations the moving side
//! may act on. Each candidate gets a lookahead move applied in place, the
//! full collection is searched one ply shallower for the other side, and the
//! move is rolled back before the next candidate.
//!
//! Values are heuristic scores, except for two sentinels: every population
//! lost scores `-inf` for the maximizing side (`+inf` for the minimizing
//! side), and every alien cleared scores the mirror image. Check
//! [`SearchOutcome::is_decisive`] before comparing values.

use smallvec::SmallVec;

use crate::core::{Station, StationId};
use crate::heuristic::{score, Perspective};

use super::lookahead::{LookaheadGuard, Role};
use super::memory::AttackMemory;
use super::stats::SearchStats;

/// Result of a search: the station to act on and its value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Chosen station, `None` when nothing is eligible.
    pub station: Option<StationId>,
    /// Minimax value of the choice.
    pub value: f64,
}

impl SearchOutcome {
    /// Nothing to act on.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            station: None,
            value: 0.0,
        }
    }

    const fn sentinel(value: f64) -> Self {
        Self {
            station: None,
            value,
        }
    }

    /// Did the search hit total defeat or total victory?
    #[must_use]
    pub fn is_decisive(&self) -> bool {
        self.value.is_infinite()
    }
}

/// Can `role` act on this station?
///
/// Defenders act where there are both people and aliens; attackers act
/// wherever people remain.
#[must_use]
pub fn is_candidate(station: &Station, role: Role) -> bool {
    match role {
        Role::Defender => station.is_populated() && station.is_occupied(),
        Role::Attacker => station.is_populated(),
    }
}

/// A minimax search over one station collection.
///
/// ```
/// use station_defense::core::{BaseStation, Position, Station, StationId};
/// use station_defense::search::{AttackMemory, MinimaxSearch};
///
/// let base = BaseStation::default();
/// let mut stations = vec![
///     Station::new(StationId(0), "Alpha", Position::new(100.0, 150.0), 5000, 100, 80, &base),
///     Station::new(StationId(1), "Beta", Position::new(300.0, 350.0), 2000, 300, 10, &base),
/// ];
///
/// let memory = AttackMemory::default();
/// let mut search = MinimaxSearch::new(&memory);
/// let outcome = search.run(&mut stations, 2, true, f64::NEG_INFINITY, f64::INFINITY);
///
/// assert!(outcome.station.is_some());
/// assert!(search.stats().nodes > 1);
/// ```
pub struct MinimaxSearch<'m> {
    recent: &'m AttackMemory,
    pruning: bool,
    stats: SearchStats,
}

impl<'m> MinimaxSearch<'m> {
    /// Create a pruning search that reads `recent` for the heuristic.
    pub fn new(recent: &'m AttackMemory) -> Self {
        Self {
            recent,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Switch alpha-beta cutoffs on or off. The chosen station is the same
    /// either way.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Search `depth` plies from the current state.
    ///
    /// `maximizing` selects the defender role. Station fields are mutated
    /// during the search and restored before this returns.
    pub fn run(
        &mut self,
        stations: &mut [Station],
        depth: u32,
        maximizing: bool,
        alpha: f64,
        beta: f64,
    ) -> SearchOutcome {
        self.node(stations, depth, Role::from_maximizing(maximizing), alpha, beta)
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume the search, keeping its statistics.
    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }

    fn node(
        &mut self,
        stations: &mut [Station],
        depth: u32,
        role: Role,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchOutcome {
        self.stats.nodes += 1;

        let all_lost = stations.iter().all(|s| !s.is_populated());
        let all_cleared = stations.iter().all(|s| !s.is_occupied());
        if depth == 0 || all_lost || all_cleared {
            return self.evaluate(stations, role, all_lost, all_cleared);
        }

        let candidates: SmallVec<[usize; 16]> = stations
            .iter()
            .enumerate()
            .filter(|(_, s)| is_candidate(s, role))
            .map(|(i, _)| i)
            .collect();
        if candidates.is_empty() {
            return SearchOutcome::none();
        }

        let maximizing = role.is_maximizing();
        let mut best_station: Option<StationId> = None;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for index in candidates {
            let id = stations[index].id();
            let value = {
                let mut guard = LookaheadGuard::apply(stations, index, role);
                self.node(guard.stations(), depth - 1, role.flip(), alpha, beta)
                    .value
            };

            // Ties keep the earlier candidate.
            let improves = match best_station {
                None => true,
                Some(_) if maximizing => value > best_value,
                Some(_) => value < best_value,
            };
            if improves {
                best_value = value;
                best_station = Some(id);
            }

            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                tracing::trace!(depth, ?role, alpha, beta, "cutoff");
                break;
            }
        }

        SearchOutcome {
            station: best_station,
            value: best_value,
        }
    }

    /// Terminal sentinels, or the best single station by heuristic.
    fn evaluate(
        &mut self,
        stations: &[Station],
        role: Role,
        all_lost: bool,
        all_cleared: bool,
    ) -> SearchOutcome {
        let maximizing = role.is_maximizing();

        if all_lost {
            self.stats.terminal_hits += 1;
            return SearchOutcome::sentinel(if maximizing {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        if all_cleared {
            self.stats.terminal_hits += 1;
            return SearchOutcome::sentinel(if maximizing {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            });
        }

        self.stats.leaf_evaluations += 1;
        let perspective = if maximizing {
            Perspective::Defender
        } else {
            Perspective::Attacker
        };

        let mut best: Option<(StationId, i64)> = None;
        for station in stations.iter().filter(|s| is_candidate(s, role)) {
            let value = score(station, perspective, self.recent);
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((station.id(), value));
            }
        }

        match best {
            Some((id, value)) => SearchOutcome {
                station: Some(id),
                value: value as f64,
            },
            None => SearchOutcome::none(),
        }
    }
}

/// Search with pruning, discarding statistics.
pub fn search(
    stations: &mut [Station],
    depth: u32,
    maximizing: bool,
    alpha: f64,
    beta: f64,
    recent: &AttackMemory,
) -> SearchOutcome {
    MinimaxSearch::new(recent).run(stations, depth, maximizing, alpha, beta)
}
