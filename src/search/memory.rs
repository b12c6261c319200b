//! Bounded memory of the attacker's recent targets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::StationId;

/// Default number of remembered targets.
pub const DEFAULT_MEMORY_CAPACITY: usize = 3;

/// FIFO of the most recently attacked stations, oldest first.
///
/// Owned by the [`Strategist`](super::Strategist) and read by the heuristic.
/// Holds at most `capacity` entries; recording beyond that evicts the oldest.
///
/// ```
/// use station_defense::core::StationId;
/// use station_defense::search::AttackMemory;
///
/// let mut memory = AttackMemory::default();
/// for id in 0..4 {
///     memory.record(StationId(id));
/// }
///
/// assert_eq!(memory.len(), 3);
/// assert!(!memory.contains(StationId(0)));
/// assert_eq!(memory.iter().collect::<Vec<_>>(), vec![StationId(1), StationId(2), StationId(3)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackMemory {
    entries: SmallVec<[StationId; DEFAULT_MEMORY_CAPACITY]>,
    capacity: usize,
}

impl Default for AttackMemory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }
}

impl AttackMemory {
    /// Create an empty memory holding up to `capacity` targets.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Remember a target, evicting the oldest entry if full.
    ///
    /// Repeated targets are recorded again; a station attacked twice in a
    /// row occupies two slots.
    pub fn record(&mut self, station: StationId) {
        if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push(station);
    }

    /// Was this station among the recent targets?
    #[must_use]
    pub fn contains(&self, station: StationId) -> bool {
        self.entries.contains(&station)
    }

    /// Recent targets, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = StationId> + '_ {
        self.entries.iter().copied()
    }

    /// Most recent target.
    #[must_use]
    pub fn last(&self) -> Option<StationId> {
        self.entries.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_memory() {
        let memory = AttackMemory::default();
        assert!(memory.is_empty());
        assert_eq!(memory.capacity(), 3);
        assert_eq!(memory.last(), None);
    }

    #[test]
    fn test_record_under_capacity() {
        let mut memory = AttackMemory::default();
        memory.record(StationId(5));
        memory.record(StationId(7));

        assert_eq!(memory.len(), 2);
        assert!(memory.contains(StationId(5)));
        assert!(memory.contains(StationId(7)));
        assert_eq!(memory.last(), Some(StationId(7)));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut memory = AttackMemory::default();
        for id in 1..=5 {
            memory.record(StationId(id));
        }

        let held: Vec<_> = memory.iter().collect();
        assert_eq!(held, vec![StationId(3), StationId(4), StationId(5)]);
    }

    #[test]
    fn test_repeated_target_takes_two_slots() {
        let mut memory = AttackMemory::default();
        memory.record(StationId(1));
        memory.record(StationId(2));
        memory.record(StationId(2));
        memory.record(StationId(3));

        let held: Vec<_> = memory.iter().collect();
        assert_eq!(held, vec![StationId(2), StationId(2), StationId(3)]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut memory = AttackMemory::with_capacity(1);
        memory.record(StationId(1));
        memory.record(StationId(2));
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.last(), Some(StationId(2)));

        assert_eq!(AttackMemory::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_clear() {
        let mut memory = AttackMemory::default();
        memory.record(StationId(1));
        memory.clear();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut memory = AttackMemory::default();
        memory.record(StationId(9));
        let json = serde_json::to_string(&memory).unwrap();
        let deserialized: AttackMemory = serde_json::from_str(&json).unwrap();
        assert_eq!(memory, deserialized);
    }
}
