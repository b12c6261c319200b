//! Combat resolver integration tests.

use proptest::prelude::*;

use station_defense::combat::{AttackOutcome, CombatCaps, CombatResolver, DefenseOutcome};
use station_defense::core::{BaseStation, GameRng, Position, Station, StationId};

fn station(distance: f64, population: u32, military: u32, aliens: u32) -> Station {
    Station::new(
        StationId(0),
        "Outpost",
        Position::new(distance, 0.0),
        population,
        military,
        aliens,
        &BaseStation::new(Position::new(0.0, 0.0)),
    )
}

fn assert_invariants(s: &Station) {
    assert!(s.damage <= 100, "damage out of range: {}", s.damage);
}

// =============================================================================
// No-op conditions
// =============================================================================

#[test]
fn test_attack_on_empty_station_changes_nothing() {
    let mut s = station(400.0, 2500, 80, 0);
    let before = s.clone();
    let mut rng = GameRng::new(3);

    assert!(!CombatResolver::new().resolve_attack(&mut s, &mut rng));
    assert_eq!(s, before);
}

#[test]
fn test_defense_without_reinforcements_changes_nothing() {
    let mut s = station(400.0, 2500, 80, 30);
    let before = s.clone();
    let mut rng = GameRng::new(3);

    assert!(!CombatResolver::new().resolve_defense(&mut s, 0, &mut rng));
    assert_eq!(s, before);
}

#[test]
fn test_noop_does_not_consume_randomness() {
    let mut s = station(400.0, 2500, 80, 0);
    let mut rng = GameRng::new(3);
    let state = rng.state();

    CombatResolver::new().resolve_attack(&mut s, &mut rng);
    assert_eq!(rng.state(), state);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_outcome() {
    let resolver = CombatResolver::new();
    let mut a = station(700.0, 3000, 60, 45);
    let mut b = a.clone();

    let mut rng_a = GameRng::new(99);
    let mut rng_b = GameRng::new(99);

    for _ in 0..5 {
        let oa = resolver.attack(&mut a, &mut rng_a);
        let ob = resolver.attack(&mut b, &mut rng_b);
        assert_eq!(oa, ob);
        let da = resolver.defend(&mut a, 25, &mut rng_a);
        let db = resolver.defend(&mut b, 25, &mut rng_b);
        assert_eq!(da, db);
    }
    assert_eq!(a, b);
}

// =============================================================================
// Outcome odds
// =============================================================================

#[test]
fn test_strong_garrison_usually_holds() {
    let resolver = CombatResolver::new();
    let mut rng = GameRng::new(2024);
    let trials = 2000;
    let mut held = 0;

    for _ in 0..trials {
        let mut s = station(0.0, 1000, 1000, 10);
        if resolver.attack(&mut s, &mut rng) == Some(AttackOutcome::DefendersHeld) {
            held += 1;
        }
    }

    // Hold chance is ~0.7
    let rate = f64::from(held) / f64::from(trials);
    assert!((0.6..0.8).contains(&rate), "hold rate {rate}");
}

#[test]
fn test_unguarded_station_rarely_survives() {
    let resolver = CombatResolver::new();
    let mut rng = GameRng::new(7);
    let trials = 2000;
    let mut repelled = 0;

    for _ in 0..trials {
        let mut s = station(0.0, 1000, 0, 10);
        match resolver.attack(&mut s, &mut rng) {
            Some(AttackOutcome::CiviliansRepelled) => repelled += 1,
            Some(AttackOutcome::StationLost) => assert_eq!(s.population, 0),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    let rate = f64::from(repelled) / f64::from(trials);
    assert!((0.05..0.15).contains(&rate), "repel rate {rate}");
}

#[test]
fn test_overwhelming_reinforcements_usually_clear() {
    let resolver = CombatResolver::new();
    let mut rng = GameRng::new(11);
    let trials = 2000;
    let mut cleared = 0;

    for _ in 0..trials {
        let mut s = station(0.0, 1000, 0, 10);
        if resolver.defend(&mut s, 5000, &mut rng) == Some(DefenseOutcome::Cleared) {
            cleared += 1;
            assert_eq!(s.alien_count, 0);
            assert!(s.population >= 1050);
        }
    }

    let rate = f64::from(cleared) / f64::from(trials);
    assert!((0.7..0.9).contains(&rate), "clear rate {rate}");
}

// =============================================================================
// Caps
// =============================================================================

#[test]
fn test_caps_hold_across_many_actions() {
    let caps = CombatCaps {
        max_population: Some(1200),
        max_military: Some(100),
        max_aliens: Some(40),
    };
    let resolver = CombatResolver::with_caps(caps);
    let mut rng = GameRng::new(5);
    let mut s = station(200.0, 1200, 50, 40);

    for _ in 0..50 {
        resolver.resolve_defense(&mut s, 500, &mut rng);
        s.alien_count = 40;
        resolver.resolve_attack(&mut s, &mut rng);
        assert!(s.population <= 1200);
        assert!(s.military_population <= 100);
        assert!(s.alien_count <= 40);
        assert_invariants(&s);
        if s.population == 0 {
            break;
        }
    }
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn prop_attack_keeps_invariants(
        population in 0u32..100_000,
        military in 0u32..5_000,
        aliens in 0u32..5_000,
        distance in 0.0f64..4000.0,
        seed in any::<u64>(),
    ) {
        let mut s = station(distance, population, military, aliens);
        let mut rng = GameRng::new(seed);

        let resolved = CombatResolver::new().resolve_attack(&mut s, &mut rng);

        prop_assert_eq!(resolved, aliens > 0);
        prop_assert!(s.damage <= 100);
        prop_assert!(s.population <= population);
        prop_assert_eq!(s.original_population(), population);
        prop_assert_eq!(s.under_attack, resolved);
    }

    #[test]
    fn prop_defense_keeps_invariants(
        population in 0u32..100_000,
        military in 0u32..5_000,
        aliens in 0u32..5_000,
        reinforcements in 0u32..10_000,
        distance in 0.0f64..4000.0,
        seed in any::<u64>(),
    ) {
        let mut s = station(distance, population, military, aliens);
        let mut rng = GameRng::new(seed);

        let resolved = CombatResolver::new().resolve_defense(&mut s, reinforcements, &mut rng);

        prop_assert_eq!(resolved, reinforcements > 0 && aliens > 0);
        prop_assert!(s.damage <= 100);
        prop_assert!(s.alien_count <= aliens);
        prop_assert_eq!(s.original_population(), population);
    }
}
