//! Integration tests for SAVANNA

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use savanna::config::{GazelleConfig, TerrainConfig};
use savanna::ecology::generate_trees;
use savanna::gazelle::thoughts;
use savanna::policy::{RandomPolicy, ScriptedPolicy};
use savanna::{
    Config, Direction, Gazelle, Grid, MoveOutcome, Session, SessionCommand, SessionEvent,
    SessionStatus, World,
};
use std::time::Duration;

fn small_config(size: usize) -> Config {
    let mut config = Config::default();
    config.world.grid_size = size;
    config
}

#[test]
fn test_full_session_cycle() {
    let world = World::new_with_seed(Config::default(), 12345).unwrap();
    let mut session = Session::new(world, Box::new(RandomPolicy::with_seed(1)));

    // Ten simulated minutes
    for _ in 0..600 {
        session.advance(Duration::from_secs(1));
    }

    let world = session.world();
    assert_eq!(world.time, 600);
    let (x, y) = world.gazelle().position();
    assert!(x < 100 && y < 100);
    assert!(!world.grid()[(x, y)].has_tree);
    assert!(world.gazelle().vitality.hunger <= 100.0);
    assert_eq!(world.stats().moves + world.stats().blocked_moves, 40);
}

#[test]
fn test_default_world_coverage() {
    let world = World::new_with_seed(Config::default(), 2024).unwrap();

    let trees = world.grid().tree_count();
    let food = world.grid().food_cell_count();
    assert_eq!(world.terrain_report.target, 3000);
    assert!(trees >= 3000 && trees <= 3000 + 100, "trees = {trees}");
    assert!(food <= 1000, "food = {food}");
    assert!(food > 0);
}

#[test]
fn test_eating_walk() {
    let config = GazelleConfig::default();
    let mut grid = Grid::new(10);
    for y in 3..6 {
        grid.place_food(4, y, 5);
    }
    grid.place_tree(4, 7);
    let mut gazelle = Gazelle::new(4, 2, Direction::E, &config);
    gazelle.vitality.hunger = 70.0;

    let outcomes: Vec<MoveOutcome> = (0..5)
        .map(|_| gazelle.step(Direction::N, &mut grid, &config))
        .collect();

    assert!(outcomes[..3].iter().all(|o| matches!(o, MoveOutcome::Fed { amount: 5, .. })));
    assert!(matches!(outcomes[3], MoveOutcome::Moved { to: (4, 6), .. }));
    assert!(outcomes[4].is_blocked());
    assert_eq!(gazelle.position(), (4, 6));
    assert_eq!(gazelle.vitality.hunger, 10.0);
    assert_eq!(gazelle.thoughts, thoughts::MOVED);
    assert_eq!(grid.total_food(), 0);
}

#[test]
fn test_all_food_eaten_ends_session() {
    let mut config = small_config(10);
    config.terrain.coverage = 0.0;
    config.food.coverage = 0.0;
    let world = World::new_with_seed(config, 5).unwrap();
    let mut session = Session::new(world, Box::new(ScriptedPolicy::new(vec![])));

    let events = session.handle(SessionCommand::Tick).unwrap();

    assert!(events.contains(&SessionEvent::Ended(SessionStatus::AllFoodEaten)));
    assert!(!session.is_active());
}

#[test]
fn test_keyboard_and_ai_share_world() {
    let world = World::new_with_seed(small_config(40), 77).unwrap();
    let mut session = Session::new(world, Box::new(ScriptedPolicy::new(vec![Direction::S])));

    session.handle(SessionCommand::Key("PageUp".into())).unwrap();
    session.handle(SessionCommand::AiMove).unwrap();
    session.handle(SessionCommand::Tick).unwrap();

    let world = session.world();
    assert_eq!(world.stats().moves + world.stats().blocked_moves, 2);
    assert_eq!(world.time, 1);
    // The tick always has the last word on thoughts
    assert!(!world.gazelle().thoughts.is_empty());
    assert_ne!(world.gazelle().thoughts, thoughts::MOVED);
}

#[test]
fn test_terrain_never_runs_forever() {
    let mut grid = Grid::new(2);
    let config = TerrainConfig {
        coverage: 1.0,
        ..TerrainConfig::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = generate_trees(&mut grid, &config, &mut rng);

    assert_eq!(report.total(), 4);
    assert_eq!(grid.tree_count(), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_generated_worlds_hold_invariants(seed in any::<u64>(), size in 12usize..60) {
        let world = World::new_with_seed(small_config(size), seed).unwrap();
        let grid = world.grid();

        prop_assert!(grid.iter().all(|(_, _, c)| !(c.has_tree && c.has_food())));
        prop_assert!(grid.iter().all(|(_, _, c)| c.food <= 10));
        prop_assert!(grid.food_cell_count() <= (size * size) / 10);

        let (x, y) = world.gazelle().position();
        prop_assert!(grid[(x, y)].is_empty());
    }

    #[test]
    fn prop_blocked_moves_change_nothing(seed in any::<u64>(), steps in 1usize..80) {
        let mut world = World::new_with_seed(small_config(30), seed).unwrap();
        let mut policy = RandomPolicy::with_seed(seed);

        for _ in 0..steps {
            let before = world.gazelle().clone();
            let outcome = world.ai_move(&mut policy);
            if outcome.is_blocked() {
                prop_assert_eq!(world.gazelle(), &before);
            } else {
                let (x, y) = world.gazelle().position();
                prop_assert!(!world.grid()[(x, y)].has_tree);
                prop_assert_eq!(world.grid()[(x, y)].food, 0);
            }
        }
    }

    #[test]
    fn prop_view_has_fixed_extent(seed in any::<u64>()) {
        let mut world = World::new_with_seed(small_config(15), seed).unwrap();
        let mut policy = RandomPolicy::with_seed(seed ^ 0xABCD);

        for _ in 0..30 {
            world.ai_move(&mut policy);
            let view = world.surrounding_view();
            let text = view.to_string();
            prop_assert_eq!(text.lines().count(), 10);
            prop_assert!(text.lines().all(|l| l.chars().count() == 10));

            let (gx, gy) = world.gazelle().position();
            for dy in -5i64..=4 {
                for dx in -5i64..=4 {
                    let outside = !world.grid().contains(gx as i64 + dx, gy as i64 + dy);
                    prop_assert_eq!(view.at(dx, dy) == Some('#'), outside);
                }
            }
        }
    }
}
