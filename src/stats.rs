//! Statistics tracking for a running world.

use crate::gazelle::{Gazelle, MoveOutcome};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Statistics snapshot of a world
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Vitality ticks applied so far
    pub time: u64,
    /// Cells holding a tree
    pub tree_cells: usize,
    /// Cells still holding food
    pub food_cells: usize,
    /// Sum of remaining food amounts
    pub total_food: u32,
    /// Fraction of the grid covered by trees
    pub tree_coverage: f32,
    /// Fraction of the grid covered by food
    pub food_coverage: f32,
    pub hunger: f32,
    pub thirst: f32,
    /// Successful steps, including ones that ate
    pub moves: u64,
    /// Steps refused by a tree
    pub blocked_moves: u64,
    /// Food cells eaten
    pub meals: u64,
    /// Food amount eaten
    pub food_eaten: u64,
    /// Cells in the grid, for coverage
    #[serde(skip)]
    grid_cells: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recount everything from the grid. Scans every cell.
    pub fn update(&mut self, time: u64, grid: &Grid, gazelle: &Gazelle) {
        self.grid_cells = grid.size() * grid.size();
        self.tree_cells = grid.tree_count();
        self.food_cells = grid.food_cell_count();
        self.total_food = grid.total_food();
        self.tree_coverage = self.tree_cells as f32 / self.grid_cells.max(1) as f32;
        self.refresh_food_coverage();
        self.observe(time, gazelle);
    }

    /// Refresh the time and needs only
    pub fn observe(&mut self, time: u64, gazelle: &Gazelle) {
        self.time = time;
        self.hunger = gazelle.vitality.hunger;
        self.thirst = gazelle.vitality.thirst;
    }

    /// Fold a movement result into the counters.
    /// Trees never change during play, so only a meal touches the grid totals.
    pub fn record_move(&mut self, outcome: &MoveOutcome) {
        match *outcome {
            MoveOutcome::Blocked { .. } => self.blocked_moves += 1,
            MoveOutcome::Moved { .. } => self.moves += 1,
            MoveOutcome::Fed { amount, .. } => {
                self.moves += 1;
                self.meals += 1;
                self.food_eaten += amount as u64;
                self.food_cells = self.food_cells.saturating_sub(1);
                self.total_food = self.total_food.saturating_sub(amount as u32);
                self.refresh_food_coverage();
            }
        }
    }

    fn refresh_food_coverage(&mut self) {
        self.food_coverage = self.food_cells as f32 / self.grid_cells.max(1) as f32;
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== World Stats ===")?;
        writeln!(f, "Ticks: {}", self.time)?;
        writeln!(
            f,
            "Trees: {} cells ({:.1}%)",
            self.tree_cells,
            self.tree_coverage * 100.0
        )?;
        writeln!(
            f,
            "Food: {} cells ({:.1}%), {} total",
            self.food_cells,
            self.food_coverage * 100.0,
            self.total_food
        )?;
        writeln!(
            f,
            "Moves: {} ({} blocked), meals: {} ({} food)",
            self.moves, self.blocked_moves, self.meals, self.food_eaten
        )?;
        writeln!(f, "Hunger: {:.1}, thirst: {:.1}", self.hunger, self.thirst)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GazelleConfig;
    use crate::gazelle::Direction;

    #[test]
    fn test_update_coverage() {
        let mut grid = Grid::new(10);
        for x in 0..10 {
            grid.place_tree(x, 0);
        }
        grid.place_food(0, 5, 4);
        grid.place_food(1, 5, 6);
        let gazelle = Gazelle::new(5, 5, Direction::N, &GazelleConfig::default());

        let mut stats = Stats::new();
        stats.update(3, &grid, &gazelle);

        assert_eq!(stats.time, 3);
        assert_eq!(stats.tree_cells, 10);
        assert_eq!(stats.food_cells, 2);
        assert_eq!(stats.total_food, 10);
        assert!((stats.tree_coverage - 0.1).abs() < 1e-6);
        assert_eq!(stats.hunger, 60.0);
    }

    #[test]
    fn test_record_moves() {
        let mut stats = Stats::new();
        stats.record_move(&MoveOutcome::Blocked { direction: Direction::E });
        stats.record_move(&MoveOutcome::Moved {
            from: (0, 0),
            to: (1, 0),
            direction: Direction::E,
        });
        stats.record_move(&MoveOutcome::Fed {
            from: (1, 0),
            to: (2, 0),
            direction: Direction::E,
            amount: 9,
        });

        assert_eq!(stats.blocked_moves, 1);
        assert_eq!(stats.moves, 2);
        assert_eq!(stats.meals, 1);
        assert_eq!(stats.food_eaten, 9);
        assert!(stats.to_string().contains("1 blocked"));
    }

    #[test]
    fn test_meal_updates_food_totals() {
        let mut grid = Grid::new(10);
        grid.place_food(2, 2, 4);
        grid.place_food(3, 3, 6);
        let mut gazelle = Gazelle::new(2, 1, Direction::N, &GazelleConfig::default());
        let mut stats = Stats::new();
        stats.update(0, &grid, &gazelle);

        let outcome = gazelle.step(Direction::N, &mut grid, &GazelleConfig::default());
        stats.record_move(&outcome);
        stats.observe(0, &gazelle);

        assert_eq!(stats.food_cells, grid.food_cell_count());
        assert_eq!(stats.total_food, grid.total_food());
        assert_eq!(stats.total_food, 6);
        assert!((stats.food_coverage - 0.01).abs() < 1e-6);
        assert_eq!(stats.hunger, 40.0);
    }
}
