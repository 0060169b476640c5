//! Snapshot structures for presentation layers.
//!
//! A snapshot is a self-contained copy of what a renderer needs after a
//! mutation: the terrain, the remaining food and the gazelle.

use crate::gazelle::Gazelle;
use crate::stats::Stats;
use crate::world::{SessionStatus, World};
use serde::{Deserialize, Serialize};

/// A food cell and its amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodView {
    pub x: usize,
    pub y: usize,
    pub amount: u8,
}

/// Complete world snapshot for rendering
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: u64,
    pub seed: u64,
    pub grid_size: usize,
    pub status: SessionStatus,
    /// Tree positions, row-major
    pub trees: Vec<(usize, usize)>,
    pub food: Vec<FoodView>,
    pub gazelle: Gazelle,
    pub stats: Stats,
}

impl WorldSnapshot {
    /// Create a snapshot from the current world state
    pub fn from_world(world: &World) -> Self {
        let grid = world.grid();
        let trees = grid
            .iter()
            .filter(|(_, _, c)| c.has_tree)
            .map(|(x, y, _)| (x, y))
            .collect();
        let food = grid
            .iter()
            .filter(|(_, _, c)| c.has_food())
            .map(|(x, y, c)| FoodView { x, y, amount: c.food })
            .collect();

        Self {
            time: world.time,
            seed: world.seed(),
            grid_size: grid.size(),
            status: world.status(),
            trees,
            food,
            gazelle: world.gazelle().clone(),
            stats: world.stats().clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
