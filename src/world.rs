//! World orchestration: generation sequence plus the move/tick/query API.

use crate::config::Config;
use crate::ecology::{generate_food, generate_trees, FoodReport, TerrainReport};
use crate::error::WorldError;
use crate::gazelle::{Direction, Gazelle, MoveOutcome};
use crate::grid::Grid;
use crate::policy::MovePolicy;
use crate::snapshot::WorldSnapshot;
use crate::stats::Stats;
use crate::view::{surrounding_view, SurroundingView};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Whether play can continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Running,
    /// Health ran out
    Starved,
    /// Every food cell has been eaten
    AllFoodEaten,
}

impl SessionStatus {
    pub fn is_over(self) -> bool {
        self != SessionStatus::Running
    }
}

/// The simulation world
pub struct World {
    grid: Grid,
    gazelle: Gazelle,

    /// Vitality ticks applied so far
    pub time: u64,

    pub config: Config,

    pub terrain_report: TerrainReport,
    pub food_report: FoodReport,
    stats: Stats,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl World {
    /// Create a new world with the given configuration
    pub fn new(config: Config) -> Result<Self, WorldError> {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a new world with a specific seed for reproducibility.
    ///
    /// Runs grid, terrain, food, then gazelle placement, in that order.
    pub fn new_with_seed(config: Config, seed: u64) -> Result<Self, WorldError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let size = config.world.grid_size;

        log::info!("Generating {size}x{size} world (seed {seed})");
        let mut grid = Grid::new(size);
        let terrain_report = generate_trees(&mut grid, &config.terrain, &mut rng);
        let food_report = generate_food(&mut grid, &config.food, &mut rng);
        let gazelle = Gazelle::place(&grid, &config.gazelle, &mut rng)
            .ok_or(WorldError::NoSpawnCell { size })?;

        let mut world = Self {
            grid,
            gazelle,
            time: 0,
            config,
            terrain_report,
            food_report,
            stats: Stats::new(),
            rng,
            seed,
        };
        world.stats.update(0, &world.grid, &world.gazelle);
        Ok(world)
    }

    /// Throw the world away and generate a fresh one with a new seed
    pub fn restart(&mut self) -> Result<(), WorldError> {
        let seed = self.rng.gen();
        *self = Self::new_with_seed(self.config.clone(), seed)?;
        log::info!("World restarted with seed {seed}");
        Ok(())
    }

    /// Try to step the gazelle one cell in `direction`
    pub fn move_gazelle(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.gazelle.step(direction, &mut self.grid, &self.config.gazelle);
        match outcome {
            MoveOutcome::Blocked { .. } => {
                log::debug!("Gazelle movement {direction} was blocked");
            }
            MoveOutcome::Moved { to, .. } => {
                log::debug!("Gazelle moved {direction} to ({}, {})", to.0, to.1);
            }
            MoveOutcome::Fed { to, amount, .. } => {
                log::debug!("Gazelle ate {amount} food at ({}, {})", to.0, to.1);
            }
        }
        self.stats.record_move(&outcome);
        self.stats.observe(self.time, &self.gazelle);
        outcome
    }

    /// Apply one vitality update
    pub fn tick(&mut self) -> SessionStatus {
        self.gazelle.update_vitality(&self.config.gazelle);
        self.time += 1;
        self.stats.observe(self.time, &self.gazelle);
        self.status()
    }

    /// Let `policy` choose a heading from the current view, then move
    pub fn ai_move(&mut self, policy: &mut dyn MovePolicy) -> MoveOutcome {
        let view = self.surrounding_view();
        log::debug!("AI move ({}) - surroundings:\n{view}", policy.name());
        let direction = policy.choose(&view);
        log::debug!("AI chose direction: {direction}");
        self.move_gazelle(direction)
    }

    /// Window of the grid centred on the gazelle
    pub fn surrounding_view(&self) -> SurroundingView {
        surrounding_view(&self.gazelle, &self.grid)
    }

    pub fn status(&self) -> SessionStatus {
        if !self.gazelle.is_alive() {
            SessionStatus::Starved
        } else if self.stats.food_cells == 0 {
            SessionStatus::AllFoodEaten
        } else {
            SessionStatus::Running
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn gazelle(&self) -> &Gazelle {
        &self.gazelle
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Copy of the state a renderer needs
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::from_world(self)
    }

    /// Get seed for reproducibility
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Whole grid as text with the gazelle drawn as its heading arrow
    pub fn render_text(&self) -> String {
        let size = self.grid.size();
        let (gx, gy) = self.gazelle.position();
        let mut out = String::with_capacity(size * (size + 1) * 3);
        for y in (0..size).rev() {
            for x in 0..size {
                if (x, y) == (gx, gy) {
                    out.push(self.gazelle.direction.arrow());
                } else {
                    out.push(self.grid[(x, y)].glyph());
                }
            }
            out.push('\n');
        }
        out
    }
}
