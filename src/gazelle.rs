//! The gazelle: position, heading, needs and what it is thinking about.

use crate::config::GazelleConfig;
use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed phrases the gazelle can think
pub mod thoughts {
    pub const INITIAL: &str = "Just grazing...";
    pub const MOVED: &str = "Just moved.";
    pub const FED: &str = "Yum! That was tasty!";
    pub const HUNGRY: &str = "I'm getting really hungry...";
    pub const THIRSTY: &str = "I need to find water soon...";
    pub const AFRAID: &str = "I feel unsafe. Need to be careful.";
    pub const CONTENT: &str = "Just grazing and enjoying the day.";
}

/// Compass heading. North is +y, east is +x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// Unit step `(dx, dy)` for this heading
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::N => (0, 1),
            Direction::NE => (1, 1),
            Direction::E => (1, 0),
            Direction::SE => (1, -1),
            Direction::S => (0, -1),
            Direction::SW => (-1, -1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, 1),
        }
    }

    /// Uniformly random heading
    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Direction::N)
    }

    /// Arrow shown next to the gazelle
    pub fn arrow(self) -> char {
        match self {
            Direction::N => '↑',
            Direction::NE => '↗',
            Direction::E => '→',
            Direction::SE => '↘',
            Direction::S => '↓',
            Direction::SW => '↙',
            Direction::W => '←',
            Direction::NW => '↖',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown direction: {s}"))
    }
}

/// Named needs and abilities, each kept within `[0, 100]`.
///
/// Only hunger and thirst change on their own; the rest are carried as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityStats {
    pub health: f32,
    pub stamina: f32,
    pub movement_speed: f32,
    pub agility: f32,
    pub endurance: f32,
    pub stealth: f32,
    pub recovery_rate: f32,
    pub strength: f32,
    pub physical_alertness: f32,
    pub resistance_to_injury: f32,
    pub fear: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub curiosity: f32,
    pub mental_alertness: f32,
    pub confidence: f32,
    pub social_interaction: f32,
    pub doubt: f32,
    pub stress: f32,
    pub mental_focus: f32,
}

impl Default for VitalityStats {
    fn default() -> Self {
        Self {
            health: 100.0,
            stamina: 80.0,
            movement_speed: 60.0,
            agility: 90.0,
            endurance: 75.0,
            stealth: 70.0,
            recovery_rate: 65.0,
            strength: 50.0,
            physical_alertness: 85.0,
            resistance_to_injury: 55.0,
            fear: 40.0,
            hunger: 60.0,
            thirst: 55.0,
            curiosity: 50.0,
            mental_alertness: 70.0,
            confidence: 45.0,
            social_interaction: 65.0,
            doubt: 30.0,
            stress: 50.0,
            mental_focus: 55.0,
        }
    }
}

impl VitalityStats {
    pub const MIN: f32 = 0.0;
    pub const MAX: f32 = 100.0;

    /// All stats by name, in declaration order
    pub fn entries(&self) -> [(&'static str, f32); 20] {
        [
            ("health", self.health),
            ("stamina", self.stamina),
            ("movement_speed", self.movement_speed),
            ("agility", self.agility),
            ("endurance", self.endurance),
            ("stealth", self.stealth),
            ("recovery_rate", self.recovery_rate),
            ("strength", self.strength),
            ("physical_alertness", self.physical_alertness),
            ("resistance_to_injury", self.resistance_to_injury),
            ("fear", self.fear),
            ("hunger", self.hunger),
            ("thirst", self.thirst),
            ("curiosity", self.curiosity),
            ("mental_alertness", self.mental_alertness),
            ("confidence", self.confidence),
            ("social_interaction", self.social_interaction),
            ("doubt", self.doubt),
            ("stress", self.stress),
            ("mental_focus", self.mental_focus),
        ]
    }

    /// Clamp every stat into range
    pub fn clamp_all(&mut self) {
        for stat in [
            &mut self.health,
            &mut self.stamina,
            &mut self.movement_speed,
            &mut self.agility,
            &mut self.endurance,
            &mut self.stealth,
            &mut self.recovery_rate,
            &mut self.strength,
            &mut self.physical_alertness,
            &mut self.resistance_to_injury,
            &mut self.fear,
            &mut self.hunger,
            &mut self.thirst,
            &mut self.curiosity,
            &mut self.mental_alertness,
            &mut self.confidence,
            &mut self.social_interaction,
            &mut self.doubt,
            &mut self.stress,
            &mut self.mental_focus,
        ] {
            *stat = stat.clamp(Self::MIN, Self::MAX);
        }
    }
}

/// Result of asking the gazelle to step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A tree stands in the way; nothing changed
    Blocked { direction: Direction },
    Moved {
        from: (usize, usize),
        to: (usize, usize),
        direction: Direction,
    },
    /// Moved onto food and ate all of it
    Fed {
        from: (usize, usize),
        to: (usize, usize),
        direction: Direction,
        amount: u8,
    },
}

impl MoveOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gazelle {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub vitality: VitalityStats,
    pub thoughts: String,
}

impl Gazelle {
    pub fn new(x: usize, y: usize, direction: Direction, config: &GazelleConfig) -> Self {
        let mut vitality = config.initial_stats.clone();
        vitality.clamp_all();
        Self {
            x,
            y,
            direction,
            vitality,
            thoughts: thoughts::INITIAL.to_string(),
        }
    }

    /// Drop the gazelle on a random cell with neither tree nor food,
    /// facing a random direction. `None` when no such cell exists.
    pub fn place(grid: &Grid, config: &GazelleConfig, rng: &mut impl Rng) -> Option<Self> {
        let &(x, y) = grid.empty_cells().choose(rng)?;
        let direction = Direction::random(rng);
        log::info!("Gazelle placed at ({x}, {y}) facing {direction}");
        Some(Self::new(x, y, direction, config))
    }

    #[inline]
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Cell one step away in `direction`, clamped to the grid on each axis
    pub fn target(&self, direction: Direction, size: usize) -> (usize, usize) {
        let (dx, dy) = direction.delta();
        let max = size.saturating_sub(1) as i64;
        let x = (self.x as i64 + dx).clamp(0, max) as usize;
        let y = (self.y as i64 + dy).clamp(0, max) as usize;
        (x, y)
    }

    /// Step one cell in `direction`, eating whatever food is there.
    pub fn step(&mut self, direction: Direction, grid: &mut Grid, config: &GazelleConfig) -> MoveOutcome {
        let from = self.position();
        let to = self.target(direction, grid.size());

        if grid[to].has_tree {
            return MoveOutcome::Blocked { direction };
        }

        self.x = to.0;
        self.y = to.1;
        self.direction = direction;

        let amount = grid.take_food(to.0 as i64, to.1 as i64);
        if amount > 0 {
            self.vitality.hunger = (self.vitality.hunger - config.feeding_relief)
                .clamp(VitalityStats::MIN, VitalityStats::MAX);
            self.thoughts = thoughts::FED.to_string();
            MoveOutcome::Fed {
                from,
                to,
                direction,
                amount,
            }
        } else {
            self.thoughts = thoughts::MOVED.to_string();
            MoveOutcome::Moved { from, to, direction }
        }
    }

    /// Advance needs by one tick and rethink.
    pub fn update_vitality(&mut self, config: &GazelleConfig) {
        let stats = &mut self.vitality;
        stats.hunger = (stats.hunger + config.hunger_drift).clamp(VitalityStats::MIN, VitalityStats::MAX);
        stats.thirst = (stats.thirst + config.thirst_drift).clamp(VitalityStats::MIN, VitalityStats::MAX);

        let thought = if stats.hunger > config.hunger_alarm {
            thoughts::HUNGRY
        } else if stats.thirst > config.thirst_alarm {
            thoughts::THIRSTY
        } else if stats.fear > config.fear_alarm {
            thoughts::AFRAID
        } else {
            thoughts::CONTENT
        };
        self.thoughts = thought.to_string();
    }

    pub fn is_alive(&self) -> bool {
        self.vitality.health > 0.0
    }
}
