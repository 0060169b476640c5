//! Configuration system for the savanna world.
//!
//! Supports YAML configuration files with sensible defaults. Every section is
//! optional in the file; missing sections fall back to their defaults.

use crate::error::ConfigError;
use crate::gazelle::VitalityStats;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub terrain: TerrainConfig,
    #[serde(default)]
    pub food: FoodConfig,
    #[serde(default)]
    pub gazelle: GazelleConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// World/environment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Size of the square grid
    pub grid_size: usize,
}

/// Tree placement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Fraction of cells that should hold trees (0.0 - 1.0)
    pub coverage: f32,
    /// Number of large clumps grown first
    pub large_clumps: usize,
    /// Inclusive size range of a large clump
    pub large_clump_min: usize,
    pub large_clump_max: usize,
    /// Inclusive size range of a filler clump
    pub small_clump_min: usize,
    pub small_clump_max: usize,
    /// Per-cell chance of a lone tree in the scatter pass
    pub scatter_chance: f32,
    /// Upper bound on filler clumps before giving up on the target
    pub max_clump_attempts: usize,
}

/// Food placement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodConfig {
    /// Fraction of cells that should hold food (0.0 - 1.0)
    pub coverage: f32,
    /// Chance of food on an empty cell bordering a tree
    pub tree_edge_chance: f32,
    /// Number of random-walk clusters
    pub clusters: usize,
    /// Inclusive length range of a cluster walk
    pub cluster_min: usize,
    pub cluster_max: usize,
    /// Largest amount a single cell can hold
    pub max_amount: u8,
}

/// Gazelle needs and behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GazelleConfig {
    /// Hunger added per vitality tick
    pub hunger_drift: f32,
    /// Thirst added per vitality tick
    pub thirst_drift: f32,
    /// Hunger removed by eating one food cell
    pub feeding_relief: f32,
    /// Hunger above which the gazelle complains
    pub hunger_alarm: f32,
    /// Thirst above which the gazelle complains
    pub thirst_alarm: f32,
    /// Fear above which the gazelle feels unsafe
    pub fear_alarm: f32,
    /// Stats the gazelle starts with
    pub initial_stats: VitalityStats,
}

/// Cadence of the two independent session timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Milliseconds between vitality ticks
    pub vitality_interval_ms: u64,
    /// Milliseconds between automated moves
    pub ai_move_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { grid_size: 100 }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            coverage: 0.30,
            large_clumps: 5,
            large_clump_min: 100,
            large_clump_max: 300,
            small_clump_min: 10,
            small_clump_max: 59,
            scatter_chance: 0.01,
            max_clump_attempts: 10_000,
        }
    }
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            coverage: 0.10,
            tree_edge_chance: 0.30,
            clusters: 10,
            cluster_min: 5,
            cluster_max: 14,
            max_amount: 10,
        }
    }
}

impl Default for GazelleConfig {
    fn default() -> Self {
        Self {
            hunger_drift: 0.1,
            thirst_drift: 0.1,
            feeding_relief: 20.0,
            hunger_alarm: 80.0,
            thirst_alarm: 80.0,
            fear_alarm: 70.0,
            initial_stats: VitalityStats::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            vitality_interval_ms: 1_000,
            ai_move_interval_ms: 15_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.world.grid_size * self.world.grid_size
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.world.grid_size == 0 || self.world.grid_size > 4096 {
            return invalid("grid_size must be between 1 and 4096");
        }
        for (name, p) in [
            ("terrain.coverage", self.terrain.coverage),
            ("terrain.scatter_chance", self.terrain.scatter_chance),
            ("food.coverage", self.food.coverage),
            ("food.tree_edge_chance", self.food.tree_edge_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0.0..=1.0")));
            }
        }
        if self.terrain.large_clump_min > self.terrain.large_clump_max {
            return invalid("large_clump_min cannot exceed large_clump_max");
        }
        if self.terrain.small_clump_min == 0 || self.terrain.small_clump_min > self.terrain.small_clump_max {
            return invalid("small clump range must be non-empty and start above 0");
        }
        if self.food.cluster_min > self.food.cluster_max {
            return invalid("cluster_min cannot exceed cluster_max");
        }
        if self.food.max_amount == 0 {
            return invalid("food.max_amount must be > 0");
        }
        for (name, rate) in [
            ("gazelle.hunger_drift", self.gazelle.hunger_drift),
            ("gazelle.thirst_drift", self.gazelle.thirst_drift),
            ("gazelle.feeding_relief", self.gazelle.feeding_relief),
        ] {
            if !(0.0..=VitalityStats::MAX).contains(&rate) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0..=100")));
            }
        }
        if self.timing.vitality_interval_ms == 0 || self.timing.ai_move_interval_ms == 0 {
            return invalid("timer intervals must be > 0");
        }
        if let Some((name, value)) = self
            .gazelle
            .initial_stats
            .entries()
            .into_iter()
            .find(|(_, v)| !(0.0..=100.0).contains(v))
        {
            return Err(ConfigError::Invalid(format!(
                "initial stat {name} = {value} is outside 0..=100"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_count(), 10_000);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.world.grid_size, loaded.world.grid_size);
        assert_eq!(config.food.clusters, loaded.food.clusters);
        assert_eq!(
            config.gazelle.initial_stats.hunger,
            loaded.gazelle.initial_stats.hunger
        );
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let loaded: Config = serde_yaml::from_str("world:\n  grid_size: 20\n").unwrap();
        assert_eq!(loaded.world.grid_size, 20);
        assert_eq!(loaded.terrain.large_clumps, 5);
        assert_eq!(loaded.timing.ai_move_interval_ms, 15_000);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        config.world.grid_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.food.coverage = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.terrain.small_clump_min = 60;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gazelle.initial_stats.fear = 120.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_need_rates() {
        let mut config = Config::default();
        config.gazelle.feeding_relief = -50.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gazelle.hunger_drift = -100.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gazelle.thirst_drift = -0.1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.gazelle.hunger_drift = 0.0;
        config.gazelle.feeding_relief = 100.0;
        assert!(config.validate().is_ok());
    }
}
