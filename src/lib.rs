//! # SAVANNA
//!
//! Procedural savanna grid with a single gazelle.
//!
//! ## Features
//!
//! - **Clumped terrain**: trees grown by a shuffled flood fill up to a coverage target
//! - **Clustered food**: food along forest edges plus random-walk clusters
//! - **A gazelle with needs**: hunger and thirst drift, eating relieves hunger,
//!   thoughts follow the most pressing need
//! - **Pluggable movers**: keyboard bindings or any [`policy::MovePolicy`]
//! - **Reproducible**: seeded random number generation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use savanna::{Config, Direction, World};
//!
//! let mut world = World::new(Config::default()).unwrap();
//!
//! let outcome = world.move_gazelle(Direction::N);
//! world.tick();
//!
//! println!("{:?}", outcome);
//! println!("{}", world.surrounding_view());
//! println!("Thinking: {}", world.gazelle().thoughts);
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use savanna::Config;
//!
//! let mut config = Config::default();
//! config.world.grid_size = 50;
//! config.terrain.coverage = 0.25;
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod ecology;
pub mod error;
pub mod gazelle;
pub mod grid;
pub mod input;
pub mod policy;
pub mod session;
pub mod snapshot;
pub mod stats;
pub mod view;
pub mod world;

// Re-export main types
pub use config::Config;
pub use error::{ConfigError, WorldError};
pub use gazelle::{Direction, Gazelle, MoveOutcome, VitalityStats};
pub use grid::{is_valid_position, Cell, Grid};
pub use session::{Session, SessionCommand, SessionEvent};
pub use view::SurroundingView;
pub use world::{SessionStatus, World};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
