//! Procedural placement of the savanna's features.
//!
//! This module contains:
//! - Terrain generation (clumped trees)
//! - Food generation (tree edges and random-walk clusters)
//!
//! Trees must be placed before food, since food placement looks for forest edges.

pub mod food;
pub mod terrain;

pub use food::{generate_food, FoodReport};
pub use terrain::{generate_trees, grow_clump, TerrainReport};
