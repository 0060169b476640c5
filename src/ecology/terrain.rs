//! Clumped tree placement.
//!
//! Trees are painted in three passes until the coverage target is met:
//! a handful of large clumps, filler clumps of random size, then a sparse
//! scatter of lone trees. A clump never grows past what is left of the
//! target, so small grids are not swallowed by one large clump.
//!
//! Clumps grow by a randomized flood fill whose work queue is reshuffled
//! after every placement, giving connected, irregular shapes.

use crate::config::TerrainConfig;
use crate::grid::{Grid, ORTHOGONAL};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

/// Outcome of a terrain generation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerrainReport {
    /// Number of tree cells aimed for
    pub target: usize,
    pub large_clumps: usize,
    pub small_clumps: usize,
    /// Trees placed by the clump passes
    pub clumped: usize,
    /// Lone trees placed by the scatter pass
    pub scattered: usize,
}

impl TerrainReport {
    pub fn total(&self) -> usize {
        self.clumped + self.scattered
    }

    /// True when generation stopped short of the target
    pub fn is_short(&self) -> bool {
        self.total() < self.target
    }
}

/// Number of cells `coverage` represents on a grid of `cells` cells
pub(crate) fn coverage_target(cells: usize, coverage: f32) -> usize {
    (cells as f64 * coverage as f64).floor() as usize
}

/// Grow one clump of up to `size` trees from `(start_x, start_y)`.
///
/// Returns the number of trees placed. Cells already holding a tree or food
/// are skipped when popped; neighbours are queued without checking state.
pub fn grow_clump(
    grid: &mut Grid,
    start_x: i64,
    start_y: i64,
    size: usize,
    rng: &mut impl Rng,
) -> usize {
    let mut queue = VecDeque::from([(start_x, start_y)]);
    let mut placed = 0;

    while placed < size {
        let Some((x, y)) = queue.pop_front() else {
            break;
        };
        if !grid.place_tree(x, y) {
            continue;
        }
        placed += 1;

        for (dx, dy) in ORTHOGONAL {
            let (nx, ny) = (x + dx, y + dy);
            if grid.contains(nx, ny) {
                queue.push_back((nx, ny));
            }
        }
        queue.make_contiguous().shuffle(rng);
    }

    placed
}

/// Paint trees onto `grid` until roughly `config.coverage` of it is forest.
pub fn generate_trees(grid: &mut Grid, config: &TerrainConfig, rng: &mut impl Rng) -> TerrainReport {
    let size = grid.size();
    let mut report = TerrainReport {
        target: coverage_target(size * size, config.coverage),
        ..Default::default()
    };
    if size == 0 {
        return report;
    }
    let mut placeable = grid.empty_cells().len();

    log::info!(
        "Placing trees: target={} of {} cells",
        report.target,
        size * size
    );

    // Large clumps
    for _ in 0..config.large_clumps {
        if report.clumped >= report.target || placeable == 0 {
            break;
        }
        let x = rng.gen_range(0..size) as i64;
        let y = rng.gen_range(0..size) as i64;
        let clump_size = rng
            .gen_range(config.large_clump_min..=config.large_clump_max)
            .min(report.target - report.clumped);
        let placed = grow_clump(grid, x, y, clump_size, rng);
        log::debug!("Large clump at ({x}, {y}): wanted {clump_size}, placed {placed}");

        report.large_clumps += 1;
        report.clumped += placed;
        placeable -= placed;
    }

    // Filler clumps until the target is met
    while report.clumped < report.target {
        if placeable == 0 || report.small_clumps >= config.max_clump_attempts {
            log::warn!(
                "Tree target not reached: {} of {} after {} filler clumps",
                report.clumped,
                report.target,
                report.small_clumps
            );
            break;
        }
        let x = rng.gen_range(0..size) as i64;
        let y = rng.gen_range(0..size) as i64;
        let clump_size = rng
            .gen_range(config.small_clump_min..=config.small_clump_max)
            .min(report.target - report.clumped);
        let placed = grow_clump(grid, x, y, clump_size, rng);
        log::debug!("Small clump at ({x}, {y}): wanted {clump_size}, placed {placed}");

        report.small_clumps += 1;
        report.clumped += placed;
        placeable -= placed;
    }

    // Lone trees
    for x in 0..size as i64 {
        for y in 0..size as i64 {
            if report.total() >= report.target {
                break;
            }
            let empty = grid.get(x, y).is_some_and(|c| c.is_empty());
            if empty && rng.gen::<f32>() < config.scatter_chance && grid.place_tree(x, y) {
                report.scattered += 1;
            }
        }
    }

    log::info!(
        "Trees placed: {} ({} large clumps, {} small clumps, {} scattered)",
        report.total(),
        report.large_clumps,
        report.small_clumps,
        report.scattered
    );
    report
}
