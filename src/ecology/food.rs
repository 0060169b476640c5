//! Food placement.
//!
//! Food first sprouts along forest edges, then a few short random walks drop
//! clusters elsewhere on the plain. Both passes stop once the coverage target
//! is met.

use crate::config::FoodConfig;
use crate::ecology::terrain::coverage_target;
use crate::grid::{Grid, ORTHOGONAL};
use rand::Rng;

/// Outcome of a food generation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FoodReport {
    /// Number of food cells aimed for
    pub target: usize,
    /// Cells filled along tree edges
    pub edge_placed: usize,
    /// Cells filled by cluster walks
    pub cluster_placed: usize,
    pub clusters: usize,
}

impl FoodReport {
    pub fn total(&self) -> usize {
        self.edge_placed + self.cluster_placed
    }
}

/// Try to drop a random amount of food on a cell.
/// Returns false when the cell already holds food or a tree.
fn sprinkle(grid: &mut Grid, x: i64, y: i64, config: &FoodConfig, rng: &mut impl Rng) -> bool {
    let amount = rng.gen_range(1..=config.max_amount);
    grid.place_food(x, y, amount)
}

/// Place food on `grid` until roughly `config.coverage` of it is edible.
/// Trees must already be in place since edge placement looks for them.
pub fn generate_food(grid: &mut Grid, config: &FoodConfig, rng: &mut impl Rng) -> FoodReport {
    let size = grid.size();
    let mut report = FoodReport {
        target: coverage_target(size * size, config.coverage),
        ..Default::default()
    };
    if size == 0 {
        return report;
    }

    log::info!("Placing food: target={} cells", report.target);

    // Forest edges
    'edges: for x in 0..size as i64 {
        for y in 0..size as i64 {
            if report.total() >= report.target {
                break 'edges;
            }
            let is_edge = grid.get(x, y).is_some_and(|c| !c.has_tree) && grid.has_adjacent_tree(x, y);
            if is_edge && rng.gen::<f32>() < config.tree_edge_chance && sprinkle(grid, x, y, config, rng) {
                report.edge_placed += 1;
            }
        }
    }
    log::debug!("Food placed near trees: {}", report.edge_placed);

    // Random-walk clusters
    let max = size as i64 - 1;
    for _ in 0..config.clusters {
        if report.total() >= report.target {
            break;
        }
        let mut x = rng.gen_range(0..size) as i64;
        let mut y = rng.gen_range(0..size) as i64;
        let length = rng.gen_range(config.cluster_min..=config.cluster_max);
        log::debug!("Food cluster {} at ({x}, {y}) with length {length}", report.clusters + 1);

        for _ in 0..length {
            if report.total() >= report.target {
                break;
            }
            if sprinkle(grid, x, y, config, rng) {
                report.cluster_placed += 1;
            }
            let (dx, dy) = ORTHOGONAL[rng.gen_range(0..ORTHOGONAL.len())];
            x = (x + dx).clamp(0, max);
            y = (y + dy).clamp(0, max);
        }
        report.clusters += 1;
    }

    log::info!(
        "Food placed: {} cells ({} on tree edges, {} in {} clusters)",
        report.total(),
        report.edge_placed,
        report.cluster_placed,
        report.clusters
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerrainConfig;
    use crate::ecology::terrain::generate_trees;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_food_respects_target_and_trees() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut grid = Grid::new(100);
        generate_trees(&mut grid, &TerrainConfig::default(), &mut rng);
        let trees_before = grid.tree_count();

        let report = generate_food(&mut grid, &FoodConfig::default(), &mut rng);

        assert_eq!(report.target, 1000);
        assert_eq!(grid.food_cell_count(), report.total());
        assert!(report.total() <= report.target);
        assert_eq!(grid.tree_count(), trees_before);
        assert!(grid.iter().all(|(_, _, c)| !(c.has_tree && c.has_food())));
        assert!(grid.iter().all(|(_, _, c)| c.food <= 10));
    }

    #[test]
    fn test_edge_food_borders_trees() {
        let mut grid = Grid::new(20);
        for y in 0..20 {
            grid.place_tree(10, y);
        }
        let config = FoodConfig {
            tree_edge_chance: 1.0,
            clusters: 0,
            coverage: 1.0,
            ..FoodConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let report = generate_food(&mut grid, &config, &mut rng);

        // Both columns beside the tree line fill completely
        assert_eq!(report.edge_placed, 40);
        for (x, y, cell) in grid.iter() {
            assert_eq!(cell.has_food(), x == 9 || x == 11, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_clusters_without_trees() {
        let mut grid = Grid::new(30);
        let config = FoodConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let report = generate_food(&mut grid, &config, &mut rng);

        assert_eq!(report.edge_placed, 0);
        assert!(report.clusters <= config.clusters);
        assert!(report.cluster_placed >= 1);
        assert!(report.cluster_placed <= config.clusters * config.cluster_max);
        assert!(report.total() <= report.target);
    }

    #[test]
    fn test_full_forest_takes_no_food() {
        let mut grid = Grid::new(4);
        for x in 0..4 {
            for y in 0..4 {
                grid.place_tree(x, y);
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let report = generate_food(&mut grid, &FoodConfig::default(), &mut rng);

        assert_eq!(report.total(), 0);
        assert_eq!(grid.food_cell_count(), 0);
    }
}
