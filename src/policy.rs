//! Automated movers: anything that turns a surrounding view into a heading.

use crate::gazelle::Direction;
use crate::view::SurroundingView;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Decides where the gazelle goes next from what it can see
pub trait MovePolicy {
    fn choose(&mut self, view: &SurroundingView) -> Direction;

    fn name(&self) -> &str;
}

/// Ignores the view and picks a uniformly random heading
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, _view: &SurroundingView) -> Direction {
        Direction::random(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Replays a fixed list of headings, wrapping around at the end
pub struct ScriptedPolicy {
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedPolicy {
    /// An empty script always heads north
    pub fn new(script: Vec<Direction>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl MovePolicy for ScriptedPolicy {
    fn choose(&mut self, _view: &SurroundingView) -> Direction {
        if self.script.is_empty() {
            return Direction::N;
        }
        let direction = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        direction
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GazelleConfig;
    use crate::gazelle::Gazelle;
    use crate::grid::Grid;
    use crate::view::surrounding_view;
    use std::collections::HashSet;

    fn any_view() -> SurroundingView {
        let grid = Grid::new(10);
        let gazelle = Gazelle::new(5, 5, Direction::N, &GazelleConfig::default());
        surrounding_view(&gazelle, &grid)
    }

    #[test]
    fn test_random_policy_covers_all_directions() {
        let view = any_view();
        let mut policy = RandomPolicy::with_seed(1);
        let seen: HashSet<Direction> = (0..500).map(|_| policy.choose(&view)).collect();
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_random_policy_seeded_is_repeatable() {
        let view = any_view();
        let mut a = RandomPolicy::with_seed(77);
        let mut b = RandomPolicy::with_seed(77);
        for _ in 0..20 {
            assert_eq!(a.choose(&view), b.choose(&view));
        }
    }

    #[test]
    fn test_scripted_policy_wraps() {
        let view = any_view();
        let mut policy = ScriptedPolicy::new(vec![Direction::E, Direction::S]);
        let picks: Vec<_> = (0..5).map(|_| policy.choose(&view)).collect();
        assert_eq!(
            picks,
            vec![Direction::E, Direction::S, Direction::E, Direction::S, Direction::E]
        );
        assert_eq!(ScriptedPolicy::new(vec![]).choose(&view), Direction::N);
    }
}
