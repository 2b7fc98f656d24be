//! Obstacle pair generation

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Obstacle};

/// Spawn a pair with a uniformly placed gap
///
/// Returns the sampled gap start.
pub fn spawn_obstacle_pair(state: &mut GameState) -> f32 {
    let max_start = state.tuning.play_area_width - state.tuning.obstacle_gap;
    let gap_start = state.rng.random_range(0.0..max_start);
    spawn_obstacle_pair_at(state, gap_start);
    gap_start
}

/// Spawn a pair whose gap opens at `gap_start`, just above the top edge
pub fn spawn_obstacle_pair_at(state: &mut GameState, gap_start: f32) {
    let width = state.tuning.play_area_width;
    let gap_end = gap_start + state.tuning.obstacle_gap;
    let y = -state.tuning.obstacle_height;

    state.obstacles.push(Obstacle {
        pos: Vec2::new(0.0, y),
        width: gap_start,
    });
    state.obstacles.push(Obstacle {
        pos: Vec2::new(gap_end, y),
        width: width - gap_end,
    });

    log::debug!(
        "Spawned obstacle pair, gap [{:.1}, {:.1}), {} active",
        gap_start,
        gap_end,
        state.obstacles.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_spawn_at_known_gap() {
        let mut state = GameState::new(Tuning::default(), 1);
        spawn_obstacle_pair_at(&mut state, 100.0);

        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(
            state.obstacles[0],
            Obstacle {
                pos: Vec2::new(0.0, -80.0),
                width: 100.0
            }
        );
        assert_eq!(
            state.obstacles[1],
            Obstacle {
                pos: Vec2::new(300.0, -80.0),
                width: 240.0
            }
        );
    }

    #[test]
    fn test_spawn_random_pair_leaves_gap() {
        let mut state = GameState::new(Tuning::default(), 42);
        for _ in 0..50 {
            state.obstacles.clear();
            let gap_start = spawn_obstacle_pair(&mut state);
            assert!((0.0..340.0).contains(&gap_start));

            let (left, right) = (state.obstacles[0], state.obstacles[1]);
            assert!((left.width + right.width - 340.0).abs() < 1e-3);
            assert!(left.span().1 <= gap_start);
            assert!(right.span().0 >= gap_start + 200.0 - 1e-3);
        }
    }
}
