//! Per-frame simulation tick
//!
//! Advances the world by one frame. Rendering happens mid-tick through the
//! caller's closure so the drawn frame shows the moved world with the score
//! from before this tick.

use super::collision::{advance_obstacles, check_collision};
use super::starfield::advance_stars;
use super::state::GameState;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Score after the tick
    pub score: u64,
    /// Ship overlapped an obstacle
    pub collided: bool,
}

/// Advance the game state by one frame
pub fn tick<F>(state: &mut GameState, render: F) -> TickReport
where
    F: FnOnce(&GameState),
{
    let play_area = state.tuning.play_area();

    advance_stars(&mut state.stars, play_area, &mut state.rng);
    advance_obstacles(&mut state.obstacles, state.obstacle_speed, play_area.y);

    render(state);

    state.score += 1;

    let collided = check_collision(&state.ship, &state.obstacles, state.tuning.obstacle_height);

    TickReport {
        score: state.score,
        collided,
    }
}
