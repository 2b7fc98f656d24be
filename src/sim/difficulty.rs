//! Difficulty ramp

use super::state::GameState;

/// Apply one ramp step: faster obstacles, shorter spawn interval (floored)
pub fn ramp_difficulty(state: &mut GameState) {
    let tuning = &state.tuning;
    state.obstacle_speed += tuning.ramp_speed_step;
    state.obstacle_interval_ms = (state.obstacle_interval_ms - tuning.ramp_interval_step_ms)
        .max(tuning.min_obstacle_interval_ms);

    log::debug!(
        "Difficulty up: speed {:.1}, interval {:.0} ms",
        state.obstacle_speed,
        state.obstacle_interval_ms
    );
}
