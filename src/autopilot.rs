//! Demo mode - steers the ship toward the next gap
//!
//! Used by the headless runner. The ship moves at a capped speed, so the
//! autopilot eventually loses once obstacles get fast enough.

use glam::Vec2;

use crate::sim::{GameState, Obstacle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autopilot {
    /// Maximum horizontal travel per tick
    pub max_step: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { max_step: 6.0 }
    }
}

impl Autopilot {
    /// Point to feed into `move_ship_to` for this tick
    pub fn steer(&self, state: &GameState) -> Vec2 {
        let center = state.ship.center();
        let Some(gap_center) = upcoming_gap_center(state) else {
            return center;
        };
        let dx = (gap_center - center.x).clamp(-self.max_step, self.max_step);
        Vec2::new(center.x + dx, center.y)
    }
}

/// Center of the gap in the lowest pair that has not yet dropped past the ship
pub fn upcoming_gap_center(state: &GameState) -> Option<f32> {
    let ship_bottom = state.ship.pos.y + state.ship.size.y;

    // Both halves of a pair share y and are pruned together, so pairs stay adjacent
    state
        .obstacles
        .chunks_exact(2)
        .filter(|pair| pair[0].pos.y < ship_bottom)
        .max_by(|a, b| a[0].pos.y.total_cmp(&b[0].pos.y))
        .map(|pair| gap_center(&pair[0], &pair[1]))
}

fn gap_center(left: &Obstacle, right: &Obstacle) -> f32 {
    (left.span().1 + right.span().0) / 2.0
}
