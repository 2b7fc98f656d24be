//! Obstacle motion and ship/obstacle collision
//!
//! Everything is an axis-aligned rectangle; touching edges do not count as a hit.

use glam::Vec2;

use super::state::{Obstacle, Ship};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap test: the intersection must have positive area, so touching
    /// edges and zero-width rects never overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max().min(other.max());
        lo.cmplt(hi).all()
    }
}

impl Ship {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

impl Obstacle {
    pub fn rect(&self, height: f32) -> Rect {
        Rect::new(self.pos, Vec2::new(self.width, height))
    }
}

/// Move every obstacle down by `speed`, then drop the ones at or past the bottom edge
pub fn advance_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, play_area_height: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.y += speed;
    }
    obstacles.retain(|o| o.pos.y < play_area_height);
}

/// True if the ship overlaps any obstacle
pub fn check_collision(ship: &Ship, obstacles: &[Obstacle], obstacle_height: f32) -> bool {
    let ship_rect = ship.rect();
    obstacles
        .iter()
        .any(|o| ship_rect.overlaps(&o.rect(obstacle_height)))
}
