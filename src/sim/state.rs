//! Game state and core simulation types
//!
//! Plain entity records plus the aggregate the session owns.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::starfield;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
}

impl Ship {
    /// A ship centered in the play area
    pub fn centered(size: Vec2, play_area: Vec2) -> Self {
        Self {
            pos: (play_area - size) / 2.0,
            size,
        }
    }

    /// Center the ship on a play-area point, keeping it fully inside the play area
    pub fn move_to(&mut self, target: Vec2, play_area: Vec2) {
        self.pos = target - self.size / 2.0;
        self.clamp_to(play_area);
    }

    fn clamp_to(&mut self, play_area: Vec2) {
        let max = (play_area - self.size).max(Vec2::ZERO);
        self.pos = self.pos.clamp(Vec2::ZERO, max);
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// A decorative background point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Fall speed (units per tick)
    pub speed: f32,
}

/// One half of an obstacle pair
///
/// Height is shared by every segment (`Tuning::obstacle_height`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
}

impl Obstacle {
    /// Horizontal extent `[start, end)`
    pub fn span(&self) -> (f32, f32) {
        (self.pos.x, self.pos.x + self.width)
    }
}

/// Complete simulation state for one process
///
/// Score, obstacles and difficulty are reset per run; the starfield and RNG
/// carry over.
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub ship: Ship,
    pub stars: Vec<Star>,
    pub obstacles: Vec<Obstacle>,
    /// Ticks survived this run
    pub score: u64,
    /// Units per tick, only grows during a run
    pub obstacle_speed: f32,
    /// Delay before the next pair, only shrinks during a run
    pub obstacle_interval_ms: f64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    ///
    /// Expects a table that passed `Tuning::validate`; `Session::new` checks it.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = starfield::create_stars(&tuning, &mut rng);
        let ship = Ship::centered(tuning.ship_size(), tuning.play_area());

        Self {
            ship,
            stars,
            obstacles: Vec::new(),
            score: 0,
            obstacle_speed: tuning.initial_obstacle_speed,
            obstacle_interval_ms: tuning.initial_obstacle_interval_ms,
            seed,
            rng,
            tuning,
        }
    }

    /// Reset everything a new run starts from
    pub fn reset_run(&mut self) {
        self.obstacles.clear();
        self.score = 0;
        self.obstacle_speed = self.tuning.initial_obstacle_speed;
        self.obstacle_interval_ms = self.tuning.initial_obstacle_interval_ms;
        self.ship = Ship::centered(self.tuning.ship_size(), self.tuning.play_area());
    }

    /// Map an input point onto the ship
    pub fn move_ship_to(&mut self, x: f32, y: f32) {
        let play_area = self.tuning.play_area();
        self.ship.move_to(Vec2::new(x, y), play_area);
    }
}
