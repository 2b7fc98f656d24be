//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform dependencies:
//! - One update per tick, no wall-clock reads
//! - Seeded RNG only
//! - Deferred work goes through `Timers`

pub mod collision;
pub mod difficulty;
pub mod spawner;
pub mod starfield;
pub mod state;
pub mod tick;
pub mod timers;

pub use collision::{Rect, advance_obstacles, check_collision};
pub use difficulty::ramp_difficulty;
pub use spawner::{spawn_obstacle_pair, spawn_obstacle_pair_at};
pub use starfield::{advance_stars, create_stars};
pub use state::{GameState, Obstacle, Ship, Star};
pub use tick::{TickReport, tick};
pub use timers::{TimerHandle, Timers};
