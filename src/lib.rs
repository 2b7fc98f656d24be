//! Star Dodger - A single-screen arcade avoider
//!
//! Core modules:
//! - `sim`: Simulation (entities, starfield, spawner, difficulty, collision, timers)
//! - `session`: Idle/Running/Ended state machine driving the sim
//! - `frontend`: Collaborator traits for rendering, music and the end-of-run panel
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod autopilot;
#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod frontend;
pub mod highscores;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use frontend::{EndScreen, Frame, MusicPlayer, Renderer};
pub use highscores::{RunSummary, Scoreboard};
pub use session::{Session, SessionError, SessionPhase, TickOutcome};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (9:16 portrait, logical units)
    pub const PLAY_AREA_WIDTH: f32 = 540.0;
    pub const PLAY_AREA_HEIGHT: f32 = 960.0;
    /// Decorative frame drawn around the play area
    pub const BORDER_WIDTH: f32 = 20.0;

    /// Ship bounding box
    pub const SHIP_WIDTH: f32 = 50.0;
    pub const SHIP_HEIGHT: f32 = 50.0;

    /// Obstacle geometry
    pub const OBSTACLE_HEIGHT: f32 = 80.0;
    pub const OBSTACLE_GAP: f32 = 200.0;

    /// Obstacle speed at the start of a run (units per tick)
    pub const INITIAL_OBSTACLE_SPEED: f32 = 2.0;
    /// Delay between obstacle pairs at the start of a run
    pub const INITIAL_OBSTACLE_INTERVAL_MS: f64 = 2000.0;

    /// Difficulty ramp: applied every `RAMP_PERIOD_MS`
    pub const RAMP_SPEED_STEP: f32 = 0.5;
    pub const RAMP_INTERVAL_STEP_MS: f64 = 100.0;
    pub const MIN_OBSTACLE_INTERVAL_MS: f64 = 500.0;
    pub const RAMP_PERIOD_MS: f64 = 5000.0;

    /// Starfield
    pub const STAR_COUNT: usize = 100;
    pub const STAR_MIN_SIZE: f32 = 1.0;
    pub const STAR_MAX_SIZE: f32 = 3.0;
    pub const STAR_MIN_SPEED: f32 = 0.5;
    pub const STAR_MAX_SPEED: f32 = 1.5;

    /// Nominal display refresh used by simulated drivers
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
