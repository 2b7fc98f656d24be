//! Collaborators the session talks to
//!
//! The session never touches a display, a speaker or the DOM directly; the
//! platform layer supplies these.

use glam::Vec2;

use crate::highscores::RunSummary;
use crate::sim::{GameState, Obstacle, Ship, Star};

/// Read-only view of everything drawn in one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub play_area: Vec2,
    pub border_width: f32,
    pub stars: &'a [Star],
    pub obstacles: &'a [Obstacle],
    pub obstacle_height: f32,
    pub ship: &'a Ship,
    pub score: u64,
    pub high_score: u64,
}

impl<'a> Frame<'a> {
    pub fn new(state: &'a GameState, high_score: u64) -> Self {
        Self {
            play_area: state.tuning.play_area(),
            border_width: state.tuning.border_width,
            stars: &state.stars,
            obstacles: &state.obstacles,
            obstacle_height: state.tuning.obstacle_height,
            ship: &state.ship,
            score: state.score,
            high_score,
        }
    }
}

/// Draws a frame. Pure consumer of state.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Background music
pub trait MusicPlayer {
    fn play(&mut self);
    fn pause(&mut self);
    /// Seek back to the beginning
    fn rewind(&mut self);
}

/// End-of-run panel
pub trait EndScreen {
    fn show(&mut self, summary: &RunSummary);
    fn hide(&mut self);
}

/// Collaborator that does nothing (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Renderer for Silent {
    fn draw(&mut self, _frame: &Frame<'_>) {}
}

impl MusicPlayer for Silent {
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn rewind(&mut self) {}
}

impl EndScreen for Silent {
    fn show(&mut self, _summary: &RunSummary) {}
    fn hide(&mut self) {}
}

/// End-of-run panel that writes the summary to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEndScreen;

impl EndScreen for LogEndScreen {
    fn show(&mut self, summary: &RunSummary) {
        for line in summary.to_string().lines() {
            log::info!("{}", line);
        }
    }

    fn hide(&mut self) {}
}

/// Renderer that logs a one-line digest every `every` frames
#[derive(Debug, Clone, Default)]
pub struct TraceRenderer {
    pub every: u64,
    frames: u64,
}

impl TraceRenderer {
    pub fn new(every: u64) -> Self {
        Self { every, frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for TraceRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        if self.every > 0 && self.frames % self.every == 0 {
            log::debug!(
                "frame {}: score {} (best {}), ship ({:.0}, {:.0}), {} obstacles",
                self.frames,
                frame.score,
                frame.high_score,
                frame.ship.pos.x,
                frame.ship.pos.y,
                frame.obstacles.len()
            );
        }
    }
}
