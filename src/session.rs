//! Game session state machine
//!
//! Idle -> Running once assets are ready, Running -> Ended on collision,
//! Ended -> Running on restart. The session owns the sim state, the deferred
//! spawn / difficulty chains and the high score.

use thiserror::Error;

use crate::frontend::{EndScreen, Frame, MusicPlayer, Renderer};
use crate::highscores::{RunSummary, Scoreboard};
use crate::sim::{self, GameState, TimerHandle, Timers};
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for assets
    Idle,
    /// Active gameplay
    Running,
    /// Run ended, end-of-run panel showing
    Ended,
}

/// Rejected session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {phase:?}")]
    IllegalTransition {
        action: &'static str,
        phase: SessionPhase,
    },
}

/// Result of driving one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running; schedule another frame
    Continue,
    /// This tick ended the run
    Ended(RunSummary),
    /// Not running; nothing was simulated and no frame should follow
    Stopped,
}

/// Deferred work, tagged with the run that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    SpawnObstacles { run: u32 },
    RampDifficulty { run: u32 },
}

/// One player's game: sim state plus the state machine around it
pub struct Session {
    state: GameState,
    phase: SessionPhase,
    scoreboard: Scoreboard,
    timers: Timers<Deferred>,
    /// Pending spawn, revoked when the run ends
    spawn_timer: Option<TimerHandle>,
    /// Incremented each time Running is entered
    run: u32,
    last_summary: Option<RunSummary>,
    music: Box<dyn MusicPlayer>,
    end_screen: Box<dyn EndScreen>,
}

impl Session {
    /// Build an Idle session; the tuning table is validated first
    pub fn new(
        tuning: Tuning,
        seed: u64,
        music: Box<dyn MusicPlayer>,
        end_screen: Box<dyn EndScreen>,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!("Session created with seed: {}", seed);
        Ok(Self {
            state: GameState::new(tuning, seed),
            phase: SessionPhase::Idle,
            scoreboard: Scoreboard::new(),
            timers: Timers::new(),
            spawn_timer: None,
            run: 0,
            last_summary: None,
            music,
            end_screen,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for drivers and tests that script entity positions
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn high_score(&self) -> u64 {
        self.scoreboard.high_score()
    }

    /// Summary of the most recently ended run
    pub fn last_summary(&self) -> Option<RunSummary> {
        self.last_summary
    }

    /// Simulated clock reading
    pub fn now_ms(&self) -> f64 {
        self.timers.now_ms()
    }

    /// Current frame view, e.g. to redraw while Ended
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.state, self.scoreboard.high_score())
    }

    /// Input mapping: center the ship on a play-area point
    pub fn move_ship_to(&mut self, x: f32, y: f32) {
        self.state.move_ship_to(x, y);
    }

    /// Required assets finished loading: Idle -> Running
    pub fn assets_ready(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Idle {
            return Err(self.illegal("start"));
        }
        self.enter_running();
        self.music.play();
        Ok(())
    }

    /// Asset loading failed; the session stays Idle
    pub fn assets_failed(&mut self, reason: &str) {
        log::warn!("Assets failed to load, game will not start: {}", reason);
    }

    /// Explicit user restart: Ended -> Running
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.phase != SessionPhase::Ended {
            return Err(self.illegal("restart"));
        }
        self.end_screen.hide();
        self.state.reset_run();
        self.enter_running();
        self.music.rewind();
        self.music.play();
        Ok(())
    }

    /// Advance the simulated clock, firing every deferred callback that comes due
    ///
    /// Catches up fully: a long advance fires every spawn that fell inside it,
    /// while obstacles only move (and get pruned) on `tick`. Frame drivers should
    /// clamp `elapsed_ms` to about one frame's worth.
    pub fn advance_clock(&mut self, elapsed_ms: f64) {
        let until = self.timers.now_ms() + elapsed_ms.max(0.0);
        while let Some(deferred) = self.timers.pop_due(until) {
            self.fire(deferred);
        }
        self.timers.settle(until);
    }

    /// One frame: stars, obstacles, render, score, collision
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Stopped;
        }

        let high_score = self.scoreboard.high_score();
        let report = sim::tick(&mut self.state, |state| {
            renderer.draw(&Frame::new(state, high_score));
        });

        if report.collided {
            TickOutcome::Ended(self.end_run())
        } else {
            TickOutcome::Continue
        }
    }

    /// Convenience for frame-driven loops: advance the clock, then tick
    pub fn frame_elapsed<R: Renderer + ?Sized>(
        &mut self,
        elapsed_ms: f64,
        renderer: &mut R,
    ) -> TickOutcome {
        self.advance_clock(elapsed_ms);
        self.tick(renderer)
    }

    fn illegal(&self, action: &'static str) -> SessionError {
        log::warn!("Ignoring {} while {:?}", action, self.phase);
        SessionError::IllegalTransition {
            action,
            phase: self.phase,
        }
    }

    fn enter_running(&mut self) {
        self.run += 1;
        self.phase = SessionPhase::Running;
        let run = self.run;

        // Both chains start on the next clock advance
        self.spawn_timer = Some(self.timers.schedule(0.0, Deferred::SpawnObstacles { run }));
        self.timers.schedule(0.0, Deferred::RampDifficulty { run });

        log::info!("Run {} started", run);
    }

    fn end_run(&mut self) -> RunSummary {
        self.phase = SessionPhase::Ended;
        if let Some(handle) = self.spawn_timer.take() {
            self.timers.cancel(handle);
        }

        let summary = self.scoreboard.record_run(self.state.score);
        self.end_screen.show(&summary);
        self.music.pause();
        self.last_summary = Some(summary);

        log::info!(
            "Run {} ended: score {}, high score {}",
            self.run,
            summary.score,
            summary.high_score
        );
        summary
    }

    fn fire(&mut self, deferred: Deferred) {
        match deferred {
            Deferred::SpawnObstacles { run } => {
                if !self.owns(run) {
                    log::debug!("Dropping spawn from run {}", run);
                    return;
                }
                sim::spawn_obstacle_pair(&mut self.state);
                let delay = self.state.obstacle_interval_ms;
                self.spawn_timer = Some(
                    self.timers
                        .schedule(delay, Deferred::SpawnObstacles { run }),
                );
            }
            Deferred::RampDifficulty { run } => {
                if !self.owns(run) {
                    log::debug!("Dropping difficulty ramp from run {}", run);
                    return;
                }
                sim::ramp_difficulty(&mut self.state);
                let period = self.state.tuning.ramp_period_ms;
                self.timers
                    .schedule(period, Deferred::RampDifficulty { run });
            }
        }
    }

    /// Deferred work only acts on the run that scheduled it, and only while it runs
    fn owns(&self, run: u32) -> bool {
        self.is_running() && run == self.run
    }
}
