//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be reshaped from a JSON file
//! without touching the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning table is rejected
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("gap width {gap} must be narrower than the play area ({width})")]
    GapTooWide { gap: f32, width: f32 },
    #[error("ship ({ship_width}x{ship_height}) does not fit the play area ({width}x{height})")]
    ShipTooLarge {
        ship_width: f32,
        ship_height: f32,
        width: f32,
        height: f32,
    },
    #[error("minimum interval {min} ms exceeds the initial interval {initial} ms")]
    IntervalFloorAboveStart { min: f64, initial: f64 },
    #[error("star size range [{min}, {max}) is empty")]
    EmptyStarSizeRange { min: f32, max: f32 },
    #[error("star speed range [{min}, {max}) is empty")]
    EmptyStarSpeedRange { min: f32, max: f32 },
}

/// Gameplay balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub play_area_width: f32,
    pub play_area_height: f32,
    pub border_width: f32,

    pub ship_width: f32,
    pub ship_height: f32,

    pub obstacle_height: f32,
    pub obstacle_gap: f32,
    pub initial_obstacle_speed: f32,
    pub initial_obstacle_interval_ms: f64,

    pub ramp_speed_step: f32,
    pub ramp_interval_step_ms: f64,
    pub min_obstacle_interval_ms: f64,
    pub ramp_period_ms: f64,

    pub star_count: usize,
    pub star_min_size: f32,
    pub star_max_size: f32,
    pub star_min_speed: f32,
    pub star_max_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_area_width: PLAY_AREA_WIDTH,
            play_area_height: PLAY_AREA_HEIGHT,
            border_width: BORDER_WIDTH,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,

            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_gap: OBSTACLE_GAP,
            initial_obstacle_speed: INITIAL_OBSTACLE_SPEED,
            initial_obstacle_interval_ms: INITIAL_OBSTACLE_INTERVAL_MS,

            ramp_speed_step: RAMP_SPEED_STEP,
            ramp_interval_step_ms: RAMP_INTERVAL_STEP_MS,
            min_obstacle_interval_ms: MIN_OBSTACLE_INTERVAL_MS,
            ramp_period_ms: RAMP_PERIOD_MS,

            star_count: STAR_COUNT,
            star_min_size: STAR_MIN_SIZE,
            star_max_size: STAR_MAX_SIZE,
            star_min_speed: STAR_MIN_SPEED,
            star_max_speed: STAR_MAX_SPEED,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning table; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Play area size as a vector
    pub fn play_area(&self) -> Vec2 {
        Vec2::new(self.play_area_width, self.play_area_height)
    }

    /// Ship size as a vector
    pub fn ship_size(&self) -> Vec2 {
        Vec2::new(self.ship_width, self.ship_height)
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("play_area_width", self.play_area_width as f64)?;
        positive("play_area_height", self.play_area_height as f64)?;
        positive("ship_width", self.ship_width as f64)?;
        positive("ship_height", self.ship_height as f64)?;
        positive("obstacle_height", self.obstacle_height as f64)?;
        positive("obstacle_gap", self.obstacle_gap as f64)?;
        positive("initial_obstacle_interval_ms", self.initial_obstacle_interval_ms)?;
        positive("min_obstacle_interval_ms", self.min_obstacle_interval_ms)?;
        positive("ramp_period_ms", self.ramp_period_ms)?;

        non_negative("border_width", self.border_width as f64)?;
        non_negative("initial_obstacle_speed", self.initial_obstacle_speed as f64)?;
        non_negative("ramp_speed_step", self.ramp_speed_step as f64)?;
        non_negative("ramp_interval_step_ms", self.ramp_interval_step_ms)?;

        if self.obstacle_gap >= self.play_area_width {
            return Err(TuningError::GapTooWide {
                gap: self.obstacle_gap,
                width: self.play_area_width,
            });
        }
        if self.ship_width > self.play_area_width || self.ship_height > self.play_area_height {
            return Err(TuningError::ShipTooLarge {
                ship_width: self.ship_width,
                ship_height: self.ship_height,
                width: self.play_area_width,
                height: self.play_area_height,
            });
        }
        if self.min_obstacle_interval_ms > self.initial_obstacle_interval_ms {
            return Err(TuningError::IntervalFloorAboveStart {
                min: self.min_obstacle_interval_ms,
                initial: self.initial_obstacle_interval_ms,
            });
        }
        if !(self.star_min_size < self.star_max_size) {
            return Err(TuningError::EmptyStarSizeRange {
                min: self.star_min_size,
                max: self.star_max_size,
            });
        }
        if !(self.star_min_speed < self.star_max_speed) {
            return Err(TuningError::EmptyStarSpeedRange {
                min: self.star_min_speed,
                max: self.star_max_speed,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), TuningError> {
    // Also rejects NaN
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Negative { field, value })
    }
}
