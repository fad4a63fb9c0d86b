//! Equally spaced rotation angles stepped around a full turn.

use crate::util::{SpinError, SpinResult};
use std::f32::consts::TAU;

/// Default number of steps per revolution used by the scene.
pub const DEFAULT_ANGLE_STEPS: usize = 120;

/// Discrete, circular angle sequence in radians with a wrapping cursor.
#[derive(Clone, Debug)]
pub struct AngleSequencer {
    angles: Vec<f32>,
    idx: usize,
}

impl AngleSequencer {
    /// Builds `count` angles `0, step, 2*step, ...` with `step = 2π / count`.
    pub fn new(count: usize) -> SpinResult<Self> {
        if count == 0 {
            return Err(SpinError::InvalidInput("angle count must be >= 1"));
        }
        Ok(Self {
            angles: cumulative_angles(count),
            idx: 0,
        })
    }

    /// Number of discrete angles in one turn.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false; a sequencer holds at least one angle.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Angular distance between consecutive entries.
    pub fn step(&self) -> f32 {
        TAU / self.angles.len() as f32
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    /// Cursor position in `0..len()`.
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Angle at the cursor.
    pub fn current(&self) -> f32 {
        self.angles[self.idx]
    }

    /// Advances the cursor, wrapping after the last angle, and returns it.
    pub fn next(&mut self) -> f32 {
        self.idx = (self.idx + 1) % self.angles.len();
        self.current()
    }
}

impl Default for AngleSequencer {
    fn default() -> Self {
        Self {
            angles: cumulative_angles(DEFAULT_ANGLE_STEPS),
            idx: 0,
        }
    }
}

fn cumulative_angles(count: usize) -> Vec<f32> {
    let step = TAU / count as f32;
    let mut angles = Vec::with_capacity(count);
    let mut angle = 0.0f32;
    for _ in 0..count {
        angles.push(angle);
        angle += step;
    }
    angles
}
