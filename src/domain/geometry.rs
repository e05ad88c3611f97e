use nanorand::{Rng, WyRand};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_DELAY_MS: u64 = 10;
pub const MAX_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("delay bounds must be within {MIN_DELAY_MS}..={MAX_DELAY_MS} ms, got {min_ms}..{max_ms}")]
    DelayOutOfBounds { min_ms: u64, max_ms: u64 },
    #[error("delay min {min_ms} ms must not exceed max {max_ms} ms")]
    DelayInverted { min_ms: u64, max_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.x.saturating_add(self.width / 2),
            y: self.y.saturating_add(self.height / 2),
        }
    }

    /// Largest x still inside the rect. Saturates instead of overflowing on
    /// hostile coordinates.
    pub fn max_x(&self) -> i32 {
        self.x.saturating_add(self.width).saturating_sub(1)
    }

    /// Largest y still inside the rect.
    pub fn max_y(&self) -> i32 {
        self.y.saturating_add(self.height).saturating_sub(1)
    }

    /// Samples a point uniformly inside the rect. Zero-sized extents are
    /// treated as one pixel wide.
    pub fn random_point(&self, rng: &mut WyRand) -> Point {
        let span_x = self.width.max(1) as u64;
        let span_y = self.height.max(1) as u64;

        Point {
            x: self.x.saturating_add(rng.generate_range(0..span_x) as i32),
            y: self.y.saturating_add(rng.generate_range(0..span_y) as i32),
        }
    }
}

/// Inclusive delay bounds in milliseconds, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DelayBounds", into = "DelayBounds")]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, GeometryError> {
        let in_bounds = |ms| (MIN_DELAY_MS..=MAX_DELAY_MS).contains(&ms);
        if !in_bounds(min_ms) || !in_bounds(max_ms) {
            return Err(GeometryError::DelayOutOfBounds { min_ms, max_ms });
        }
        if min_ms > max_ms {
            return Err(GeometryError::DelayInverted { min_ms, max_ms });
        }

        Ok(Self { min_ms, max_ms })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    pub fn sample(&self, rng: &mut WyRand) -> u64 {
        rng.generate_range(self.min_ms..=self.max_ms)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DelayBounds {
    min_ms: u64,
    max_ms: u64,
}

impl TryFrom<DelayBounds> for DelayRange {
    type Error = GeometryError;

    fn try_from(bounds: DelayBounds) -> Result<Self, Self::Error> {
        DelayRange::new(bounds.min_ms, bounds.max_ms)
    }
}

impl From<DelayRange> for DelayBounds {
    fn from(range: DelayRange) -> Self {
        Self {
            min_ms: range.min_ms,
            max_ms: range.max_ms,
        }
    }
}
