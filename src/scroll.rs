//! Damped scroll state shared by both gallery layouts.
//!
//! Input deltas land on a target offset; the published offset chases it with
//! exponential damping each frame. Bounded tracks clamp to one page run
//! [0, 1]; infinite tracks accumulate whole turns and expose the fractional
//! part as progress.

use crate::motion::damp;
use std::f32::consts::PI;

/// Sine bump centered on `center` with support `center ± half_width`:
/// 0 at the edges, exactly 1 at the center, 0 everywhere outside.
pub fn bump(x: f32, center: f32, half_width: f32) -> f32 {
    if half_width <= 0.0 {
        return 0.0;
    }
    let t = (x - (center - half_width)) / (2.0 * half_width);
    if t <= 0.0 || t >= 1.0 {
        0.0
    } else {
        (t * PI).sin()
    }
}

#[derive(Debug, Clone)]
pub struct ScrollControls {
    pages: f32,
    infinite: bool,
    horizontal: bool,
    damping: f32,
    target: f32,
    offset: f32,
}

impl ScrollControls {
    /// Bounded vertical track over `pages` screen-heights of content.
    pub fn new(pages: f32, damping: f32) -> Self {
        Self {
            pages,
            infinite: false,
            horizontal: false,
            damping,
            target: 0.0,
            offset: 0.0,
        }
    }

    /// Endless track: the offset accumulates without bounds and wraps
    /// logically via [`progress`](Self::progress).
    pub fn infinite(pages: f32, damping: f32) -> Self {
        Self {
            infinite: true,
            ..Self::new(pages, damping)
        }
    }

    /// Bounded track fed by horizontal input.
    pub fn horizontal(pages: f32, damping: f32) -> Self {
        Self {
            horizontal: true,
            ..Self::new(pages, damping)
        }
    }

    /// Adds a normalized scroll delta (1.0 = one full run of the track).
    pub fn feed(&mut self, delta: f32) {
        self.target += delta;
        if !self.infinite {
            self.target = self.target.clamp(0.0, 1.0);
        }
    }

    /// Jumps both offset and target, skipping the damped chase.
    pub fn snap_to(&mut self, offset: f32) {
        let offset = if self.infinite {
            offset
        } else {
            offset.clamp(0.0, 1.0)
        };
        self.target = offset;
        self.offset = offset;
    }

    pub fn update(&mut self, dt: f32) {
        self.offset = damp(self.offset, self.target, self.damping, dt);
    }

    /// Raw damped offset. Unbounded on infinite tracks.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Position within the current run: [0, 1] on bounded tracks,
    /// wrapped into [0, 1) on infinite ones.
    pub fn progress(&self) -> f32 {
        if self.infinite {
            self.offset.rem_euclid(1.0)
        } else {
            self.offset
        }
    }

    pub fn pages(&self) -> f32 {
        self.pages
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// Samples [`bump`] at the current progress.
    pub fn curve(&self, center: f32, half_width: f32) -> f32 {
        bump(self.progress(), center, half_width)
    }
}
