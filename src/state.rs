use std::fmt;

use raylib::prelude::*;

use crate::constants::SLIDE_DURATION;

/// Which way the cursor moved.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Side the incoming slide enters from: +1 right, -1 left.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

#[derive(Debug)]
pub enum CarouselState {
    Idle,                   // Current slide at rest in the frame
    Sliding(Transition),    // Current slide entering, previous one leaving
}

/// Slide-in animation from one cursor position to the current one.
pub struct Transition {
    pub from: usize,
    pub direction: Direction,
    tween_offset: ease::Tween,
    /// Fraction of the frame width the incoming slide still has to travel (1 -> 0).
    pub offset: f32,
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("direction", &self.direction)
            .field("offset", &self.offset)
            .finish()
    }
}

impl Transition {
    pub fn new(from: usize, direction: Direction) -> Self {
        Self {
            from,
            direction,
            tween_offset: ease::Tween::new(ease::cubic_out, 1.0, 0.0, SLIDE_DURATION),
            offset: 1.0,
        }
    }

    /// Steps the animation, returns true once it has finished.
    pub fn update(&mut self, dt: f32) -> bool {
        self.offset = self.tween_offset.apply(dt);
        if self.tween_offset.has_completed() {
            self.offset = 0.0;
            return true;
        }
        false
    }
}

impl CarouselState {
    pub fn update(&mut self, dt: f32) {
        if let CarouselState::Sliding(transition) = self {
            if transition.update(dt) {
                *self = CarouselState::Idle;
            }
        }
    }
}
