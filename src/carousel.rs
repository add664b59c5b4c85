use log::debug;

use crate::error::{CarouselError, Result};
use crate::slide::SlideDescriptor;
use crate::state::Direction;

/// Cursor over a fixed sequence of slides with wrap-around navigation.
///
/// An empty sequence is allowed: every transition is then a no-op and
/// [`Carousel::current`] returns `None`.
#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<SlideDescriptor>,
    cursor: usize,
}

impl Carousel {
    pub fn new(slides: Vec<SlideDescriptor>) -> Self {
        Self { slides, cursor: 0 }
    }

    /// Moves to the next slide, wrapping from the last to the first.
    pub fn advance(&mut self) -> Option<Direction> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        self.cursor = (self.cursor + 1) % len;
        debug!("advanced to slide {}/{}", self.cursor + 1, len);
        Some(Direction::Forward)
    }

    /// Moves to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) -> Option<Direction> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        self.cursor = (self.cursor + len - 1) % len;
        debug!("retreated to slide {}/{}", self.cursor + 1, len);
        Some(Direction::Backward)
    }

    /// Jumps straight to `index`. Returns `Ok(None)` when already there.
    pub fn go_to(&mut self, index: usize) -> Result<Option<Direction>> {
        let len = self.slides.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        let direction = match index.cmp(&self.cursor) {
            std::cmp::Ordering::Equal => return Ok(None),
            std::cmp::Ordering::Greater => Direction::Forward,
            std::cmp::Ordering::Less => Direction::Backward,
        };
        self.cursor = index;
        debug!("jumped to slide {}/{}", index + 1, len);
        Ok(Some(direction))
    }

    pub fn current(&self) -> Option<&SlideDescriptor> {
        self.slides.get(self.cursor)
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Navigation affordances are only mounted when this is true.
    pub fn is_navigable(&self) -> bool {
        !self.slides.is_empty()
    }
}
