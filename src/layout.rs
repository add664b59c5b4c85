use raylib::prelude::*;

use crate::constants::*;

/// Something the user can click.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Hit {
    Previous,
    Next,
    Dot(usize),
}

/// Screen geometry of the carousel for one window size.
#[derive(Debug, Clone)]
pub struct Layout {
    pub frame: Rectangle,
    pub previous: Vector2,
    pub next: Vector2,
    pub label: Vector2,
    pub dots: Vec<Vector2>,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, slide_count: usize) -> Self {
        let width = (screen_width - 2.0 * FRAME_MARGIN).clamp(0.0, MAX_FRAME_WIDTH);
        let height = (screen_height - FRAME_TOP - FOOTER_HEIGHT).max(0.0);
        let frame = Rectangle::new((screen_width - width) * 0.5, FRAME_TOP, width, height);

        let middle = frame.y + frame.height * 0.5;
        let previous = Vector2::new(frame.x + BUTTON_INSET + BUTTON_RADIUS, middle);
        let next = Vector2::new(frame.x + frame.width - BUTTON_INSET - BUTTON_RADIUS, middle);

        let bottom = frame.y + frame.height;
        let label = Vector2::new(frame.x, bottom + 16.0);

        // Dots are centred under the frame
        let dots_y = bottom + 64.0;
        let span = DOT_SPACING * slide_count.saturating_sub(1) as f32;
        let first_x = screen_width * 0.5 - span * 0.5;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + DOT_SPACING * i as f32, dots_y))
            .collect();

        Self { frame, previous, next, label, dots }
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if point.distance_to(self.previous) <= BUTTON_RADIUS {
            return Some(Hit::Previous);
        }
        if point.distance_to(self.next) <= BUTTON_RADIUS {
            return Some(Hit::Next);
        }
        // Dots get a slightly larger target than they are drawn
        self.dots
            .iter()
            .position(|dot| point.distance_to(*dot) <= DOT_RADIUS * 2.0)
            .map(Hit::Dot)
    }
}

/// Largest rectangle with the texture's aspect ratio that fits `frame`, centred.
pub fn fit_contain(tex_width: f32, tex_height: f32, frame: Rectangle) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return frame;
    }
    let scale = (frame.width / tex_width).min(frame.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new(
        frame.x + (frame.width - width) * 0.5,
        frame.y + (frame.height - height) * 0.5,
        width,
        height,
    )
}

/// Clips a `dest` rectangle to `frame`, trimming `source` by the same proportion.
/// Returns `None` when nothing of `dest` is inside the frame.
pub fn clip_to_frame(source: Rectangle, dest: Rectangle, frame: Rectangle) -> Option<(Rectangle, Rectangle)> {
    if dest.width <= 0.0 || dest.height <= 0.0 {
        return None;
    }
    let left = dest.x.max(frame.x);
    let top = dest.y.max(frame.y);
    let right = (dest.x + dest.width).min(frame.x + frame.width);
    let bottom = (dest.y + dest.height).min(frame.y + frame.height);
    if right <= left || bottom <= top {
        return None;
    }

    let sx = source.width / dest.width;
    let sy = source.height / dest.height;
    let clipped_source = Rectangle::new(
        source.x + (left - dest.x) * sx,
        source.y + (top - dest.y) * sy,
        (right - left) * sx,
        (bottom - top) * sy,
    );
    let clipped_dest = Rectangle::new(left, top, right - left, bottom - top);
    Some((clipped_source, clipped_dest))
}
