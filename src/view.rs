use log::{debug, warn};
use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::layout::{clip_to_frame, fit_contain, Hit, Layout};
use crate::slide::SlideDescriptor;
use crate::snippet::DEFAULT_STRATEGY_CODE;
use crate::state::{CarouselState, Direction, Transition};

/// User intent, decoupled from the raylib event that produced it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Previous,
    Next,
    GoTo(usize),
    ToggleStrategy,
}

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

pub fn action_for_key(key: KeyboardKey) -> Option<Action> {
    match key {
        KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_D => Some(Action::Next),
        KeyboardKey::KEY_LEFT | KeyboardKey::KEY_A => Some(Action::Previous),
        KeyboardKey::KEY_TAB => Some(Action::ToggleStrategy),
        _ => DIGIT_KEYS.iter().position(|k| *k == key).map(Action::GoTo),
    }
}

pub fn action_for_hit(hit: Hit) -> Action {
    match hit {
        Hit::Previous => Action::Previous,
        Hit::Next => Action::Next,
        Hit::Dot(index) => Action::GoTo(index),
    }
}

/// Everything the surface needs to decide what to draw, minus GPU resources.
#[derive(Debug)]
pub struct ViewState {
    pub carousel: Carousel,
    pub state: CarouselState,
    pub show_strategy: bool,
}

impl ViewState {
    pub fn new(carousel: Carousel, show_strategy: bool) -> Self {
        Self {
            carousel,
            state: CarouselState::Idle,
            show_strategy,
        }
    }

    pub fn apply(&mut self, action: Action) {
        if action == Action::ToggleStrategy {
            self.show_strategy = !self.show_strategy;
            return;
        }
        // Navigation is not mounted for an empty sequence
        if !self.carousel.is_navigable() {
            return;
        }

        let from = self.carousel.position();
        let moved = match action {
            Action::Next => self.carousel.advance(),
            Action::Previous => self.carousel.retreat(),
            Action::GoTo(index) => match self.carousel.go_to(index) {
                Ok(direction) => direction,
                Err(e) => {
                    debug!("Ignoring jump: {}", e);
                    None
                }
            },
            Action::ToggleStrategy => None,
        };

        // Single slide sequences wrap onto themselves, nothing to animate
        if let Some(direction) = moved {
            if self.carousel.position() != from {
                self.start_transition(from, direction);
            }
        }
    }

    /// A running transition is considered complete once a new one starts.
    fn start_transition(&mut self, from: usize, direction: Direction) {
        self.state = CarouselState::Sliding(Transition::new(from, direction));
    }

    pub fn update(&mut self, dt: f32) {
        self.state.update(dt);
    }
}

pub struct CarouselView {
    title: String,
    view: ViewState,
    textures: Vec<Option<Texture2D>>,
}

impl CarouselView {
    pub fn new(title: String, view: ViewState, textures: Vec<Option<Texture2D>>) -> Self {
        if textures.len() != view.carousel.len() {
            warn!(
                "Got {} textures for {} slides, missing ones become placeholders",
                textures.len(),
                view.carousel.len()
            );
        }
        Self { title, view, textures }
    }

    fn poll_actions(&self, rl: &RaylibHandle, layout: &Layout) -> Vec<Action> {
        let mut actions = Vec::new();

        for key in [
            KeyboardKey::KEY_RIGHT,
            KeyboardKey::KEY_D,
            KeyboardKey::KEY_LEFT,
            KeyboardKey::KEY_A,
            KeyboardKey::KEY_TAB,
        ]
        .into_iter()
        .chain(DIGIT_KEYS)
        {
            if rl.is_key_pressed(key) {
                actions.extend(action_for_key(key));
            }
        }

        if self.view.carousel.is_navigable() && rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(hit) = layout.hit_test(rl.get_mouse_position()) {
                actions.push(action_for_hit(hit));
            }
        }

        actions
    }

    /// Processes one frame: input, animation, drawing.
    pub fn frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;
        let layout = Layout::compute(sw, sh, self.view.carousel.len());

        for action in self.poll_actions(rl, &layout) {
            self.view.apply(action);
        }
        self.view.update(rl.get_frame_time());

        let mouse = rl.get_mouse_position();
        let mut d = rl.begin_drawing(thread);

        d.draw_rectangle_gradient_v(0, 0, sw as i32, sh as i32, Color::BLACK, EMERALD_900);

        let heading_x = (sw as i32 - d.measure_text(&self.title, HEADING_SIZE)) / 2;
        d.draw_text(&self.title, heading_x, HEADING_TOP as i32, HEADING_SIZE, Color::WHITE);

        d.draw_rectangle_rounded(layout.frame, 0.04, 8, GRAY_800);

        match self.view.carousel.current() {
            None => {
                let message = "No slides to display";
                let x = (sw as i32 - d.measure_text(message, LABEL_SIZE)) / 2;
                let y = (layout.frame.y + layout.frame.height * 0.5) as i32;
                d.draw_text(message, x, y, LABEL_SIZE, Color::LIGHTGRAY);
            }
            Some(slide) => {
                let current = self.view.carousel.position();
                match &self.view.state {
                    CarouselState::Idle => self.draw_slide(&mut d, &layout, current, 0.0),
                    CarouselState::Sliding(t) => {
                        let shift = t.direction.sign() * layout.frame.width;
                        self.draw_slide(&mut d, &layout, t.from, shift * (t.offset - 1.0));
                        self.draw_slide(&mut d, &layout, current, shift * t.offset);
                    }
                }

                d.draw_text(&slide.label, layout.label.x as i32, layout.label.y as i32, LABEL_SIZE, Color::WHITE);
                draw_button(&mut d, layout.previous, mouse, Direction::Backward);
                draw_button(&mut d, layout.next, mouse, Direction::Forward);
                for (i, dot) in layout.dots.iter().enumerate() {
                    let color = if i == current { Color::WHITE } else { GRAY_700 };
                    d.draw_circle_v(*dot, DOT_RADIUS, color);
                }
            }
        }

        if self.view.show_strategy {
            draw_strategy_panel(&mut d, sw, sh);
        }
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle, layout: &Layout, index: usize, offset_x: f32) {
        let frame = layout.frame;
        let texture = self.textures.get(index).and_then(|t| t.as_ref());

        match texture {
            Some(texture) => {
                let tex_width = texture.width() as f32;
                let tex_height = texture.height() as f32;
                let mut dest = fit_contain(tex_width, tex_height, frame);
                dest.x += offset_x;
                let source = Rectangle::new(0.0, 0.0, tex_width, tex_height);
                if let Some((source, dest)) = clip_to_frame(source, dest, frame) {
                    d.draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, Color::WHITE);
                }
            }
            None => {
                let dest = Rectangle::new(frame.x + offset_x, frame.y, frame.width, frame.height);
                let placeholder = Rectangle::new(0.0, 0.0, frame.width, frame.height);
                if let Some((_, dest)) = clip_to_frame(placeholder, dest, frame) {
                    d.draw_rectangle_rec(dest, GRAY_700);
                }
                if offset_x == 0.0 {
                    let message = placeholder_text(self.view.carousel.slides().get(index));
                    let x = (frame.x + frame.width * 0.5) as i32 - d.measure_text(message, LABEL_SIZE) / 2;
                    let y = (frame.y + frame.height * 0.5) as i32;
                    d.draw_text(message, x, y, LABEL_SIZE, Color::LIGHTGRAY);
                }
            }
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, center: Vector2, mouse: Vector2, direction: Direction) {
    let color = if mouse.distance_to(center) <= BUTTON_RADIUS { GRAY_700 } else { GRAY_800 };
    d.draw_circle_v(center, BUTTON_RADIUS, color);

    // Chevron pointing away from the frame centre
    let arm = BUTTON_RADIUS * 0.35;
    let tip = Vector2::new(center.x + direction.sign() * arm * 0.5, center.y);
    let tail_x = center.x - direction.sign() * arm * 0.5;
    d.draw_line_ex(Vector2::new(tail_x, center.y - arm), tip, 3.0, Color::WHITE);
    d.draw_line_ex(Vector2::new(tail_x, center.y + arm), tip, 3.0, Color::WHITE);
}

fn draw_strategy_panel(d: &mut RaylibDrawHandle, sw: f32, sh: f32) {
    let line_height = CODE_SIZE + 4;
    let lines: Vec<&str> = DEFAULT_STRATEGY_CODE.lines().collect();
    let width = lines
        .iter()
        .map(|line| d.measure_text(line, CODE_SIZE))
        .max()
        .unwrap_or(0) as f32
        + 48.0;
    let height = (lines.len() as i32 * line_height) as f32 + 48.0;
    let panel = Rectangle::new((sw - width) * 0.5, (sh - height) * 0.5, width, height);

    d.draw_rectangle_rounded(panel, 0.03, 8, PANEL);
    for (i, line) in lines.iter().enumerate() {
        let y = panel.y as i32 + 24 + i as i32 * line_height;
        d.draw_text(line, panel.x as i32 + 24, y, CODE_SIZE, Color::LIGHTGRAY);
    }
}

/// Text drawn over a slide whose image could not be loaded.
fn placeholder_text(slide: Option<&SlideDescriptor>) -> &str {
    match slide {
        Some(slide) if !slide.label.is_empty() => &slide.label,
        _ => "Image unavailable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::chart_slides;

    fn chart_view() -> ViewState {
        ViewState::new(Carousel::new(chart_slides()), false)
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(action_for_key(KeyboardKey::KEY_RIGHT), Some(Action::Next));
        assert_eq!(action_for_key(KeyboardKey::KEY_A), Some(Action::Previous));
        assert_eq!(action_for_key(KeyboardKey::KEY_TAB), Some(Action::ToggleStrategy));
        assert_eq!(action_for_key(KeyboardKey::KEY_ONE), Some(Action::GoTo(0)));
        assert_eq!(action_for_key(KeyboardKey::KEY_NINE), Some(Action::GoTo(8)));
        assert_eq!(action_for_key(KeyboardKey::KEY_SPACE), None);
    }

    #[test]
    fn hits_map_to_actions() {
        assert_eq!(action_for_hit(Hit::Previous), Action::Previous);
        assert_eq!(action_for_hit(Hit::Next), Action::Next);
        assert_eq!(action_for_hit(Hit::Dot(4)), Action::GoTo(4));
    }

    #[test]
    fn next_starts_a_forward_slide() {
        let mut view = chart_view();
        view.apply(Action::Next);
        assert_eq!(view.carousel.position(), 1);
        match &view.state {
            CarouselState::Sliding(t) => {
                assert_eq!(t.from, 0);
                assert_eq!(t.direction, Direction::Forward);
            }
            CarouselState::Idle => panic!("expected a transition"),
        }
    }

    #[test]
    fn click_during_transition_restarts_from_current() {
        let mut view = chart_view();
        view.apply(Action::Next);
        view.update(SLIDE_DURATION / 3.0);
        view.apply(Action::Previous);
        assert_eq!(view.carousel.position(), 0);
        match &view.state {
            CarouselState::Sliding(t) => {
                assert_eq!(t.from, 1);
                assert_eq!(t.direction, Direction::Backward);
                assert_eq!(t.offset, 1.0);
            }
            CarouselState::Idle => panic!("expected a transition"),
        }
        view.update(SLIDE_DURATION * 2.0);
        assert!(matches!(view.state, CarouselState::Idle));
    }

    #[test]
    fn placeholder_shows_slide_label() {
        let slides = chart_slides();
        assert_eq!(placeholder_text(slides.get(3)), "Advanced Results");
        assert_eq!(placeholder_text(Some(&SlideDescriptor::new("a.png", ""))), "Image unavailable");
        assert_eq!(placeholder_text(None), "Image unavailable");
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut view = chart_view();
        view.apply(Action::GoTo(8));
        assert_eq!(view.carousel.position(), 0);
        assert!(matches!(view.state, CarouselState::Idle));
    }

    #[test]
    fn jumping_to_current_slide_does_not_animate() {
        let mut view = chart_view();
        view.apply(Action::GoTo(0));
        assert!(matches!(view.state, CarouselState::Idle));
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let mut view = ViewState::new(Carousel::new(Vec::new()), false);
        for action in [Action::Next, Action::Previous, Action::GoTo(0)] {
            view.apply(action);
        }
        assert!(matches!(view.state, CarouselState::Idle));
        assert!(view.carousel.current().is_none());

        view.apply(Action::ToggleStrategy);
        assert!(view.show_strategy);
    }

    #[test]
    fn single_slide_never_animates() {
        let slides = chart_slides().into_iter().take(1).collect();
        let mut view = ViewState::new(Carousel::new(slides), false);
        view.apply(Action::Next);
        view.apply(Action::Previous);
        assert!(matches!(view.state, CarouselState::Idle));
    }

    #[test]
    fn strategy_panel_toggles() {
        let mut view = ViewState::new(Carousel::new(chart_slides()), true);
        view.apply(Action::ToggleStrategy);
        assert!(!view.show_strategy);
        view.apply(Action::ToggleStrategy);
        assert!(view.show_strategy);
    }
}
