use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1024;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_DURATION: f32 = 0.35;         // Duration of the slide-in animation (seconds)

pub const MAX_FRAME_WIDTH: f32 = 896.0;       // Carousel frame never grows wider than this
pub const FRAME_MARGIN: f32 = 32.0;           // Horizontal margin around the frame
pub const HEADING_TOP: f32 = 40.0;            // Distance from the top to the heading baseline
pub const HEADING_SIZE: i32 = 40;             // Heading font size
pub const FRAME_TOP: f32 = 112.0;             // Top edge of the carousel frame
pub const FOOTER_HEIGHT: f32 = 96.0;          // Room kept under the frame for label and dots

pub const BUTTON_RADIUS: f32 = 22.0;          // Previous / next button radius
pub const BUTTON_INSET: f32 = 8.0;            // Button distance from the frame edge
pub const DOT_RADIUS: f32 = 5.0;              // Indicator dot radius
pub const DOT_SPACING: f32 = 20.0;            // Distance between indicator dot centers
pub const LABEL_SIZE: i32 = 20;               // Slide label font size
pub const CODE_SIZE: i32 = 18;                // Strategy snippet font size

pub const HEADING: &str = "Analytics Snapshots";

pub const EMERALD_900: Color = Color::new(6, 78, 59, 255);
pub const GRAY_800: Color = Color::new(31, 41, 55, 255);
pub const GRAY_700: Color = Color::new(55, 65, 81, 255);
pub const PANEL: Color = Color::new(17, 24, 39, 235);
