mod board;
mod input;
mod theme;

pub use board::BoardPainter;
pub use input::{keyboard_events, swipe_direction};
pub use theme::{THEME_NAMES, Theme};
