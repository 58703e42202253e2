//! Presentation layer: terminal lifecycle, layout, theme, and widgets.
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use layout::{Hit, ScreenLayout};
