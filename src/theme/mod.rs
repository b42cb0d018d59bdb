//! Styling for the desktop app.

mod styles;

pub use styles::GLOBAL_STYLES;
