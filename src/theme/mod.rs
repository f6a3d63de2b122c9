//! Visual theme: palette constants and the generated global stylesheet.

mod colors;
mod styles;

pub use styles::global_styles;
