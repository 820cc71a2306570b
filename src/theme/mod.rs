//! Colors, settings and the per-panel paint strategy.

pub mod color;
pub mod css;
pub mod paint;
pub mod presets;
pub mod season;
pub mod settings;
