//! isocontrib renders a daily activity calendar as an isometric 3D bar chart in SVG.
//!
//! Each day becomes a bar made of three skewed panels. Panels are colored by one of four
//! themes (`normal`, `season`, `rainbow`, `bitmap`) and can animate with a grow-intro followed
//! by a looping wave.
//!
//! - Load a [`Calendar`] and [`Settings`] (or use [`presets`])
//! - Render the full document with [`render_svg`], or only the bars with [`render_contrib`]
//! - Write the result with [`write_output`], optionally previewing it with [`rasterize_png`]
//!
//! Output is byte-identical for identical input.
#![forbid(unsafe_code)]

pub mod animation;
pub mod calendar;
pub mod foundation;
pub mod geometry;
pub mod pattern;
pub mod scene;
pub mod theme;

pub use crate::calendar::model::{Calendar, CalendarEntry};
pub use crate::foundation::config::LayoutConfig;
pub use crate::foundation::core::{Canvas, ContributionLevel, PanelKind};
pub use crate::foundation::error::{ContribError, ContribResult};
pub use crate::scene::assemble::{AssemblerPhase, Scene, SceneAssembler, render_contrib};
pub use crate::scene::document::{SVG_HEIGHT, SVG_WIDTH, render_document, render_svg};
pub use crate::scene::output::{DEFAULT_OUTPUT_DIR, write_output};
pub use crate::scene::raster::rasterize_png;
pub use crate::theme::presets;
pub use crate::theme::settings::{ColorSettings, Settings, SettingsFile};
