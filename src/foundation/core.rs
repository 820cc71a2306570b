use std::fmt;

use crate::foundation::error::{ContribError, ContribResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Drawing area the calendar is projected into, in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Horizontal extent; must be finite and `> 0`.
    pub width: f64,
    /// Vertical extent; must be finite and `>= 0`.
    pub height: f64,
}

impl Canvas {
    /// Create a validated canvas.
    pub fn new(width: f64, height: f64) -> ContribResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Check the dimensions without constructing a new value.
    ///
    /// A zero width is rejected as well: the panel skew angle is derived from `dx / dy`, which is
    /// undefined for a collapsed grid.
    pub fn validate(self) -> ContribResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ContribError::geometry(format!(
                "canvas dimensions must be finite, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width <= 0.0 {
            return Err(ContribError::geometry(format!(
                "canvas width must be > 0, got {}",
                self.width
            )));
        }
        if self.height < 0.0 {
            return Err(ContribError::geometry(format!(
                "canvas height must be >= 0, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

/// One of the three visible faces of an isometric bar.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Upward-facing rhombus.
    Top,
    /// Left-facing side.
    Left,
    /// Right-facing side.
    Right,
}

impl PanelKind {
    /// Panels in paint order.
    pub const ALL: [PanelKind; 3] = [PanelKind::Top, PanelKind::Left, PanelKind::Right];

    /// Name used in CSS class names and pattern ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Shading factor fed to `darker()`: the right face is the darkest.
    pub fn darker(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Left => 0.5,
            Self::Right => 1.0,
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity intensity bucket in `[0, 4]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ContributionLevel(u8);

impl ContributionLevel {
    /// Highest valid level.
    pub const MAX: u8 = 4;
    /// Number of distinct levels.
    pub const COUNT: usize = Self::MAX as usize + 1;

    /// Create a validated level.
    pub fn new(level: u8) -> ContribResult<Self> {
        if level > Self::MAX {
            return Err(ContribError::serde(format!(
                "contribution level must be in [0, {}], got {level}",
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    /// All levels, ascending.
    pub fn all() -> impl Iterator<Item = ContributionLevel> {
        (0..=Self::MAX).map(Self)
    }

    /// Raw level value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Level as a table index.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// `true` for days without activity; those bars never animate.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for ContributionLevel {
    type Error = ContribError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContributionLevel> for u8 {
    fn from(value: ContributionLevel) -> Self {
        value.0
    }
}

impl fmt::Display for ContributionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
