use chrono::NaiveDate;

use crate::animation::keyframes::{AnimTarget, AnimationSpec, Repeat};
use crate::foundation::core::{ContributionLevel, PanelKind};
use crate::foundation::error::ContribResult;
use crate::pattern::bitmap::pattern_url;
use crate::scene::node::Element;
use crate::theme::color::Rgb;
use crate::theme::season::season_pattern;
use crate::theme::settings::{ColorSettings, RainbowColors};

/// Hue stops per rainbow cycle, excluding the closing stop.
const RAINBOW_STOPS: u32 = 6;
/// Degrees between consecutive hue stops.
const RAINBOW_STEP_DEG: u32 = 360 / RAINBOW_STOPS;

/// What a panel is being painted for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelContext {
    pub panel: PanelKind,
    pub level: ContributionLevel,
    pub date: NaiveDate,
    pub week: i64,
}

/// How one panel gets its color.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelPaint {
    /// Stylesheet class.
    Class(String),
    /// Inline animated fill.
    Animated(AnimationSpec),
    /// `fill` referencing a tile pattern.
    Pattern(String),
}

impl PanelPaint {
    /// Attach this paint to a panel shape.
    pub fn apply(self, shape: Element) -> Element {
        match self {
            Self::Class(class) => shape.attr("class", class),
            Self::Animated(spec) => shape.child(Element::from(&spec)),
            Self::Pattern(url) => shape.attr("fill", url),
        }
    }
}

impl ColorSettings {
    /// Decide the paint of one panel.
    pub fn paint(&self, ctx: &PanelContext) -> PanelPaint {
        let PanelContext {
            panel, level, date, ..
        } = *ctx;
        match self {
            Self::Normal(_) => PanelPaint::Class(format!("cont-{panel}-{level}")),
            Self::Season(_) => {
                let n = season_pattern(date);
                PanelPaint::Class(format!("cont-{panel}-p{n}-{level}"))
            }
            Self::Rainbow(rainbow) => PanelPaint::Animated(rainbow_fill(rainbow, ctx)),
            Self::Bitmap(_) => PanelPaint::Pattern(pattern_url(level, panel)),
        }
    }

    /// Untransformed tile width for a panel: the pattern width for bitmaps, `default` otherwise.
    pub fn tile_width(
        &self,
        level: ContributionLevel,
        panel: PanelKind,
        default: f64,
    ) -> ContribResult<f64> {
        match self {
            Self::Bitmap(bitmap) => Ok(f64::from(
                bitmap.require(level)?.panel(panel).tile_width(),
            )),
            Self::Normal(_) | Self::Season(_) | Self::Rainbow(_) => Ok(default),
        }
    }
}

/// Hue stops for `week`: `(i * 60 + week * hueRatio) mod 360` for `i` in `0..=6`.
///
/// The step is taken from the integer index so consecutive stops differ by exactly 60 degrees.
pub fn rainbow_hues(hue_ratio: f64, week: i64) -> impl Iterator<Item = f64> {
    let offset = week as f64 * hue_ratio;
    (0..=RAINBOW_STOPS)
        .map(move |i| (f64::from(i * RAINBOW_STEP_DEG) + offset).rem_euclid(360.0))
}

/// Fill animation cycling the hue wheel, offset per week and shaded per panel.
pub fn rainbow_fill(rainbow: &RainbowColors, ctx: &PanelContext) -> AnimationSpec {
    let saturation = rainbow.saturation.fraction();
    let lightness = rainbow.contrib_lightness[ctx.level.index()].fraction();
    let darker = ctx.panel.darker();
    AnimationSpec {
        target: AnimTarget::Attribute("fill"),
        values: rainbow_hues(rainbow.hue_ratio, ctx.week)
            .map(|hue| {
                Rgb::from_hsl(hue, saturation, lightness)
                    .darker(darker)
                    .to_string()
            })
            .collect(),
        dur: rainbow.duration,
        begin: None,
        repeat: Repeat::Indefinite,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/paint.rs"]
mod tests;
