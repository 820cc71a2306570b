use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::sample::{Keyframes, sample_steps};
use crate::foundation::config::LayoutConfig;
use crate::foundation::format::fmt_num;
use crate::geometry::iso::{BarPlacement, PanelShape};

/// SMIL clock value in seconds, printed as `"{n}s"`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct ClockValue(f64);

impl ClockValue {
    pub fn secs(secs: f64) -> Self {
        Self(secs)
    }

    pub fn as_secs(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ClockValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", fmt_num(self.0))
    }
}

impl From<ClockValue> for String {
    fn from(value: ClockValue) -> Self {
        value.to_string()
    }
}

impl<'de> Deserialize<'de> for ClockValue {
    /// Accepts `"10s"`, `"500ms"`, or a bare number of seconds.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        let secs = match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Some(v),
            Repr::Str(s) => {
                let s = s.trim();
                if let Some(ms) = s.strip_suffix("ms") {
                    ms.trim().parse::<f64>().ok().map(|v| v / 1000.0)
                } else {
                    s.strip_suffix('s').unwrap_or(s).trim().parse::<f64>().ok()
                }
            }
        };
        match secs {
            Some(v) if v.is_finite() && v > 0.0 => Ok(Self(v)),
            _ => Err(serde::de::Error::custom(
                "duration must be a positive number of seconds (e.g. \"10s\" or \"500ms\")",
            )),
        }
    }
}

/// How many times an animation plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Repeat {
    Once,
    Indefinite,
}

impl Repeat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "1",
            Self::Indefinite => "indefinite",
        }
    }
}

/// What an animation element drives.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum AnimTarget {
    /// `<animate attributeName=..>`
    Attribute(&'static str),
    /// `<animateTransform attributeName="transform" type="translate">`
    Translate,
}

/// One animation element, computed on demand and consumed by the scene assembler.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationSpec {
    pub target: AnimTarget,
    pub values: Keyframes,
    pub dur: ClockValue,
    pub begin: Option<ClockValue>,
    pub repeat: Repeat,
}

fn point(x: f64, y: f64) -> String {
    format!("{} {}", fmt_num(x), fmt_num(y))
}

/// Bar translation from a sliver of height to its full height, played once.
pub fn grow_translate(bar: &BarPlacement, config: &LayoutConfig) -> AnimationSpec {
    let from = bar.base_y - config.height_base;
    let to = bar.top_y();
    AnimationSpec {
        target: AnimTarget::Translate,
        values: sample_steps(1, |t| point(bar.base_x, from + (to - from) * t)),
        dur: ClockValue::secs(config.grow_secs),
        begin: None,
        repeat: Repeat::Once,
    }
}

/// Side panel height growth matching [`grow_translate`].
pub fn grow_panel_height(
    panel: &PanelShape,
    bar: &BarPlacement,
    config: &LayoutConfig,
) -> AnimationSpec {
    let from = panel.height_for(config.height_base);
    let to = panel.height_for(bar.height);
    AnimationSpec {
        target: AnimTarget::Attribute("height"),
        values: sample_steps(1, |t| fmt_num(from + (to - from) * t)),
        dur: ClockValue::secs(config.grow_secs),
        begin: None,
        repeat: Repeat::Once,
    }
}

/// Vertical bob that starts when the grow-intro ends and loops forever.
///
/// The phase is staggered by the bar's diagonal so neighbouring bars form a travelling wave.
pub fn wave(bar: &BarPlacement, config: &LayoutConfig) -> AnimationSpec {
    let amp = config.wave_amplitude(bar.height);
    let modulus = i64::from(config.wave_phase_mod.max(1));
    let phase = bar.diagonal().rem_euclid(modulus) as f64 / modulus as f64 * TAU;
    let top = bar.top_y();
    AnimationSpec {
        target: AnimTarget::Translate,
        values: sample_steps(config.wave_steps, |t| {
            point(bar.base_x, top + amp * (TAU * t + phase).sin())
        }),
        dur: ClockValue::secs(config.wave_cycle_secs),
        begin: Some(ClockValue::secs(config.grow_secs)),
        repeat: Repeat::Indefinite,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
