use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::keyframes::ClockValue;
use crate::foundation::core::{ContributionLevel, PanelKind};
use crate::foundation::error::{ContribError, ContribResult};
use crate::pattern::bitmap::PanelPattern;
use crate::theme::color::{ColorDef, Percent};

/// Output file name used when a settings object does not name one.
pub const DEFAULT_FILE_NAME: &str = "profile-customize.svg";

/// Label printed next to the total when `l10n.contrib` is absent.
pub const DEFAULT_CONTRIB_LABEL: &str = "contributions";

/// Theme and output settings for one rendered file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Active color variant, selected by the `"type"` field.
    #[serde(flatten)]
    pub colors: ColorSettings,
    pub background_color: ColorDef,
    pub foreground_color: ColorDef,
    pub strong_color: ColorDef,
    pub weak_color: ColorDef,
    /// Play the grow-intro and wave animations.
    #[serde(default)]
    pub growing_animation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l10n: Option<L10n>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

/// Localized labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct L10n {
    pub contrib: String,
}

/// How bar panels are colored. Exactly one variant is active per render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorSettings {
    Normal(NormalColors),
    Season(SeasonColors),
    Rainbow(RainbowColors),
    Bitmap(BitmapColors),
}

/// One color per contribution level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalColors {
    pub contrib_colors: [ColorDef; ContributionLevel::COUNT],
}

/// Autumn, winter, spring and summer palettes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonColors {
    pub contrib_colors1: [ColorDef; ContributionLevel::COUNT],
    pub contrib_colors2: [ColorDef; ContributionLevel::COUNT],
    pub contrib_colors3: [ColorDef; ContributionLevel::COUNT],
    pub contrib_colors4: [ColorDef; ContributionLevel::COUNT],
}

impl SeasonColors {
    /// Palettes in season order, starting with autumn.
    pub fn palettes(&self) -> [&[ColorDef; ContributionLevel::COUNT]; 4] {
        [
            &self.contrib_colors1,
            &self.contrib_colors2,
            &self.contrib_colors3,
            &self.contrib_colors4,
        ]
    }
}

/// Hue-cycling fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RainbowColors {
    /// Hue offset in degrees per week.
    pub hue_ratio: f64,
    pub saturation: Percent,
    pub contrib_lightness: [Percent; ContributionLevel::COUNT],
    /// Length of one full hue cycle.
    pub duration: ClockValue,
}

/// Tile pattern fill, one pattern set per level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitmapColors {
    pub contrib_patterns: Vec<ContribPattern>,
}

impl BitmapColors {
    /// Patterns for `level`, if configured.
    pub fn level(&self, level: ContributionLevel) -> Option<&ContribPattern> {
        self.contrib_patterns.get(level.index())
    }

    /// Configured levels in ascending order.
    pub fn levels(&self) -> impl Iterator<Item = (ContributionLevel, &ContribPattern)> {
        ContributionLevel::all().zip(&self.contrib_patterns)
    }

    /// Patterns for `level`, or a settings error naming the missing level.
    pub fn require(&self, level: ContributionLevel) -> ContribResult<&ContribPattern> {
        self.level(level).ok_or_else(|| {
            ContribError::settings(format!(
                "bitmap theme has {} contribPatterns but the calendar uses level {level}",
                self.contrib_patterns.len()
            ))
        })
    }
}

/// Patterns for the three panels of one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContribPattern {
    pub top: PanelPattern,
    pub left: PanelPattern,
    pub right: PanelPattern,
}

impl ContribPattern {
    pub fn panel(&self, kind: PanelKind) -> &PanelPattern {
        match kind {
            PanelKind::Top => &self.top,
            PanelKind::Left => &self.left,
            PanelKind::Right => &self.right,
        }
    }
}

impl Settings {
    /// Animations play when the settings ask for them or the caller forces them.
    pub fn animation_enabled(&self, force: bool) -> bool {
        self.growing_animation || force
    }

    /// Output file name relative to the output directory.
    pub fn file_name(&self) -> &str {
        self.file_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
    }

    /// Label shown after the total contribution count.
    pub fn contrib_label(&self) -> &str {
        self.l10n
            .as_ref()
            .map_or(DEFAULT_CONTRIB_LABEL, |l| l.contrib.as_str())
    }

    /// Parse a single settings object.
    pub fn from_reader<R: std::io::Read>(r: R) -> ContribResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ContribError::serde(format!("parse settings JSON: {e}")))
    }
}

/// Contents of a settings file: one settings object or an array of them.
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsFile {
    One(Box<Settings>),
    Many(Vec<Settings>),
}

impl SettingsFile {
    /// Parse a settings file from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ContribResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| ContribError::serde(format!("parse settings JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse a settings file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ContribResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ContribError::io(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// A JSON array yields [`SettingsFile::Many`], anything else a single object.
    pub fn from_value(value: serde_json::Value) -> ContribResult<Self> {
        let parsed = if value.is_array() {
            serde_json::from_value(value).map(Self::Many)
        } else {
            serde_json::from_value(value).map(|s| Self::One(Box::new(s)))
        };
        parsed.map_err(|e| ContribError::serde(format!("parse settings JSON: {e}")))
    }

    /// Every settings object in file order.
    pub fn into_vec(self) -> Vec<Settings> {
        match self {
            Self::One(s) => vec![*s],
            Self::Many(v) => v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/settings.rs"]
mod tests;
