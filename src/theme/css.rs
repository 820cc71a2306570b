use std::fmt;

use crate::foundation::core::{ContributionLevel, PanelKind};
use crate::theme::color::{ColorDef, Rgb};
use crate::theme::season::SEASON_PATTERNS;
use crate::theme::settings::{
    BitmapColors, ColorSettings, NormalColors, SeasonColors, Settings,
};

/// Season patterns blended between two neighbouring palettes.
const SEASON_STEPS: u8 = 5;

/// One class rule, e.g. `.cont-top-1 { fill: rgb(1, 2, 3); }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssRule {
    pub class: String,
    pub property: &'static str,
    pub value: String,
}

impl CssRule {
    fn fill(class: String, value: impl fmt::Display) -> Self {
        Self {
            class,
            property: "fill",
            value: value.to_string(),
        }
    }
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{} {{ {}: {}; }}", self.class, self.property, self.value)
    }
}

/// Class rules giving the style-class references in the scene their colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<CssRule>,
}

impl Stylesheet {
    /// Rules for `settings`: the variant's panel classes followed by the shared text classes.
    pub fn for_settings(settings: &Settings) -> Self {
        let mut rules = match &settings.colors {
            ColorSettings::Normal(normal) => normal_rules(normal),
            ColorSettings::Season(season) => season_rules(season),
            ColorSettings::Rainbow(_) => Vec::new(),
            ColorSettings::Bitmap(bitmap) => bitmap_rules(bitmap, settings),
        };
        rules.extend(common_rules(settings));
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Value of the rule for `class`, if present.
    pub fn value_of(&self, class: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.class == class)
            .map(|r| r.value.as_str())
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

fn shade(color: Rgb, panel: PanelKind) -> Rgb {
    color.darker(panel.darker())
}

fn normal_rules(normal: &NormalColors) -> Vec<CssRule> {
    let mut rules = Vec::new();
    for panel in PanelKind::ALL {
        for level in ContributionLevel::all() {
            let color = normal.contrib_colors[level.index()].rgb();
            rules.push(CssRule::fill(
                format!("cont-{panel}-{level}"),
                shade(color, panel),
            ));
        }
    }
    rules
}

/// Pattern `n` belongs to season `n / 5` and sits `n % 5 + 1` fifths of the way from the
/// previous season's palette to its own, so the last step of each season is its pure palette.
pub fn season_color(season: &SeasonColors, pattern: u8, level: ContributionLevel) -> Rgb {
    let palettes = season.palettes();
    let s = usize::from(pattern / SEASON_STEPS) % palettes.len();
    let prev = (s + palettes.len() - 1) % palettes.len();
    let t = f64::from(pattern % SEASON_STEPS + 1) / f64::from(SEASON_STEPS);
    palettes[prev][level.index()]
        .rgb()
        .mix(palettes[s][level.index()].rgb(), t)
}

fn season_rules(season: &SeasonColors) -> Vec<CssRule> {
    let mut rules = Vec::new();
    for panel in PanelKind::ALL {
        for n in 0..SEASON_PATTERNS {
            for level in ContributionLevel::all() {
                rules.push(CssRule::fill(
                    format!("cont-{panel}-p{n}-{level}"),
                    shade(season_color(season, n, level), panel),
                ));
            }
        }
    }
    rules
}

fn bitmap_rules(bitmap: &BitmapColors, settings: &Settings) -> Vec<CssRule> {
    let pick = |own: &Option<ColorDef>, fallback: &ColorDef| {
        own.as_ref().unwrap_or(fallback).rgb()
    };
    let mut rules = Vec::new();
    for (level, patterns) in bitmap.levels() {
        for panel in PanelKind::ALL {
            let pattern = patterns.panel(panel);
            let bg = pick(&pattern.background_color, &settings.background_color);
            let fg = pick(&pattern.foreground_color, &settings.foreground_color);
            rules.push(CssRule::fill(
                format!("cont-{panel}-bg-{level}"),
                shade(bg, panel),
            ));
            rules.push(CssRule::fill(
                format!("cont-{panel}-fg-{level}"),
                shade(fg, panel),
            ));
        }
    }
    rules
}

fn common_rules(settings: &Settings) -> [CssRule; 5] {
    let fill = |class: &str, c: &ColorDef| CssRule::fill(class.to_owned(), c.as_str());
    [
        fill("fill-bg", &settings.background_color),
        fill("fill-fg", &settings.foreground_color),
        fill("fill-strong", &settings.strong_color),
        fill("fill-weak", &settings.weak_color),
        CssRule {
            class: "stroke-bg".to_owned(),
            property: "stroke",
            value: settings.background_color.as_str().to_owned(),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/theme/css.rs"]
mod tests;
