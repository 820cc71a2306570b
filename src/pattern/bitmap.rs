use std::collections::BTreeMap;

use kurbo::Shape as _;

use crate::foundation::core::{BezPath, ContributionLevel, PanelKind, Rect};
use crate::scene::node::{Element, Tag};
use crate::theme::color::ColorDef;

/// One bitmap row. Bit `x` of a `width`-wide row is counted from the most significant end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BitRow(pub u64);

impl BitRow {
    /// Whether column `x` of a `width`-wide row is set. Columns past bit 63 read as unset.
    pub fn is_set(self, x: u32, width: u32) -> bool {
        if x >= width {
            return false;
        }
        self.0
            .checked_shr(width - x - 1)
            .is_some_and(|v| v & 1 == 1)
    }
}

impl<'de> serde::Deserialize<'de> for BitRow {
    /// Accepts a hex string (`"0F"`, `"0x0f"`) or a non-negative integer.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(u64),
            Hex(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Int(v) => Ok(Self(v)),
            Repr::Hex(s) => {
                let t = s.trim();
                let digits = t
                    .strip_prefix("0x")
                    .or_else(|| t.strip_prefix("0X"))
                    .unwrap_or(t);
                u64::from_str_radix(digits, 16)
                    .map(Self)
                    .map_err(|_| serde::de::Error::custom(format!("invalid bitmap row \"{s}\"")))
            }
        }
    }
}

/// Tile pattern for one panel of one level.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPattern {
    pub width: u32,
    pub bitmap: Vec<BitRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground_color: Option<ColorDef>,
}

impl PanelPattern {
    /// Tile width, never below 1.
    pub fn tile_width(&self) -> u32 {
        self.width.max(1)
    }

    /// Tile height (row count), never below 1.
    pub fn tile_height(&self) -> u32 {
        u32::try_from(self.bitmap.len()).unwrap_or(u32::MAX).max(1)
    }

    /// Set cells as `(x, y)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.tile_width();
        (0u32..)
            .zip(&self.bitmap)
            .flat_map(move |(y, row)| {
                (0..width)
                    .filter(move |&x| row.is_set(x, width))
                    .map(move |x| (x, y))
            })
    }

    /// Foreground outline: one unit square per set cell.
    pub fn foreground_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for (x, y) in self.cells() {
            let (x, y) = (f64::from(x), f64::from(y));
            path.extend(Rect::new(x, y, x + 1.0, y + 1.0).path_elements(0.1));
        }
        path
    }
}

/// Id of the `<pattern>` for a level and panel.
pub fn pattern_id(level: ContributionLevel, panel: PanelKind) -> String {
    format!("pattern_{level}_{panel}")
}

/// Reference usable as a `fill` value.
pub fn pattern_url(level: ContributionLevel, panel: PanelKind) -> String {
    format!("url(#{})", pattern_id(level, panel))
}

/// Build the `<pattern>` definition for one panel of one level.
pub fn compile_pattern(
    pattern: &PanelPattern,
    level: ContributionLevel,
    panel: PanelKind,
) -> Element {
    let w = f64::from(pattern.tile_width());
    let h = f64::from(pattern.tile_height());
    let background = Element::new(Tag::Rect)
        .attr_num("x", 0.0)
        .attr_num("y", 0.0)
        .attr_num("width", w)
        .attr_num("height", h)
        .attr("class", format!("cont-{panel}-bg-{level}"));
    let foreground = Element::new(Tag::Path)
        .attr("stroke", "none")
        .attr("class", format!("cont-{panel}-fg-{level}"))
        .attr("d", pattern.foreground_path().to_svg());

    Element::new(Tag::Pattern)
        .attr("id", pattern_id(level, panel))
        .attr_num("x", 0.0)
        .attr_num("y", 0.0)
        .attr_num("width", w)
        .attr_num("height", h)
        .attr("patternUnits", "userSpaceOnUse")
        .child(background)
        .child(foreground)
}

/// Compiled pattern definitions, one per `(level, panel)`, emitted in key order.
#[derive(Clone, Debug, Default)]
pub struct PatternLibrary {
    defs: BTreeMap<(ContributionLevel, PanelKind), Element>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `pattern` unless this key is already present.
    pub fn ensure(&mut self, pattern: &PanelPattern, level: ContributionLevel, panel: PanelKind) {
        self.defs
            .entry((level, panel))
            .or_insert_with(|| compile_pattern(pattern, level, panel));
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn contains(&self, level: ContributionLevel, panel: PanelKind) -> bool {
        self.defs.contains_key(&(level, panel))
    }

    /// Definitions in `(level, panel)` order.
    pub fn into_defs(self) -> Vec<Element> {
        self.defs.into_values().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pattern/bitmap.rs"]
mod tests;
