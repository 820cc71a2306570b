use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{ContribError, ContribResult};

/// Immutable layout and animation constants for one render.
///
/// The defaults are tuned for the single visual design this crate produces; they are grouped
/// here so every component receives them explicitly instead of reading globals.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Isometric angle in degrees.
    pub angle_deg: f64,
    /// Horizontal week slots the canvas width is divided into.
    pub week_slots: u32,
    /// Panel edge length relative to the grid step (leaves a gap between bars).
    pub panel_ratio: f64,
    /// Height formula: `log10(count / divisor + 1) * scale + base`.
    pub height_divisor: f64,
    /// See [`LayoutConfig::height_divisor`].
    pub height_scale: f64,
    /// Minimum bar height, also the starting height of the grow animation.
    pub height_base: f64,
    /// Grow-intro duration in seconds.
    pub grow_secs: f64,
    /// Wave amplitude as a fraction of bar height.
    pub wave_amp_ratio: f64,
    /// Upper bound on the wave amplitude.
    pub wave_amp_max: f64,
    /// Modulus applied to `week + dayOfWeek` to derive the wave phase.
    pub wave_phase_mod: u32,
    /// Wave cycle length in seconds.
    pub wave_cycle_secs: f64,
    /// Number of wave samples per cycle (the emitted list has `steps + 1` values).
    pub wave_steps: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            angle_deg: 30.0,
            week_slots: 64,
            panel_ratio: 0.9,
            height_divisor: 20.0,
            height_scale: 144.0,
            height_base: 3.0,
            grow_secs: 3.0,
            wave_amp_ratio: 0.08,
            wave_amp_max: 4.0,
            wave_phase_mod: 16,
            wave_cycle_secs: 4.0,
            wave_steps: 16,
        }
    }
}

impl LayoutConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> ContribResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| ContribError::serde(format!("parse layout JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse overrides from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ContribResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ContribError::io(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject values the geometry and animation formulas cannot use.
    pub fn validate(&self) -> ContribResult<()> {
        let positive = [
            ("weekSlots", f64::from(self.week_slots)),
            ("heightDivisor", self.height_divisor),
            ("growSecs", self.grow_secs),
            ("waveCycleSecs", self.wave_cycle_secs),
            ("wavePhaseMod", f64::from(self.wave_phase_mod)),
        ];
        for (name, v) in positive {
            if !(v.is_finite() && v > 0.0) {
                return Err(ContribError::settings(format!("layout {name} must be > 0")));
            }
        }
        if !(self.angle_deg.is_finite() && self.angle_deg > 0.0 && self.angle_deg < 90.0) {
            return Err(ContribError::settings("layout angleDeg must be between 0 and 90"));
        }
        Ok(())
    }

    /// Isometric angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// Bar height for a daily count. Always `>= height_base`, strictly increasing in `count`.
    pub fn bar_height(&self, count: u32) -> f64 {
        (f64::from(count) / self.height_divisor + 1.0).log10() * self.height_scale
            + self.height_base
    }

    /// Wave amplitude for a bar of the given height.
    pub fn wave_amplitude(&self, bar_height: f64) -> f64 {
        (bar_height * self.wave_amp_ratio).min(self.wave_amp_max)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
