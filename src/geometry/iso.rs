use crate::calendar::model::{CalendarEntry, day_of_week, epoch_day};
use crate::foundation::config::LayoutConfig;
use crate::foundation::core::{Canvas, PanelKind};
use crate::foundation::error::ContribResult;
use crate::geometry::transform::{Transform, TransformOp};

/// Isometric grid derived from a calendar and a canvas.
///
/// Weeks advance down-right and weekdays advance down-left, so a calendar reads as a diagonal
/// band across the canvas with its first week at the top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsoGrid {
    /// Horizontal grid step.
    pub dx: f64,
    /// Vertical grid step, `dx * tan(angle)`.
    pub dy: f64,
    /// Horizontal panel edge.
    pub dxx: f64,
    /// Vertical panel edge.
    pub dyy: f64,
    /// Screen x of week 0 / weekday 0.
    pub offset_x: f64,
    /// Screen y of week 0 / weekday 0.
    pub offset_y: f64,
    /// Epoch day of the Sunday starting the first week.
    pub sunday_of_first_week: i64,
    /// Number of week columns touched by the calendar.
    pub week_count: i64,
    angle_deg: f64,
}

/// Screen placement of one calendar entry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BarPlacement {
    /// Week column, `0` for the first entry.
    pub week: i64,
    /// Sunday = 0 .. Saturday = 6.
    pub day_of_week: u32,
    /// Screen x of the bar's base corner.
    pub base_x: f64,
    /// Screen y of the bar's base corner.
    pub base_y: f64,
    /// Extruded height.
    pub height: f64,
}

impl BarPlacement {
    /// Screen y of the bar's top face.
    pub fn top_y(&self) -> f64 {
        self.base_y - self.height
    }

    /// Diagonal index used to stagger per-bar effects.
    pub fn diagonal(&self) -> i64 {
        self.week + i64::from(self.day_of_week)
    }
}

/// A rectangle plus the transform that maps it onto one face of a bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PanelShape {
    /// Face this shape paints.
    pub kind: PanelKind,
    /// Untransformed rectangle width (the tile width).
    pub width: f64,
    /// Untransformed rectangle height.
    pub height: f64,
    /// Vertical scale of side faces; `1` for the top face.
    pub side_scale: f64,
    /// Rectangle-to-bar-space transform.
    pub transform: Transform,
}

impl PanelShape {
    /// Untransformed rectangle height showing an extrusion of `bar_height`.
    pub fn height_for(&self, bar_height: f64) -> f64 {
        bar_height / self.side_scale
    }
}

impl IsoGrid {
    /// Build the grid for `entries`. Returns `None` for an empty calendar.
    pub fn new(
        entries: &[CalendarEntry],
        canvas: Canvas,
        config: &LayoutConfig,
    ) -> ContribResult<Option<Self>> {
        canvas.validate()?;
        let Some(first) = entries.first() else {
            return Ok(None);
        };

        let first_dow = i64::from(day_of_week(first.date));
        let sunday_of_first_week = epoch_day(first.date) - first_dow;
        let week_count = (entries.len() as i64 + first_dow + 6) / 7;

        let dx = canvas.width / f64::from(config.week_slots.max(1));
        let dy = dx * config.angle_rad().tan();

        Ok(Some(Self {
            dx,
            dy,
            dxx: dx * config.panel_ratio,
            dyy: dy * config.panel_ratio,
            offset_x: dx * 7.0,
            offset_y: canvas.height - (week_count + 7) as f64 * dy,
            sunday_of_first_week,
            week_count,
            angle_deg: config.angle_deg,
        }))
    }

    /// Place one entry on the grid.
    pub fn place(&self, entry: &CalendarEntry, config: &LayoutConfig) -> BarPlacement {
        let week = (entry.epoch_day() - self.sunday_of_first_week).div_euclid(7);
        let day_of_week = entry.day_of_week();
        let dow = i64::from(day_of_week);
        BarPlacement {
            week,
            day_of_week,
            base_x: self.offset_x + (week - dow) as f64 * self.dx,
            base_y: self.offset_y + (week + dow) as f64 * self.dy,
            height: config.bar_height(entry.contribution_count),
        }
    }

    /// Shape for face `kind` of a bar of `bar_height`, drawn with tiles `tile_width` wide.
    pub fn panel(&self, kind: PanelKind, tile_width: f64, bar_height: f64) -> PanelShape {
        let w = tile_width;
        match kind {
            PanelKind::Top => {
                let skew_x = (self.dxx / 2.0 / self.dyy).atan().to_degrees();
                PanelShape {
                    kind,
                    width: w,
                    height: w,
                    side_scale: 1.0,
                    transform: Transform::identity()
                        .then(TransformOp::SkewY(-self.angle_deg))
                        .then(TransformOp::SkewX(skew_x))
                        .then(TransformOp::Scale(self.dxx / w, 2.0 * self.dyy / w)),
                }
            }
            PanelKind::Left | PanelKind::Right => {
                let side_scale = self.dxx.hypot(self.dyy) / w;
                let mut transform = Transform::identity();
                let skew = if kind == PanelKind::Right {
                    transform = transform.then(TransformOp::Translate(self.dxx, self.dyy));
                    -self.angle_deg
                } else {
                    self.angle_deg
                };
                PanelShape {
                    kind,
                    width: w,
                    height: bar_height / side_scale,
                    side_scale,
                    transform: transform
                        .then(TransformOp::SkewY(skew))
                        .then(TransformOp::Scale(self.dxx / w, side_scale)),
                }
            }
        }
    }
}

/// Place every entry; empty input yields an empty list.
pub fn layout(
    entries: &[CalendarEntry],
    canvas: Canvas,
    config: &LayoutConfig,
) -> ContribResult<Vec<BarPlacement>> {
    let Some(grid) = IsoGrid::new(entries, canvas, config)? else {
        return Ok(Vec::new());
    };
    Ok(entries.iter().map(|e| grid.place(e, config)).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/iso.rs"]
mod tests;
