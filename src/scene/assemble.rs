use crate::animation::keyframes::{grow_panel_height, grow_translate, wave};
use crate::calendar::model::CalendarEntry;
use crate::foundation::config::LayoutConfig;
use crate::foundation::core::{Canvas, PanelKind};
use crate::foundation::error::{ContribError, ContribResult};
use crate::geometry::iso::{BarPlacement, IsoGrid};
use crate::geometry::transform::{Transform, TransformOp};
use crate::pattern::bitmap::PatternLibrary;
use crate::scene::node::{Element, Tag};
use crate::theme::paint::PanelContext;
use crate::theme::settings::{ColorSettings, Settings};

/// Progress of a [`SceneAssembler`]. Steps must run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum AssemblerPhase {
    NotStarted,
    /// Grid and pattern definitions are ready; no entry emitted yet.
    Defining,
    /// At least one entry emitted.
    PerEntry,
    Done,
}

/// Assembled 3D calendar: pattern definitions plus one group holding every bar.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub defs: Vec<Element>,
    pub root: Element,
    pub bar_count: usize,
}

impl Scene {
    /// Markup of the bar group only.
    pub fn to_markup(&self) -> String {
        self.root.to_markup()
    }
}

/// Builds a [`Scene`] one calendar entry at a time.
///
/// `define` must run once before any `push_entry`; `finish` closes the scene exactly once.
pub struct SceneAssembler<'a> {
    settings: &'a Settings,
    config: &'a LayoutConfig,
    canvas: Canvas,
    animate: bool,
    phase: AssemblerPhase,
    grid: Option<IsoGrid>,
    patterns: PatternLibrary,
    root: Element,
    bar_count: usize,
}

impl<'a> SceneAssembler<'a> {
    pub fn new(
        settings: &'a Settings,
        force_animation: bool,
        canvas: Canvas,
        config: &'a LayoutConfig,
    ) -> ContribResult<Self> {
        canvas.validate()?;
        Ok(Self {
            settings,
            config,
            canvas,
            animate: settings.animation_enabled(force_animation),
            phase: AssemblerPhase::NotStarted,
            grid: None,
            patterns: PatternLibrary::new(),
            root: Element::new(Tag::G),
            bar_count: 0,
        })
    }

    pub fn phase(&self) -> AssemblerPhase {
        self.phase
    }

    fn expect_phase(&self, step: &str, allowed: &[AssemblerPhase]) -> ContribResult<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(ContribError::scene(format!(
                "{step} called in phase {:?}",
                self.phase
            )))
        }
    }

    /// Lay out the grid for `entries` and compile the pattern definitions they need.
    pub fn define(&mut self, entries: &[CalendarEntry]) -> ContribResult<()> {
        self.expect_phase("define", &[AssemblerPhase::NotStarted])?;
        self.grid = IsoGrid::new(entries, self.canvas, self.config)?;

        if let ColorSettings::Bitmap(bitmap) = &self.settings.colors {
            for entry in entries {
                bitmap.require(entry.contribution_level)?;
            }
            for (level, patterns) in bitmap.levels() {
                for panel in PanelKind::ALL {
                    self.patterns.ensure(patterns.panel(panel), level, panel);
                }
            }
        }

        self.phase = AssemblerPhase::Defining;
        Ok(())
    }

    /// Emit the bar for one entry of the defined calendar.
    pub fn push_entry(&mut self, entry: &CalendarEntry) -> ContribResult<()> {
        self.expect_phase(
            "push_entry",
            &[AssemblerPhase::Defining, AssemblerPhase::PerEntry],
        )?;
        let grid = self
            .grid
            .ok_or_else(|| ContribError::scene("push_entry called for an empty calendar"))?;
        let bar = self.build_bar(&grid, entry)?;
        self.root.push(bar);
        self.bar_count += 1;
        self.phase = AssemblerPhase::PerEntry;
        Ok(())
    }

    /// Close the scene. The assembler cannot be reused afterwards.
    pub fn finish(&mut self) -> ContribResult<Scene> {
        self.expect_phase(
            "finish",
            &[AssemblerPhase::Defining, AssemblerPhase::PerEntry],
        )?;
        self.phase = AssemblerPhase::Done;
        Ok(Scene {
            defs: std::mem::take(&mut self.patterns).into_defs(),
            root: std::mem::replace(&mut self.root, Element::new(Tag::G)),
            bar_count: self.bar_count,
        })
    }

    fn build_bar(&self, grid: &IsoGrid, entry: &CalendarEntry) -> ContribResult<Element> {
        let placement = grid.place(entry, self.config);
        let level = entry.contribution_level;
        let animate = self.animate && !level.is_empty();

        let mut bar = Element::new(Tag::G).attr(
            "transform",
            Transform::identity()
                .then(TransformOp::Translate(placement.base_x, placement.top_y()))
                .to_string(),
        );
        if animate {
            bar.push(Element::from(&grow_translate(&placement, self.config)));
            bar.push(Element::from(&wave(&placement, self.config)));
        }

        for panel in PanelKind::ALL {
            let ctx = PanelContext {
                panel,
                level,
                date: entry.date,
                week: placement.week,
            };
            bar.push(self.build_panel(grid, &placement, &ctx, animate)?);
        }
        Ok(bar)
    }

    fn build_panel(
        &self,
        grid: &IsoGrid,
        placement: &BarPlacement,
        ctx: &PanelContext,
        animate: bool,
    ) -> ContribResult<Element> {
        let colors = &self.settings.colors;
        let tile_width = colors.tile_width(ctx.level, ctx.panel, grid.dxx)?;
        let shape = grid.panel(ctx.panel, tile_width, placement.height);

        let rect = Element::new(Tag::Rect)
            .attr("stroke", "none")
            .attr_num("x", 0.0)
            .attr_num("y", 0.0)
            .attr_num("width", shape.width)
            .attr_num("height", shape.height)
            .attr("transform", shape.transform.to_string());
        let mut rect = colors.paint(ctx).apply(rect);

        if animate && ctx.panel != PanelKind::Top {
            rect.push(Element::from(&grow_panel_height(
                &shape, placement, self.config,
            )));
        }
        Ok(rect)
    }
}

/// Assemble the 3D calendar for `entries`.
///
/// An empty calendar yields an empty group. Any error aborts the whole render.
#[tracing::instrument(skip(entries, settings, config), fields(entry_count = entries.len()))]
pub fn render_contrib(
    entries: &[CalendarEntry],
    settings: &Settings,
    force_animation: bool,
    canvas: Canvas,
    config: &LayoutConfig,
) -> ContribResult<Scene> {
    let mut assembler = SceneAssembler::new(settings, force_animation, canvas, config)?;
    assembler.define(entries)?;
    for entry in entries {
        assembler.push_entry(entry)?;
    }
    let scene = assembler.finish()?;
    tracing::debug!(
        bars = scene.bar_count,
        defs = scene.defs.len(),
        "assembled contribution scene"
    );
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/assemble.rs"]
mod tests;
