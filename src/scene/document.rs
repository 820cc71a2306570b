use crate::calendar::model::Calendar;
use crate::foundation::config::LayoutConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::ContribResult;
use crate::foundation::format::{group_thousands, to_scale};
use crate::geometry::transform::{Transform, TransformOp};
use crate::scene::assemble::render_contrib;
use crate::scene::node::{Element, Tag};
use crate::theme::color::Rgb;
use crate::theme::css::Stylesheet;
use crate::theme::settings::Settings;

/// Document width in SVG user units.
pub const SVG_WIDTH: f64 = 1280.0;
/// Document height in SVG user units.
pub const SVG_HEIGHT: f64 = 850.0;

const FONT_RULE: &str = r#"* { font-family: "Ubuntu", "Helvetica", "Arial", sans-serif; }"#;
const GRADIENT_ID: &str = "bg-gradient";

const STATS_X: f64 = 50.0;
const STATS_BASELINE: f64 = SVG_HEIGHT - 30.0;
const STATS_LABEL_GAP: f64 = 60.0;
const PERIOD_MARGIN: f64 = 20.0;
const STATS_STAR_X: f64 = 280.0;
const STATS_FORK_X: f64 = 390.0;
const ICON_SCALE: f64 = 1.5;
const ICON_OFFSET: (f64, f64) = (-24.0, -21.0);

const STAR_ICON: &str = "M8 .25a.75.75 0 01.673.418l1.882 3.815 4.21.612a.75.75 0 01.416 1.279l-3.046 2.97.719 4.192a.75.75 0 01-1.088.791L8 12.347l-3.766 1.98a.75.75 0 01-1.088-.79l.72-4.194L.818 6.374a.75.75 0 01.416-1.28l4.21-.611L7.327.668A.75.75 0 018 .25zm0 2.445L6.615 5.5a.75.75 0 01-.564.41l-3.097.45 2.24 2.184a.75.75 0 01.216.664l-.528 3.084 2.769-1.456a.75.75 0 01.698 0l2.77 1.456-.53-3.084a.75.75 0 01.216-.664l2.24-2.183-3.096-.45a.75.75 0 01-.564-.41L8 2.694v.001z";
const FORK_ICON: &str = "M5 3.25a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm0 2.122a2.25 2.25 0 10-1.5 0v.878A2.25 2.25 0 005.75 8.5h1.5v2.128a2.251 2.251 0 101.5 0V8.5h1.5a2.25 2.25 0 002.25-2.25v-.878a2.25 2.25 0 10-1.5 0v.878a.75.75 0 01-.75.75h-4.5A.75.75 0 015 6.25v-.878zm3.75 7.378a.75.75 0 11-1.5 0 .75.75 0 011.5 0zm3-8.75a.75.75 0 100-1.5.75.75 0 000 1.5z";
const FONT_VALUE: &str = "font-size: 22px; font-weight: 600";
const FONT_LABEL: &str = "font-size: 16px";

/// Render the full document for `calendar` as SVG markup.
#[tracing::instrument(skip(calendar, settings), fields(entry_count = calendar.entries().len()))]
pub fn render_svg(
    calendar: &Calendar,
    settings: &Settings,
    force_animation: bool,
) -> ContribResult<String> {
    let doc = render_document(calendar, settings, force_animation, &LayoutConfig::default())?;
    Ok(doc.to_markup())
}

/// Build the document tree: stylesheet, definitions, background, calendar and stats.
pub fn render_document(
    calendar: &Calendar,
    settings: &Settings,
    force_animation: bool,
    config: &LayoutConfig,
) -> ContribResult<Element> {
    let canvas = Canvas::new(SVG_WIDTH, SVG_HEIGHT)?;
    let scene = render_contrib(calendar.entries(), settings, force_animation, canvas, config)?;

    let css = format!("{FONT_RULE}\n{}", Stylesheet::for_settings(settings));
    let mut svg = Element::new(Tag::Svg)
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr_num("width", SVG_WIDTH)
        .attr_num("height", SVG_HEIGHT)
        .attr("viewBox", format!("0 0 {SVG_WIDTH} {SVG_HEIGHT}"))
        .child(Element::new(Tag::Style).text(css));

    if !scene.defs.is_empty() {
        let mut defs = Element::new(Tag::Defs);
        for pattern in scene.defs {
            defs.push(pattern);
        }
        svg.push(defs);
    }

    svg.push(Element::new(Tag::Defs).child(background_gradient(settings)));
    svg.push(
        Element::new(Tag::Rect)
            .attr_num("x", 0.0)
            .attr_num("y", 0.0)
            .attr_num("width", SVG_WIDTH)
            .attr_num("height", SVG_HEIGHT)
            .attr("fill", format!("url(#{GRADIENT_ID})")),
    );
    svg.push(scene.root);
    svg.push(stats(calendar, settings));
    Ok(svg)
}

/// Bottom stop of the background gradient: darkened on light themes, brightened on dark ones.
pub fn gradient_bottom(background: Rgb) -> Rgb {
    if background.is_light() {
        background.darker(0.06)
    } else {
        background.brighter(0.08)
    }
}

fn background_gradient(settings: &Settings) -> Element {
    let bg = &settings.background_color;
    Element::new(Tag::LinearGradient)
        .attr("id", GRADIENT_ID)
        .attr("x1", "0")
        .attr("y1", "0")
        .attr("x2", "0")
        .attr("y2", "1")
        .child(
            Element::new(Tag::Stop)
                .attr("offset", "0%")
                .attr("stop-color", bg.as_str()),
        )
        .child(
            Element::new(Tag::Stop)
                .attr("offset", "100%")
                .attr("stop-color", gradient_bottom(bg.rgb()).to_string()),
        )
}

fn stats(calendar: &Calendar, settings: &Settings) -> Element {
    let mut group = Element::new(Tag::G)
        .child(
            Element::new(Tag::Text)
                .attr("style", FONT_VALUE)
                .attr_num("x", STATS_X)
                .attr_num("y", STATS_BASELINE)
                .attr("text-anchor", "start")
                .attr("class", "fill-strong")
                .text(group_thousands(calendar.total())),
        )
        .child(
            Element::new(Tag::Text)
                .attr("style", FONT_LABEL)
                .attr_num("x", STATS_X + STATS_LABEL_GAP)
                .attr_num("y", STATS_BASELINE)
                .attr("text-anchor", "start")
                .attr("class", "fill-fg")
                .text(settings.contrib_label()),
        );

    if let Some(stars) = calendar.total_stargazer_count {
        push_counter(&mut group, STATS_STAR_X, 6.0, STAR_ICON, stars);
    }
    if let Some(forks) = calendar.total_fork_count {
        push_counter(&mut group, STATS_FORK_X, 4.0, FORK_ICON, forks);
    }

    if let Some((first, last)) = calendar.period() {
        group.push(
            Element::new(Tag::Text)
                .attr("style", FONT_LABEL)
                .attr_num("x", SVG_WIDTH - PERIOD_MARGIN)
                .attr_num("y", PERIOD_MARGIN)
                .attr("dominant-baseline", "hanging")
                .attr("text-anchor", "end")
                .attr("class", "fill-weak")
                .text(format!(
                    "{} / {}",
                    first.format("%Y-%m-%d"),
                    last.format("%Y-%m-%d")
                )),
        );
    }
    group
}

/// Icon plus abbreviated count; the exact count goes in the `<title>`.
fn push_counter(group: &mut Element, x: f64, gap: f64, icon: &str, count: u64) {
    let placement = Transform::identity()
        .then(TransformOp::Translate(
            x + ICON_OFFSET.0,
            STATS_BASELINE + ICON_OFFSET.1,
        ))
        .then(TransformOp::Scale(ICON_SCALE, ICON_SCALE));
    group.push(
        Element::new(Tag::G)
            .attr("transform", placement.to_string())
            .attr("style", "opacity: 0.9")
            .child(
                Element::new(Tag::Path)
                    .attr("fill-rule", "evenodd")
                    .attr("d", icon)
                    .attr("class", "fill-fg"),
            ),
    );
    group.push(
        Element::new(Tag::Text)
            .attr("style", FONT_VALUE)
            .attr_num("x", x + gap)
            .attr_num("y", STATS_BASELINE)
            .attr("text-anchor", "start")
            .attr("class", "fill-fg")
            .text(to_scale(count))
            .child(Element::new(Tag::Title).text(count.to_string())),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/document.rs"]
mod tests;
