use super::*;
use crate::foundation::core::{ContributionLevel, Point};
use chrono::NaiveDate;

fn entry(y: i32, m: u32, d: u32, count: u32) -> CalendarEntry {
    CalendarEntry {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        contribution_count: count,
        contribution_level: ContributionLevel::new(if count == 0 { 0 } else { 2 }).unwrap(),
    }
}

fn run(start: NaiveDate, days: u32) -> Vec<CalendarEntry> {
    (0..days)
        .map(|i| {
            let date = start + chrono::Days::new(u64::from(i));
            CalendarEntry {
                date,
                contribution_count: i % 7,
                contribution_level: ContributionLevel::new((i % 5) as u8).unwrap(),
            }
        })
        .collect()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn canvas() -> Canvas {
    Canvas::new(1280.0, 850.0).unwrap()
}

#[test]
fn empty_calendar_places_nothing() {
    let cfg = LayoutConfig::default();
    assert!(IsoGrid::new(&[], canvas(), &cfg).unwrap().is_none());
    assert!(layout(&[], canvas(), &cfg).unwrap().is_empty());
}

#[test]
fn invalid_canvas_is_rejected_even_when_empty() {
    let cfg = LayoutConfig::default();
    let bad = Canvas {
        width: f64::NAN,
        height: 850.0,
    };
    assert!(layout(&[], bad, &cfg).is_err());
}

#[test]
fn grid_steps_follow_the_angle() {
    let cfg = LayoutConfig::default();
    let grid = IsoGrid::new(&[entry(2024, 1, 3, 1)], canvas(), &cfg)
        .unwrap()
        .unwrap();
    assert!((grid.dx - 20.0).abs() < 1e-12);
    assert!((grid.dy - 20.0 * 30f64.to_radians().tan()).abs() < 1e-12);
    assert!((grid.dxx - 18.0).abs() < 1e-12);
    assert_eq!(grid.offset_x, 140.0);
    // 2024-01-03 is a Wednesday: one entry plus three leading days fits one week.
    assert_eq!(grid.week_count, 1);
    assert!((grid.offset_y - (850.0 - 8.0 * grid.dy)).abs() < 1e-9);
}

#[test]
fn first_entry_is_week_zero_with_its_weekday() {
    let cfg = LayoutConfig::default();
    let start = NaiveDate::from_ymd_opt(2023, 10, 18).unwrap();
    let entries = run(start, 365);
    let placed = layout(&entries, canvas(), &cfg).unwrap();
    assert_eq!(placed.len(), entries.len());
    assert_eq!(placed[0].week, 0);
    assert_eq!(placed[0].day_of_week, 3);
    assert!(placed.iter().all(|p| p.week >= 0 && p.day_of_week < 7));
    // Sunday after the first Wednesday starts week 1.
    assert_eq!(placed[4].week, 1);
    assert_eq!(placed[4].day_of_week, 0);
}

#[test]
fn base_position_matches_formula() {
    let cfg = LayoutConfig::default();
    let entries = run(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(), 10);
    let grid = IsoGrid::new(&entries, canvas(), &cfg).unwrap().unwrap();
    let p = grid.place(&entries[9], &cfg);
    // Day 9 from a Sunday: week 1, Tuesday.
    assert_eq!((p.week, p.day_of_week), (1, 2));
    assert!((p.base_x - (grid.offset_x - grid.dx)).abs() < 1e-9);
    assert!((p.base_y - (grid.offset_y + 3.0 * grid.dy)).abs() < 1e-9);
    assert_eq!(p.diagonal(), 3);
}

#[test]
fn gaps_do_not_break_week_numbering() {
    let cfg = LayoutConfig::default();
    let entries = vec![entry(2024, 1, 7, 1), entry(2024, 2, 4, 5)];
    let placed = layout(&entries, canvas(), &cfg).unwrap();
    assert_eq!(placed[1].week, 4);
    assert_eq!(placed[1].day_of_week, 0);
}

#[test]
fn bar_height_is_three_at_zero_and_increasing() {
    let cfg = LayoutConfig::default();
    assert_eq!(cfg.bar_height(0), 3.0);
    let mut prev = cfg.bar_height(0);
    for count in 1..200 {
        let h = cfg.bar_height(count);
        assert!(h > prev);
        prev = h;
    }
    // log10(20/20 + 1) * 144 + 3
    assert!((cfg.bar_height(20) - (2f64.log10() * 144.0 + 3.0)).abs() < 1e-12);
}

#[test]
fn top_panel_maps_to_rhombus() {
    let cfg = LayoutConfig::default();
    let grid = IsoGrid::new(&[entry(2024, 1, 7, 0)], canvas(), &cfg)
        .unwrap()
        .unwrap();
    let (dxx, dyy) = (grid.dxx, grid.dyy);
    let top = grid.panel(PanelKind::Top, dxx, 10.0);
    let m = top.transform.to_affine();
    let w = top.width;
    assert!(close(m * Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    assert!(close(m * Point::new(w, 0.0), Point::new(dxx, -dyy)));
    assert!(close(m * Point::new(0.0, w), Point::new(dxx, dyy)));
    assert!(close(m * Point::new(w, w), Point::new(2.0 * dxx, 0.0)));
}

#[test]
fn side_panels_span_the_bar_height() {
    let cfg = LayoutConfig::default();
    let grid = IsoGrid::new(&[entry(2024, 1, 7, 0)], canvas(), &cfg)
        .unwrap()
        .unwrap();
    let (dxx, dyy) = (grid.dxx, grid.dyy);
    let bar_height = 42.0;

    let left = grid.panel(PanelKind::Left, 8.0, bar_height);
    let m = left.transform.to_affine();
    assert!(close(m * Point::new(8.0, 0.0), Point::new(dxx, dyy)));
    assert!(close(
        m * Point::new(0.0, left.height),
        Point::new(0.0, bar_height)
    ));
    assert!((left.height_for(bar_height) - left.height).abs() < 1e-12);

    let right = grid.panel(PanelKind::Right, 8.0, bar_height);
    let m = right.transform.to_affine();
    assert!(close(m * Point::new(0.0, 0.0), Point::new(dxx, dyy)));
    assert!(close(m * Point::new(8.0, 0.0), Point::new(2.0 * dxx, 0.0)));
    assert!(close(
        m * Point::new(0.0, right.height),
        Point::new(dxx, dyy + bar_height)
    ));
}
