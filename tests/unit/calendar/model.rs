use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn epoch_day_matches_unix_epoch() {
    assert_eq!(epoch_day(date(1970, 1, 1)), 0);
    assert_eq!(epoch_day(date(1970, 1, 8)), 7);
    assert_eq!(epoch_day(date(1969, 12, 31)), -1);
    assert_eq!(epoch_day(date(2024, 1, 1)), 19_723);
}

#[test]
fn day_of_week_starts_on_sunday() {
    // 2024-01-07 is a Sunday.
    assert_eq!(day_of_week(date(2024, 1, 7)), 0);
    assert_eq!(day_of_week(date(2024, 1, 8)), 1);
    assert_eq!(day_of_week(date(2024, 1, 13)), 6);
}

#[test]
fn parses_camel_case_json() {
    let json = r#"{
        "contributionCalendar": [
            { "date": "2024-01-01", "contributionCount": 3, "contributionLevel": 1 },
            { "date": "2024-01-02", "contributionCount": 0, "contributionLevel": 0 }
        ]
    }"#;
    let cal = Calendar::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cal.entries().len(), 2);
    assert_eq!(cal.total(), 3);
    assert_eq!(cal.period(), Some((date(2024, 1, 1), date(2024, 1, 2))));
}

#[test]
fn reported_total_wins_over_sum() {
    let json = r#"{ "contributionCalendar": [], "totalContributions": 42 }"#;
    let cal = Calendar::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cal.total(), 42);
    assert_eq!(cal.period(), None);
}

#[test]
fn rejects_out_of_range_level() {
    let json = r#"{
        "contributionCalendar": [
            { "date": "2024-01-01", "contributionCount": 3, "contributionLevel": 5 }
        ]
    }"#;
    let err = Calendar::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, ContribError::Serde(_)));
}

#[test]
fn repository_counts_are_optional() {
    let json = r#"{ "contributionCalendar": [], "totalStargazerCount": 1234, "totalForkCount": 7 }"#;
    let cal = Calendar::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cal.total_stargazer_count, Some(1234));
    assert_eq!(cal.total_fork_count, Some(7));

    let cal = Calendar::from_reader(r#"{ "contributionCalendar": [] }"#.as_bytes()).unwrap();
    assert_eq!(cal.total_stargazer_count, None);
    assert_eq!(cal.total_fork_count, None);
}
