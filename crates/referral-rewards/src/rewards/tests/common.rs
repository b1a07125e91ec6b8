use axum::response::Response;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::rewards::domain::Scores;

/// One referral log entry used to render test input.
#[derive(Debug, Clone)]
pub(super) enum Entry {
    Recommend(String, String),
    Accept(String),
}

pub(super) fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 6, 12)
        .and_then(|date| date.and_hms_opt(9, 41, 0))
        .expect("valid base timestamp")
}

pub(super) fn render_line(minutes: i64, entry: &Entry) -> String {
    let timestamp = base_time() + Duration::minutes(minutes);
    let stamp = timestamp.format("%Y-%m-%d %H:%M");
    match entry {
        Entry::Recommend(inviter, invitee) => format!("{stamp} {inviter} recommends {invitee}"),
        Entry::Accept(accepter) => format!("{stamp} {accepter} accepts"),
    }
}

/// Render entries with strictly increasing timestamps, one minute apart.
pub(super) fn render_log(entries: &[Entry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| render_line(index as i64, entry))
        .collect()
}

pub(super) fn name(index: u8) -> String {
    format!("P{index}")
}

pub(super) fn scores_of(entries: &[(&str, f64)]) -> Scores {
    entries
        .iter()
        .map(|(name, points)| (name.to_string(), *points))
        .collect()
}

pub(super) fn assert_scores_close(actual: &Scores, expected: &Scores) {
    assert_eq!(
        actual.keys().collect::<Vec<_>>(),
        expected.keys().collect::<Vec<_>>(),
        "rewarded participants differ"
    );
    for (name, points) in expected {
        let actual_points = actual[name];
        assert!(
            (actual_points - points).abs() < 1e-9,
            "{name}: expected {points}, got {actual_points}"
        );
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
