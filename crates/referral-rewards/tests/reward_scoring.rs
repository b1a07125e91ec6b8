//! End-to-end scoring scenarios driven through the public service facade.

use referral_rewards::rewards::{
    parse_log, validate, EventKind, ReferralTree, Scores, ScoringService, ValidationError,
};

fn scores_of(entries: &[(&str, f64)]) -> Scores {
    entries
        .iter()
        .map(|(name, points)| (name.to_string(), *points))
        .collect()
}

fn score(raw: &str) -> Result<Scores, ValidationError> {
    ScoringService::new().score(raw)
}

#[test]
fn single_recommendation_accepted() {
    let raw = "2018-06-12 09:41 A recommends B\n2018-06-14 09:41 B accepts";
    assert_eq!(score(raw).expect("valid log"), scores_of(&[("A", 1.0)]));
}

#[test]
fn reference_log_awards_decaying_points() {
    let raw = "
        2018-06-12 09:41 A recommends B
        2018-06-14 09:41 B accepts
        2018-06-16 09:41 B recommends C
        2018-06-17 09:41 C accepts
        2018-06-19 09:41 C recommends D
        2018-06-23 09:41 B recommends D
        2018-06-25 09:41 D accepts
    ";

    assert_eq!(
        score(raw).expect("valid log"),
        scores_of(&[("A", 1.75), ("B", 1.5), ("C", 1.0)])
    );
}

#[test]
fn reference_log_is_order_independent() {
    let raw = "2018-06-25 09:41 D accepts\r\n\
               2018-06-17 09:41 C accepts\r\n\
               2018-06-12 09:41 A recommends B\r\n\
               2018-06-23 09:41 B recommends D\r\n\
               2018-06-16 09:41 B recommends C\r\n\
               2018-06-19 09:41 C recommends D\r\n\
               2018-06-14 09:41 B accepts\r\n";

    assert_eq!(
        score(raw).expect("valid log"),
        scores_of(&[("A", 1.75), ("B", 1.5), ("C", 1.0)])
    );
}

#[test]
fn acceptance_before_inviter_accepts_stops_at_inviter() {
    let raw = "
        2020-01-01 10:00 A recommends B
        2020-01-02 10:00 B recommends C
        2020-01-03 10:00 C accepts
        2020-01-04 10:00 B accepts
        2020-01-05 10:00 C accepts
    ";

    // C's first acceptance reaches only B; after B accepts, C's second acceptance reaches A.
    assert_eq!(
        score(raw).expect("valid log"),
        scores_of(&[("A", 1.5), ("B", 2.0)])
    );
}

#[test]
fn recommendations_without_acceptance_score_nothing() {
    let raw = "
        2020-01-01 10:00 A recommends B
        2020-01-02 10:00 B recommends C
    ";
    assert!(score(raw).expect("valid log").is_empty());
}

#[test]
fn names_are_case_sensitive() {
    let raw = "
        2020-01-01 10:00 alice recommends bob
        2020-01-02 10:00 Bob ACCEPTS
    ";
    assert!(score(raw).expect("valid log").is_empty());
}

#[test]
fn empty_input_reports_data_error() {
    let error = score("  \n ").expect_err("blank rejected");
    assert_eq!(error.field(), "data");
}

#[test]
fn incomplete_recommendation_reports_format_error() {
    let error = score("2020-02-09 02:21 A recommends").expect_err("rejected");
    assert_eq!(error.field(), "format");
    assert_eq!(error.line(), Some(1));
}

#[test]
fn invalid_datetime_reports_date_error() {
    let error = score("2020-02-09 02:21 A recommends B\n2020-82-09 72:21 B accepts")
        .expect_err("rejected");
    assert_eq!(error, ValidationError::InvalidDateTime { line: 2 });
}

#[test]
fn engine_can_run_on_unvalidated_input() {
    let raw = "noise\n2018-06-12 09:41 A recommends B\n???\n2018-06-14 09:41 B accepts";
    assert!(validate(raw).is_err());

    let log = parse_log(raw);
    assert_eq!(log.lines.len(), 4);
    assert_eq!(
        log.events.iter().map(|event| event.kind()).collect::<Vec<_>>(),
        vec![EventKind::Recommend, EventKind::Accept]
    );

    let tree = ReferralTree::from_events(&log.events);
    assert_eq!(tree.scores(), scores_of(&[("A", 1.0)]));
}

#[test]
fn blob_without_valid_lines_scores_nothing() {
    let raw = "noise\n2020-02-09 02:21 A recommends\n2020-82-09 72:21 A accepts";
    assert!(validate(raw).is_err());

    let log = parse_log(raw);
    assert_eq!(log.lines.len(), 3);
    assert!(log.events.is_empty());
    assert!(ReferralTree::from_events(&log.events).scores().is_empty());
}
