use nota::{Evaluation, ValidationError};

#[test]
fn accepts_scores_and_weights_on_their_bounds() {
    assert!(Evaluation::new(0.0, 100.0).is_ok());
    assert!(Evaluation::new(20.0, 100.0).is_ok());
    assert!(Evaluation::new(15.0, 0.5).is_ok());
}

#[test]
fn rejects_scores_outside_range() {
    assert!(matches!(
        Evaluation::new(-1.0, 50.0),
        Err(ValidationError::ScoreOutOfRange(s)) if s == -1.0
    ));
    assert!(matches!(
        Evaluation::new(21.0, 50.0),
        Err(ValidationError::ScoreOutOfRange(s)) if s == 21.0
    ));
}

#[test]
fn rejects_weights_outside_range() {
    // Zero weight is invalid; the lower bound is exclusive.
    assert!(matches!(
        Evaluation::new(15.0, 0.0),
        Err(ValidationError::WeightOutOfRange(w)) if w == 0.0
    ));
    assert!(matches!(
        Evaluation::new(15.0, 101.0),
        Err(ValidationError::WeightOutOfRange(w)) if w == 101.0
    ));
}

#[test]
fn weighted_score_scales_by_percentage() {
    let evaluation = Evaluation::new(15.0, 50.0).expect("valid evaluation");
    assert_eq!(evaluation.weighted_score(), 7.5);

    let full = Evaluation::new(20.0, 100.0).expect("valid evaluation");
    assert_eq!(full.weighted_score(), 20.0);
}

#[test]
fn accessors_return_the_constructed_values() {
    let evaluation = Evaluation::new(17.0, 40.0).expect("valid evaluation");
    assert_eq!(evaluation.score(), 17.0);
    assert_eq!(evaluation.weight(), 40.0);
}

#[test]
fn parses_from_score_slash_weight() {
    let evaluation = "15/50".parse::<Evaluation>().expect("parse 15/50");
    assert_eq!(evaluation.score(), 15.0);
    assert_eq!(evaluation.weight(), 50.0);

    let spaced = " 17 / 25 ".parse::<Evaluation>().expect("parse with spaces");
    assert_eq!(spaced.score(), 17.0);
    assert_eq!(spaced.weight(), 25.0);
}

#[test]
fn parse_rejects_malformed_and_out_of_range_input() {
    assert!("15".parse::<Evaluation>().is_err());
    assert!("a/b".parse::<Evaluation>().is_err());
    assert!("21/50".parse::<Evaluation>().is_err());
}
