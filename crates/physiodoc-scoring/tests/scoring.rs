use physiodoc_scoring::{severity_score, SeverityBand};

#[test]
fn score_matches_formula_and_stays_in_range() {
    for pain in 0..=10u8 {
        for function in 0..=10u8 {
            for complaints in 0..=8usize {
                let score = severity_score(pain, function, complaints);
                let expected = (f64::from(pain) * 10.0 * 0.4
                    + f64::from(function) * 10.0 * 0.4
                    + complaints.min(5) as f64 / 5.0 * 100.0 * 0.2)
                    .round() as i64;
                assert_eq!(score, expected);
                assert!((0..=100).contains(&score));
            }
        }
    }
}

#[test]
fn score_endpoints() {
    assert_eq!(severity_score(0, 0, 0), 0);
    assert_eq!(severity_score(10, 10, 5), 100);
}

#[test]
fn complaint_count_caps_at_five() {
    assert_eq!(severity_score(0, 0, 5), severity_score(0, 0, 50));
}

#[test]
fn reference_scenario_scores_sixty() {
    // pain 7, function 6, two complaints:
    // round(0.4·70 + 0.4·60 + 0.2·40) = round(28 + 24 + 8) = 60
    let score = severity_score(7, 6, 2);
    assert_eq!(score, 60);
    assert_eq!(SeverityBand::classify(score), SeverityBand::Moderate);
}

#[test]
fn band_boundaries() {
    assert_eq!(SeverityBand::classify(33), SeverityBand::Mild);
    assert_eq!(SeverityBand::classify(34), SeverityBand::Moderate);
    assert_eq!(SeverityBand::classify(66), SeverityBand::Moderate);
    assert_eq!(SeverityBand::classify(67), SeverityBand::Pronounced);
}

#[test]
fn out_of_range_scores_still_classify() {
    assert_eq!(SeverityBand::classify(-5), SeverityBand::Mild);
    assert_eq!(SeverityBand::classify(140), SeverityBand::Pronounced);
}

#[test]
fn bands_carry_text_and_color_tokens() {
    assert_eq!(SeverityBand::Mild.text(), "mild complaints");
    assert_eq!(SeverityBand::Moderate.color(), "#faf089");
    assert_eq!(SeverityBand::Pronounced.to_string(), "pronounced");
}
