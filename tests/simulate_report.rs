use rerender_lab::demo::face::FaceVariant;
use rerender_lab::demo::satisfaction::SatisfactionLevel;
use rerender_lab::simulate::{simulate_counter, simulate_face, FinalState};
use rerender_lab::ui::counter::CounterIntent;
use serde_json::Value;

#[test]
fn skip_sequence_counts_one_then_two() {
    let report = simulate_face(FaceVariant::Skip, SatisfactionLevel::new(250), &[260, 280]);
    assert_eq!(report.renders, 1);

    let report = simulate_face(FaceVariant::Skip, SatisfactionLevel::new(250), &[260, 280, 310]);
    assert_eq!(report.renders, 2);
    assert_eq!(report.events.len(), 2);
}

#[test]
fn skip_sequence_reports_skipped_changes() {
    let report = simulate_face(FaceVariant::Skip, SatisfactionLevel::new(250), &[260, 280, 310]);
    match report.final_state {
        FinalState::Face {
            skipped,
            rendered_level,
            ..
        } => {
            assert_eq!(skipped, 2);
            assert_eq!(rendered_level, 310);
        }
        other => panic!("expected face state, got {other:?}"),
    }

    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["final"]["skipped"], 2);

    let report = simulate_face(FaceVariant::NoSkip, SatisfactionLevel::new(250), &[260, 280, 310]);
    assert!(matches!(report.final_state, FinalState::Face { skipped: 0, .. }));
}

#[test]
fn no_skip_sequence_renders_per_change() {
    let report = simulate_face(FaceVariant::NoSkip, SatisfactionLevel::new(250), &[260, 280, 310]);
    assert_eq!(report.renders, 4);
}

#[test]
fn repeated_levels_are_not_changes() {
    let report = simulate_face(FaceVariant::NoSkip, SatisfactionLevel::new(250), &[250, 260, 260]);
    assert_eq!(report.renders, 2);
}

#[test]
fn out_of_range_levels_are_clamped() {
    let report = simulate_face(FaceVariant::NoSkip, SatisfactionLevel::new(10), &[-40, 9000]);
    match report.final_state {
        FinalState::Face { level, .. } => assert_eq!(level, 500),
        other => panic!("expected face state, got {other:?}"),
    }
    let details: Vec<String> = report.events.into_iter().map(|e| e.detail).collect();
    assert_eq!(
        details,
        vec![
            "level=10 class=very-dissatisfied",
            "level=0 class=very-dissatisfied",
            "level=500 class=very-satisfied",
        ]
    );
}

#[test]
fn skip_report_shows_stale_rendered_level() {
    let report = simulate_face(FaceVariant::Skip, SatisfactionLevel::new(250), &[299]);
    assert_eq!(
        report.final_state,
        FinalState::Face {
            variant: FaceVariant::Skip,
            level: 299,
            class: rerender_lab::demo::Satisfaction::Neither,
            rendered_level: 250,
            skipped: 1,
        }
    );
}

#[test]
fn json_report_shape() {
    let report = simulate_counter(&[CounterIntent::Increment, CounterIntent::Toggle]);
    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["renders"], 3);
    assert_eq!(json["final"]["demo"], "counter");
    assert_eq!(json["final"]["count"], 1);
    assert_eq!(json["final"]["toggled"], true);
    assert_eq!(json["final"]["computed"], 2);

    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[0]["kind"], "expensive-computation");
    assert_eq!(events[0]["message"], "Expensive computation");
    assert_eq!(events[2]["seq"], 3);
}

#[test]
fn json_face_report_uses_labels() {
    let report = simulate_face(FaceVariant::NoSkip, SatisfactionLevel::new(300), &[]);
    let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["final"]["demo"], "face");
    assert_eq!(json["final"]["variant"], "no-skip");
    assert_eq!(json["final"]["class"], "somewhat-satisfied");
    assert_eq!(json["events"][0]["kind"], "face-rerender");
}
