//! Property tests over the catalog and solution lookups.

mod common;

use proptest::prelude::*;
use quest_code::catalog::{find_question, find_subject, resolve_question};
use quest_code::gesture::clamp_scale;
use quest_code::solutions::find_solution;

proptest! {
    #[test]
    fn absent_ids_are_not_found(id in any::<i64>().prop_filter("present", |id| *id != 1 && *id != 2)) {
        let data = common::datasets();
        prop_assert!(resolve_question(&data.catalog, "Arrays", &id.to_string()).is_err());
    }

    #[test]
    fn absent_subjects_are_not_found(name in "[A-Za-z ]{0,12}") {
        prop_assume!(name != "Arrays" && name != "Strings");
        let data = common::datasets();
        prop_assert!(find_subject(&data.catalog, &name).is_none());
        prop_assert!(resolve_question(&data.catalog, &name, "1").is_err());
    }

    #[test]
    fn clamp_never_goes_below_lower_bound(raw in 0.0f32..10.0, lower in 0.1f32..3.0) {
        let scale = clamp_scale(raw, lower);
        prop_assert!(scale >= lower);
        if raw >= lower {
            prop_assert_eq!(scale, raw);
        }
    }
}

#[test]
fn every_question_round_trips_through_its_text_id() {
    let data = common::datasets();
    for subject in &data.catalog.subjects {
        for question in &subject.questions {
            let found = resolve_question(&data.catalog, &subject.subject, &question.id.to_string())
                .expect("present question resolves");
            assert_eq!(found, question);
            assert_eq!(find_question(subject, question.id), Some(question));
        }
    }
}

#[test]
fn solution_lookup_is_deterministic() {
    let data = common::datasets();
    for subject in &data.catalog.subjects {
        for question in &subject.questions {
            let first = find_solution(&data.solutions, question);
            let second = find_solution(&data.solutions, question);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn clamp_table_matches_pinch_policy() {
    let outputs: Vec<f32> = [0.5, 1.0, 1.5, 3.0].iter().map(|r| clamp_scale(*r, 1.0)).collect();
    assert_eq!(outputs, [1.0, 1.0, 1.5, 3.0]);
}
