//! End-to-end navigation through `QuestApp` without rendering.

mod common;

use common::app;
use quest_code::error::LookupError;
use quest_code::model::AppState;

#[test]
fn two_sum_resolves_with_solution_and_code_toggle() {
    let (mut app, _) = app();
    app.open_question("Arrays", "1");

    assert_eq!(app.state, AppState::Question);
    let view = app.question_view().expect("question resolves");
    assert_eq!(view.question.title, "Two Sum");
    assert_eq!(
        view.solution.map(|s| s.solution.approach.as_str()),
        Some("Use a hash map")
    );
    assert_eq!(view.visible_code(), None);

    app.toggle_code();
    assert_eq!(app.question_view().unwrap().visible_code(), Some("..."));

    app.toggle_code();
    assert_eq!(app.question_view().unwrap().visible_code(), None);
}

#[test]
fn missing_question_renders_not_found_only() {
    let (mut app, _) = app();
    app.open_question("Arrays", "999");

    assert_eq!(app.state, AppState::Question);
    assert!(app.question_view().is_none());
    assert!(app.current_question().is_none());
    assert_eq!(
        app.lookup_error(),
        Some(&LookupError::QuestionNotFound {
            subject: "Arrays".to_string(),
            id: 999
        })
    );
}

#[test]
fn not_found_keeps_the_requested_pair() {
    let (mut app, _) = app();
    app.open_question("Arrays", "999");
    assert_eq!(app.requested_question(), Some(("Arrays", "999")));

    app.back_to_subjects();
    assert_eq!(app.requested_question(), None);
}

#[test]
fn default_config_does_not_cap_pinch() {
    let (mut app, _) = app();
    app.open_question("Arrays", "1");
    app.handle_zoom_delta(Some(2.5));
    assert_eq!(app.handle_zoom_delta(Some(2.0)), 5.0);
}

#[test]
fn embedded_config_does_not_cap_pinch() {
    let datasets = common::datasets();
    let config = quest_code::config::AppConfig::embedded().expect("embedded config");
    let mut app = quest_code::QuestApp::new(
        datasets,
        config,
        Box::new(common::RecordingSpeech::default()),
    );
    app.open_question("Arrays", "1");
    app.handle_zoom_delta(Some(2.5));
    app.handle_zoom_delta(Some(2.0));
    assert_eq!(app.handle_zoom_delta(None), 5.0);
}

#[test]
fn malformed_id_and_unknown_subject_are_not_found() {
    let (mut app, _) = app();
    app.open_question("Arrays", "one");
    assert!(matches!(app.lookup_error(), Some(LookupError::MalformedId { .. })));
    assert!(app.question_view().is_none());

    app.open_question("Graphs", "1");
    assert!(matches!(app.lookup_error(), Some(LookupError::SubjectNotFound { .. })));
    assert_eq!(
        app.lookup_error().unwrap().user_message(),
        "❌ Question not found."
    );
}

#[test]
fn question_without_matching_solution_omits_section() {
    let (mut app, _) = app();
    app.open_question("Strings", "1");
    let view = app.question_view().unwrap();
    assert!(view.solution.is_none());
    assert!(view.code_snippet().is_none());
}

#[test]
fn hints_toggle_independently() {
    let (mut app, _) = app();
    app.open_question("Arrays", "1");

    app.toggle_hint(1);
    let view = app.question_view().unwrap();
    assert_eq!(view.visible_hint(0), None);
    assert_eq!(view.visible_hint(1), Some("Use a hash map."));
    assert_eq!(view.hint_label(1), "🔽 Hint 2");
    assert_eq!(view.hint_label(0), "▶ Hint 1");

    // fuera de rango: se ignora
    app.toggle_hint(5);
    assert_eq!(app.disclosure().unwrap().visible_hint_count(), 1);
}

#[test]
fn disclosure_is_fresh_after_navigation() {
    let (mut app, _) = app();
    app.open_question("Arrays", "1");
    app.toggle_hint(0);
    app.toggle_code();

    app.back_to_subjects();
    assert!(app.session.is_none());
    assert_eq!(app.state, AppState::Subjects);

    app.open_question("Arrays", "1");
    let disclosure = app.disclosure().unwrap();
    assert_eq!(disclosure.visible_hint_count(), 0);
    assert!(!disclosure.is_code_visible());
}

#[test]
fn read_aloud_speaks_description_and_approach() {
    let (mut app, speech) = app();
    app.open_question("Arrays", "1");
    app.read_aloud();

    let calls = speech.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].0,
        "Find two numbers that add up to target. Use a hash map"
    );
    assert_eq!(calls[0].1.rate, 1.0);
    assert_eq!(calls[0].1.language.as_deref(), Some("en-US"));
}

#[test]
fn read_aloud_without_question_is_silent() {
    let (mut app, speech) = app();
    app.open_question("Arrays", "999");
    app.read_aloud();
    assert!(speech.calls.borrow().is_empty());
}

#[test]
fn speech_test_screen_speaks_fixed_sentence() {
    let (mut app, speech) = app();
    app.open_speech_test();
    assert_eq!(app.state, AppState::SpeechTest);
    app.speak_test_sentence();
    assert_eq!(
        speech.calls.borrow()[0].0,
        quest_code::speech::TEST_SENTENCE
    );
}

#[test]
fn pinch_scale_persists_after_gesture_until_reset() {
    let (mut app, _) = app();
    app.open_question("Arrays", "1");

    app.handle_zoom_delta(Some(1.5));
    app.handle_zoom_delta(Some(2.0));
    assert_eq!(app.handle_zoom_delta(None), 3.0);
    assert_eq!(app.question_view().unwrap().scale, 3.0);

    // pellizco hacia dentro: nunca por debajo del tamaño original
    app.handle_zoom_delta(Some(0.5));
    assert_eq!(app.zoom_scale(), 1.0);
    app.handle_zoom_delta(None);

    app.handle_zoom_delta(Some(2.0));
    app.handle_zoom_delta(None);
    app.reset_zoom();
    assert_eq!(app.zoom_scale(), 1.0);
}

#[test]
fn subject_list_lists_every_question() {
    let (app, _) = app();
    let infos = app.subject_infos();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].heading(), "Arrays (2 questions)");
    assert_eq!(infos[1].heading(), "Strings (1 question)");
    assert_eq!(infos[0].cards[1].id_param(), "2");
}
