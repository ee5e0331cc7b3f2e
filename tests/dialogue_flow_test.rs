use zeto::catalog;
use zeto::dialogue::{DialogueSession, Phase, Sender};

const ANSWERS: [&str; 9] = [
    "365.25", "100", "3.5", "1.2", "1.0", "288", "5778", "4.5", "1.0",
];

fn completed_session() -> DialogueSession {
    let mut session = DialogueSession::new();
    session.open();
    for answer in ANSWERS {
        session.submit(answer);
    }
    session
}

#[test]
fn test_fields_are_visited_in_catalog_order() {
    let mut session = DialogueSession::new();
    let opening = session.open();

    // The greeting precedes the first prompt.
    assert!(opening[0].content.contains("Hello, Commander!"));
    assert!(opening
        .last()
        .unwrap()
        .content
        .contains(catalog::by_index(0).unwrap().prompt));

    for (index, answer) in ANSWERS.iter().enumerate() {
        assert_eq!(session.cursor(), index, "cursor skipped or repeated a field");
        let messages = session.submit(answer);
        assert_eq!(messages[0].sender, Sender::User);

        if index + 1 < ANSWERS.len() {
            // The next prompt is emitted as part of the same transition.
            let next = catalog::by_index(index + 1).unwrap();
            assert!(messages.iter().any(|m| m.content.contains(next.prompt)));
            assert_eq!(session.phase(), Phase::AwaitingAnswer);
        }
    }

    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.parameters().len(), 9);
    assert!(session.parameters().is_complete());
}

#[test]
fn test_completed_parameters_match_answers() {
    let session = completed_session();
    let parameters = session.parameters();

    assert_eq!(parameters.get("orbper"), Some(365.25));
    assert_eq!(parameters.get("trandep"), Some(100.0));
    assert_eq!(parameters.get("trandur"), Some(3.5));
    assert_eq!(parameters.get("rade"), Some(1.2));
    assert_eq!(parameters.get("insol"), Some(1.0));
    assert_eq!(parameters.get("eqt"), Some(288.0));
    assert_eq!(parameters.get("teff"), Some(5778.0));
    assert_eq!(parameters.get("logg"), Some(4.5));
    assert_eq!(parameters.get("rad"), Some(1.0));
}

#[test]
fn test_rejection_echoes_input_and_stays_put() {
    let mut session = DialogueSession::new();
    session.open();

    let messages = session.submit("not-a-number");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].content, "not-a-number");
    assert!(messages[1].is_error);

    assert_eq!(session.cursor(), 0);
    assert!(session.parameters().is_empty());

    // Out-of-range value: still stuck on the first field, with the range in
    // the error text.
    let messages = session.submit("999999");
    assert!(messages[1].content.contains("between 0.15 and 84000"));
    assert_eq!(session.cursor(), 0);

    // A valid retry finally advances.
    let messages = session.submit("365.25");
    assert_eq!(session.cursor(), 1);
    assert!(messages.iter().any(|m| m.content.contains("Got it!")));
}

#[test]
fn test_exactly_one_error_message_per_rejection() {
    let mut session = DialogueSession::new();
    session.open();

    let messages = session.submit("abc");
    let errors = messages.iter().filter(|m| m.is_error).count();
    assert_eq!(errors, 1);
}

#[test]
fn test_hand_off_happens_exactly_once() {
    let mut session = completed_session();

    let first = session.take_completed();
    assert!(first.is_some());
    assert!(first.unwrap().is_complete());

    assert!(session.take_completed().is_none());
    assert!(session.take_completed().is_none());
}

#[test]
fn test_submission_after_complete_is_noop() {
    let mut session = completed_session();
    assert_eq!(session.phase(), Phase::Complete);

    let messages = session.submit("42");
    assert!(messages.is_empty());
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(session.parameters().len(), 9);

    // Completion did not re-trigger: the set is still handed off only once.
    assert!(session.take_completed().is_some());
    assert!(session.take_completed().is_none());
}

#[test]
fn test_failure_is_terminal() {
    let mut session = completed_session();
    session.take_completed();
    session.fail();

    assert_eq!(session.phase(), Phase::Failed);
    assert!(session.submit("1.0").is_empty());
    assert!(session.take_completed().is_none());

    // Parameters stay readable for diagnostic export.
    assert!(session.parameters().is_complete());
}

#[test]
fn test_fail_before_complete_is_ignored() {
    let mut session = DialogueSession::new();
    session.open();
    session.fail();
    assert_eq!(session.phase(), Phase::AwaitingAnswer);
}

#[test]
fn test_progress_tracks_current_question() {
    let mut session = DialogueSession::new();
    session.open();
    assert_eq!(session.progress(), (1, 9));

    session.submit("365.25");
    assert_eq!(session.progress(), (2, 9));

    for answer in &ANSWERS[1..] {
        session.submit(answer);
    }
    assert_eq!(session.progress(), (9, 9));
}
