use std::cell::RefCell;
use std::rc::Rc;

use theta_editor::{
    Content, Delta, EditorError, EditorMode, EditorSession, MemoryStore, SaveOutcome,
    SessionEvent, ThemeContext,
};

// Helper to build a text session sharing a handle on its memory store, so
// tests can count persist calls and arm failures.
fn text_session(body: &str) -> (EditorSession, Rc<RefCell<MemoryStore>>) {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let session = EditorSession::new(
        Content::text(body),
        Box::new(Rc::clone(&store)),
        ThemeContext::new(),
    );
    (session, store)
}

#[test]
fn test_spec_scenario_edit_save_preview_reject() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (mut session, _store) = text_session("");

    session.apply_edit(Delta::set_text("hello")).unwrap();
    assert!(session.is_dirty());

    assert_eq!(session.save(100).unwrap(), SaveOutcome::Saved);
    assert!(!session.is_dirty());
    assert_eq!(session.last_saved_at(), Some(100));

    session.set_mode(EditorMode::Preview, 101).unwrap();
    let err = session.apply_edit(Delta::set_text("x")).unwrap_err();
    assert!(matches!(err, EditorError::InvalidMode { .. }));
    assert_eq!(session.content().as_text(), Some("hello"));
}

#[test]
fn test_dirty_stays_set_until_a_successful_save() {
    let (mut session, store) = text_session("draft");

    session.apply_edit(Delta::insert_text(5, "!")).unwrap();
    assert!(session.is_dirty());
    session.apply_edit(Delta::insert_text(6, "!")).unwrap();
    assert!(session.is_dirty());

    store.borrow_mut().fail();
    assert!(session.save(10).is_err());
    assert!(session.is_dirty());

    store.borrow_mut().succeed();
    assert_eq!(session.save(20).unwrap(), SaveOutcome::Saved);
    assert!(!session.is_dirty());
    assert_eq!(session.last_saved_at(), Some(20));
}

#[test]
fn test_preview_never_mutates_content() {
    let (mut session, _store) = text_session("body");
    session.set_mode(EditorMode::Preview, 0).unwrap();

    for delta in [
        Delta::set_text("other"),
        Delta::insert_text(0, "x"),
        Delta::delete_text(0, 1),
    ] {
        assert!(matches!(
            session.apply_edit(delta),
            Err(EditorError::InvalidMode { .. })
        ));
    }
    assert_eq!(session.content().as_text(), Some("body"));
    assert!(!session.is_dirty());
}

#[test]
fn test_split_mode_accepts_edits() {
    let (mut session, _store) = text_session("");
    session.set_mode(EditorMode::Split, 0).unwrap();
    session.apply_edit(Delta::set_text("split edit")).unwrap();
    assert_eq!(session.content().as_text(), Some("split edit"));
}

#[test]
fn test_tick_is_a_no_op_when_clean() {
    let (mut session, store) = text_session("saved already");

    assert_eq!(session.tick(100).unwrap(), SaveOutcome::Clean);
    assert_eq!(store.borrow().persist_calls(), 0);
}

#[test]
fn test_tick_saves_dirty_content_at_most_once_per_interval() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("v1")).unwrap();

    // First tick after arming fires.
    assert_eq!(session.tick(100).unwrap(), SaveOutcome::Saved);
    assert_eq!(store.borrow().persist_calls(), 1);

    // Dirty again, but still inside the 30-second interval.
    session.apply_edit(Delta::set_text("v2")).unwrap();
    assert_eq!(session.tick(110).unwrap(), SaveOutcome::Clean);
    assert_eq!(store.borrow().persist_calls(), 1);

    // Interval elapsed: the retry fires.
    assert_eq!(session.tick(130).unwrap(), SaveOutcome::Saved);
    assert_eq!(store.borrow().persist_calls(), 2);
}

#[test]
fn test_save_then_tick_makes_no_further_storage_call() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("hello")).unwrap();

    session.save(100).unwrap();
    assert_eq!(store.borrow().persist_calls(), 1);

    assert_eq!(session.tick(200).unwrap(), SaveOutcome::Clean);
    assert_eq!(store.borrow().persist_calls(), 1);
}

#[test]
fn test_failed_autosave_is_retried_on_a_later_tick() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("v1")).unwrap();

    store.borrow_mut().fail();
    assert!(session.tick(100).is_err());
    assert!(session.is_dirty());

    store.borrow_mut().succeed();
    assert_eq!(session.tick(130).unwrap(), SaveOutcome::Saved);
    assert!(!session.is_dirty());
}

#[test]
fn test_leaving_edit_mode_dirty_saves_before_the_mode_changes() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("unsaved")).unwrap();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.events().subscribe(Box::new(move |event: &SessionEvent| {
        sink.borrow_mut().push(event.clone());
    }));

    session.set_mode(EditorMode::Preview, 50).unwrap();

    assert_eq!(store.borrow().persist_calls(), 1);
    assert!(!session.is_dirty());
    assert_eq!(session.mode(), EditorMode::Preview);

    // Exactly one save attempt, observed strictly before the mode change.
    let events = events.borrow();
    assert_eq!(
        *events,
        vec![
            SessionEvent::Saved { at: 50 },
            SessionEvent::ModeChanged {
                old: EditorMode::Edit,
                new: EditorMode::Preview,
            },
        ]
    );
}

#[test]
fn test_mode_change_survives_a_failed_implicit_save() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("unsaved")).unwrap();
    store.borrow_mut().fail();

    assert!(session.set_mode(EditorMode::Preview, 50).is_err());
    assert_eq!(session.mode(), EditorMode::Preview);
    assert!(session.is_dirty());
}

#[test]
fn test_same_mode_call_attempts_no_save() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("unsaved")).unwrap();

    session.set_mode(EditorMode::Edit, 10).unwrap();
    assert_eq!(store.borrow().persist_calls(), 0);
    assert!(session.is_dirty());
}

#[test]
fn test_close_cancels_the_autosave_timer() {
    let (mut session, store) = text_session("");
    session.apply_edit(Delta::set_text("pending")).unwrap();

    session.close();
    assert!(session.is_closed());

    assert_eq!(session.tick(1_000).unwrap(), SaveOutcome::Clean);
    assert_eq!(store.borrow().persist_calls(), 0);
}

#[test]
fn test_undo_and_redo_walk_the_edit_history() {
    let (mut session, _store) = text_session("a");
    session.apply_edit(Delta::insert_text(1, "b")).unwrap();
    session.apply_edit(Delta::insert_text(2, "c")).unwrap();
    assert_eq!(session.content().as_text(), Some("abc"));

    assert!(session.undo().unwrap());
    assert_eq!(session.content().as_text(), Some("ab"));
    assert!(session.undo().unwrap());
    assert_eq!(session.content().as_text(), Some("a"));
    assert!(!session.undo().unwrap());

    assert!(session.redo().unwrap());
    assert!(session.redo().unwrap());
    assert_eq!(session.content().as_text(), Some("abc"));
    assert!(!session.redo().unwrap());
}

#[test]
fn test_a_fresh_edit_clears_the_redo_stack() {
    let (mut session, _store) = text_session("a");
    session.apply_edit(Delta::insert_text(1, "b")).unwrap();
    session.undo().unwrap();
    session.apply_edit(Delta::insert_text(1, "z")).unwrap();

    assert!(!session.can_redo());
    assert_eq!(session.content().as_text(), Some("az"));
}

#[test]
fn test_undo_is_blocked_in_preview() {
    let (mut session, _store) = text_session("a");
    session.apply_edit(Delta::insert_text(1, "b")).unwrap();
    session.set_mode(EditorMode::Preview, 0).unwrap();

    assert!(matches!(
        session.undo(),
        Err(EditorError::InvalidMode { .. })
    ));
    assert_eq!(session.content().as_text(), Some("ab"));
}
