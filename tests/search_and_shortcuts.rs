use std::cell::RefCell;
use std::rc::Rc;

use theta_editor::{
    builtin_templates, Content, EditorAction, EditorError, EditorMode, EditorSession,
    MemoryStore, SearchOptions, Shortcut, ShortcutMap, ThemeContext,
};

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
fn test_find_respects_the_case_flag() {
    let (session, _store) = text_session("Rust rust RUST");

    let sensitive = session.find("rust", SearchOptions::case_sensitive()).unwrap();
    assert_eq!(sensitive.len(), 1);

    let insensitive = session
        .find("rust", SearchOptions::case_insensitive())
        .unwrap();
    assert_eq!(insensitive.len(), 3);
}

#[test]
fn test_find_is_legal_in_preview() {
    let (mut session, _store) = text_session("needle in haystack");
    session.set_mode(EditorMode::Preview, 0).unwrap();
    let matches = session
        .find("needle", SearchOptions::case_sensitive())
        .unwrap();
    assert_eq!(matches.len(), 1);
}

#[test]
fn test_replace_all_marks_the_session_dirty() {
    let (mut session, _store) = text_session("one fish two fish");
    let count = session
        .replace_all("fish", "cat", SearchOptions::case_sensitive())
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(session.content().as_text(), Some("one cat two cat"));
    assert!(session.is_dirty());
}

#[test]
fn test_replace_all_is_rejected_in_preview() {
    let (mut session, _store) = text_session("one fish");
    session.set_mode(EditorMode::Preview, 0).unwrap();

    let err = session
        .replace_all("fish", "cat", SearchOptions::case_sensitive())
        .unwrap_err();
    assert!(matches!(err, EditorError::InvalidMode { .. }));
    assert_eq!(session.content().as_text(), Some("one fish"));
}

#[test]
fn test_replace_next_rewrites_only_the_first_match() {
    let (mut session, _store) = text_session("one fish two fish");
    let found = session
        .replace_next("fish", "cat", SearchOptions::case_sensitive())
        .unwrap();
    assert!(found);
    assert_eq!(session.content().as_text(), Some("one cat two fish"));
    assert!(session.is_dirty());

    // A second call advances to what is now the first remaining match.
    session
        .replace_next("fish", "cat", SearchOptions::case_sensitive())
        .unwrap();
    assert_eq!(session.content().as_text(), Some("one cat two cat"));
}

#[test]
fn test_replace_next_is_rejected_in_preview() {
    let (mut session, _store) = text_session("one fish");
    session.set_mode(EditorMode::Preview, 0).unwrap();

    let err = session
        .replace_next("fish", "cat", SearchOptions::case_sensitive())
        .unwrap_err();
    assert!(matches!(err, EditorError::InvalidMode { .. }));
    assert_eq!(session.content().as_text(), Some("one fish"));
    assert!(!session.is_dirty());
}

#[test]
fn test_replace_next_without_a_match_reports_false() {
    let (mut session, _store) = text_session("nothing here");
    let found = session
        .replace_next("absent", "x", SearchOptions::case_sensitive())
        .unwrap();
    assert!(!found);
    assert!(!session.is_dirty());
}

#[test]
fn test_replace_with_no_matches_keeps_the_session_clean() {
    let (mut session, _store) = text_session("nothing here");
    let count = session
        .replace_all("absent", "x", SearchOptions::case_sensitive())
        .unwrap();
    assert_eq!(count, 0);
    assert!(!session.is_dirty());
}

#[test]
fn test_search_on_a_table_session_is_not_text() {
    let (session, _) = {
        let store = Rc::new(RefCell::new(MemoryStore::new()));
        (
            EditorSession::new(
                Content::table(vec![vec!["a".into()]]),
                Box::new(Rc::clone(&store)),
                ThemeContext::new(),
            ),
            store,
        )
    };
    assert!(matches!(
        session.find("a", SearchOptions::case_sensitive()),
        Err(EditorError::NotText(_))
    ));
}

#[test]
fn test_ctrl_s_shortcut_saves_the_session() {
    let (mut session, store) = text_session("");
    session
        .apply_edit(theta_editor::Delta::set_text("unsaved"))
        .unwrap();

    let map = ShortcutMap::defaults();
    let action = session.dispatch(&map, Shortcut::ctrl('s'), 42);

    assert_eq!(action, Some(EditorAction::Save));
    assert!(!session.is_dirty());
    assert_eq!(session.last_saved_at(), Some(42));
    assert_eq!(store.borrow().persist_calls(), 1);
}

#[test]
fn test_undo_redo_shortcuts_round_trip_an_edit() {
    let (mut session, _store) = text_session("a");
    session
        .apply_edit(theta_editor::Delta::insert_text(1, "b"))
        .unwrap();

    let map = ShortcutMap::defaults();
    session.dispatch(&map, Shortcut::ctrl('z'), 0);
    assert_eq!(session.content().as_text(), Some("a"));

    session.dispatch(&map, Shortcut::ctrl_shift('z'), 0);
    assert_eq!(session.content().as_text(), Some("ab"));
}

#[test]
fn test_unbound_shortcut_does_nothing() {
    let (mut session, store) = text_session("body");
    let map = ShortcutMap::defaults();
    assert_eq!(session.dispatch(&map, Shortcut::ctrl('q'), 0), None);
    assert_eq!(store.borrow().persist_calls(), 0);
}

#[test]
fn test_find_shortcut_is_reported_back_to_the_host() {
    let (mut session, _store) = text_session("body");
    let map = ShortcutMap::defaults();
    assert_eq!(
        session.dispatch(&map, Shortcut::ctrl('f'), 0),
        Some(EditorAction::ToggleFindReplace)
    );
    assert!(!session.is_dirty());
}

#[test]
fn test_template_application_goes_through_the_edit_path() {
    let (mut session, _store) = text_session("");
    let templates = builtin_templates();
    let blank = templates.iter().find(|t| t.name == "Blank Document").unwrap();

    session.apply_template(blank).unwrap();
    assert!(session.is_dirty());
    assert!(session
        .content()
        .as_text()
        .unwrap()
        .contains("New Document"));

    // Reverting a template load is a single undo.
    session.undo().unwrap();
    assert_eq!(session.content().as_text(), Some(""));
}

#[test]
fn test_templates_are_rejected_in_preview() {
    let (mut session, _store) = text_session("keep me");
    session.set_mode(EditorMode::Preview, 0).unwrap();

    let templates = builtin_templates();
    assert!(session.apply_template(&templates[0]).is_err());
    assert_eq!(session.content().as_text(), Some("keep me"));
}
