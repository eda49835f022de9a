mod autosave;
mod history;

pub use autosave::{AutosaveTimer, DEFAULT_AUTOSAVE_INTERVAL};
pub use history::EditHistory;

use std::sync::Arc;
use uuid::Uuid;

use crate::content::{Content, Delta, TextStats};
use crate::error::{EditorError, StorageError};
use crate::event::{EventBus, SessionEvent};
use crate::mode::EditorMode;
use crate::search::{self, Match, SearchOptions};
use crate::shortcuts::{EditorAction, Shortcut, ShortcutMap};
use crate::storage::ContentStore;
use crate::template::Template;
use crate::theme::ThemeContext;

/// What a save request actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Content was persisted and the session is clean again.
    Saved,
    /// Nothing to save; the storage collaborator was not called.
    Clean,
    /// A save was already in flight; the redundant request was dropped.
    Suppressed,
}

/// One open editor instance: mode, content, dirty tracking, and the autosave
/// driver. Created when the host instantiates the widget, closed when the
/// host unmounts it.
///
/// Everything runs on the host's UI event loop. The host delivers user input
/// (`apply_edit`, `set_mode`, shortcut events) synchronously and calls `tick`
/// from its periodic timer; the session never spawns threads of its own.
pub struct EditorSession {
    id: Uuid,
    mode: EditorMode,
    content: Content,
    dirty: bool,
    last_saved_at: Option<u64>,
    store: Box<dyn ContentStore>,
    autosave: AutosaveTimer,
    history: EditHistory,
    events: EventBus,
    theme: Arc<ThemeContext>,
    /// Re-entrancy guard: a save in flight suppresses redundant requests.
    saving: bool,
    closed: bool,
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("dirty", &self.dirty)
            .field("last_saved_at", &self.last_saved_at)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl EditorSession {
    pub fn new(content: Content, store: Box<dyn ContentStore>, theme: Arc<ThemeContext>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode: EditorMode::default(),
            content,
            dirty: false,
            last_saved_at: None,
            store,
            autosave: AutosaveTimer::default(),
            history: EditHistory::new(),
            events: EventBus::new(),
            theme,
            saving: false,
            closed: false,
        }
    }

    /// Override the autosave interval (seconds). Mostly for tests and hosts
    /// with their own cadence.
    pub fn with_autosave_interval(mut self, interval: u64) -> Self {
        self.autosave = AutosaveTimer::new(interval);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn last_saved_at(&self) -> Option<u64> {
        self.last_saved_at
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn theme(&self) -> &Arc<ThemeContext> {
        &self.theme
    }

    /// The session's event bus, for hosts to subscribe UI handlers.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Word / character / line counts, for text sessions.
    pub fn text_stats(&self) -> Option<TextStats> {
        self.content.text_stats()
    }

    /// Switches the presentational mode. Every transition is legal; modes are
    /// views over the same content.
    ///
    /// Leaving a writable mode with unsaved changes attempts an implicit save
    /// first. If that save fails the transition still happens, the session
    /// stays dirty, and the error is returned so the host can show a status
    /// indicator.
    pub fn set_mode(&mut self, new_mode: EditorMode, now: u64) -> Result<(), StorageError> {
        if new_mode == self.mode {
            return Ok(());
        }

        let mut implicit_save = Ok(());
        if self.mode.is_writable() && self.dirty {
            if let Err(err) = self.save(now) {
                log::warn!("implicit save on mode change failed: {err}");
                implicit_save = Err(err);
            }
        }

        let old = self.mode;
        self.mode = new_mode;
        self.events.emit(SessionEvent::ModeChanged { old, new: new_mode });
        implicit_save
    }

    /// Merges `delta` into the content and marks the session dirty.
    ///
    /// Rejected with `InvalidMode` in Preview, leaving the content untouched.
    pub fn apply_edit(&mut self, delta: Delta) -> Result<(), EditorError> {
        if !self.mode.is_writable() {
            return Err(EditorError::InvalidMode { mode: self.mode });
        }
        let inverse = delta.apply(&mut self.content)?;
        self.history.record(inverse);
        self.dirty = true;
        self.events.emit(SessionEvent::ContentChanged);
        Ok(())
    }

    /// Reverts the most recent edit. Undo mutates content, so it is blocked
    /// in Preview like any other edit. Returns false if there was nothing to
    /// undo.
    pub fn undo(&mut self) -> Result<bool, EditorError> {
        if !self.mode.is_writable() {
            return Err(EditorError::InvalidMode { mode: self.mode });
        }
        let Some(inverse) = self.history.pop_undo() else {
            return Ok(false);
        };
        // Inverses are valid by construction against the content they undo.
        let redo = inverse.apply(&mut self.content)?;
        self.history.record_redo(redo);
        self.dirty = true;
        self.events.emit(SessionEvent::ContentChanged);
        Ok(true)
    }

    /// Re-applies the most recently undone edit.
    pub fn redo(&mut self) -> Result<bool, EditorError> {
        if !self.mode.is_writable() {
            return Err(EditorError::InvalidMode { mode: self.mode });
        }
        let Some(delta) = self.history.pop_redo() else {
            return Ok(false);
        };
        let undo = delta.apply(&mut self.content)?;
        self.history.record_undo(undo);
        self.dirty = true;
        self.events.emit(SessionEvent::ContentChanged);
        Ok(true)
    }

    /// Autosave driver, called by the host's periodic timer.
    ///
    /// The interval gate admits at most one save per interval; a clean
    /// session makes no storage call at all. After `close` this is a no-op.
    pub fn tick(&mut self, now: u64) -> Result<SaveOutcome, StorageError> {
        if self.closed || !self.autosave.fire(now) {
            return Ok(SaveOutcome::Clean);
        }
        if !self.dirty {
            return Ok(SaveOutcome::Clean);
        }
        self.save(now)
    }

    /// Persists the content through the storage collaborator.
    ///
    /// On success the session becomes clean and `last_saved_at` is set. On
    /// failure the dirty flag is untouched and the error is returned; the
    /// next tick retries. Re-entrant requests while a save is in flight are
    /// suppressed rather than queued; there is only one writer.
    pub fn save(&mut self, now: u64) -> Result<SaveOutcome, StorageError> {
        if self.saving {
            return Ok(SaveOutcome::Suppressed);
        }
        if !self.dirty {
            return Ok(SaveOutcome::Clean);
        }

        self.saving = true;
        let result = self.store.persist(&self.content);
        self.saving = false;

        match result {
            Ok(()) => {
                self.dirty = false;
                self.last_saved_at = Some(now);
                log::debug!("session {} saved at {now}", self.id);
                self.events.emit(SessionEvent::Saved { at: now });
                Ok(SaveOutcome::Saved)
            }
            Err(err) => {
                log::warn!("session {} save failed: {err}", self.id);
                self.events.emit(SessionEvent::SaveFailed);
                Err(err)
            }
        }
    }

    /// Replaces the document body with a template. Text sessions only.
    pub fn apply_template(&mut self, template: &Template) -> Result<(), EditorError> {
        if self.content.as_text().is_none() {
            return Err(EditorError::NotText(self.content.kind()));
        }
        self.apply_edit(Delta::set_text(template.content.clone()))?;
        self.events.emit(SessionEvent::TemplateApplied {
            name: template.name.clone(),
        });
        Ok(())
    }

    /// All matches of `needle` in the document body. Read-only, legal in any
    /// mode.
    pub fn find(&self, needle: &str, options: SearchOptions) -> Result<Vec<Match>, EditorError> {
        let body = self
            .content
            .as_text()
            .ok_or(EditorError::NotText(self.content.kind()))?;
        Ok(search::find_all(body, needle, options))
    }

    /// Replaces every match of `needle` with `replacement`, returning how
    /// many matches were replaced. Routed through the normal edit path, so it
    /// respects mode gating and dirty tracking.
    pub fn replace_all(
        &mut self,
        needle: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<usize, EditorError> {
        let body = self
            .content
            .as_text()
            .ok_or(EditorError::NotText(self.content.kind()))?;
        let (replaced, count) = search::replace_all(body, needle, replacement, options);
        if count > 0 {
            self.apply_edit(Delta::set_text(replaced))?;
        }
        Ok(count)
    }

    /// Replaces only the first match of `needle`, returning whether one was
    /// found. Like `replace_all`, the rewrite goes through the normal edit
    /// path and so is rejected in Preview.
    pub fn replace_next(
        &mut self,
        needle: &str,
        replacement: &str,
        options: SearchOptions,
    ) -> Result<bool, EditorError> {
        let body = self
            .content
            .as_text()
            .ok_or(EditorError::NotText(self.content.kind()))?;
        let (replaced, found) = search::replace_first(body, needle, replacement, options);
        if found {
            self.apply_edit(Delta::set_text(replaced))?;
        }
        Ok(found)
    }

    /// Looks up a keyboard shortcut and performs the session-level actions
    /// (save, undo, redo) directly. The matched action is returned either way
    /// so the host can handle presentation-level actions such as text styling
    /// or opening the find bar.
    ///
    /// Failures here are deliberately non-blocking: a failed save is logged
    /// and broadcast as `SaveFailed`, an undo attempted in Preview is simply
    /// dropped.
    pub fn dispatch(
        &mut self,
        map: &ShortcutMap,
        shortcut: Shortcut,
        now: u64,
    ) -> Option<EditorAction> {
        let action = map.lookup(shortcut)?;
        match action {
            EditorAction::Save => {
                if let Err(err) = self.save(now) {
                    log::warn!("shortcut save failed: {err}");
                }
            }
            EditorAction::Undo => {
                if let Err(err) = self.undo() {
                    log::debug!("undo shortcut ignored: {err}");
                }
            }
            EditorAction::Redo => {
                if let Err(err) = self.redo() {
                    log::debug!("redo shortcut ignored: {err}");
                }
            }
            // Presentation-level actions are the host's to interpret.
            EditorAction::ToggleFindReplace | EditorAction::ToggleStyle(_) => {}
        }
        Some(action)
    }

    /// Closes the session: cancels the autosave timer so no pending callback
    /// fires against a destroyed widget. Idempotent.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.autosave.cancel();
        self.closed = true;
        self.events.emit(SessionEvent::Closed);
    }
}
