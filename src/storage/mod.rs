mod file;

pub use file::{ContentSnapshot, FileStore};

use crate::content::Content;
use crate::error::StorageError;

/// The storage collaborator injected into each session.
///
/// The session does not care where content goes (a file, browser storage, a
/// remote call), only that `persist` either durably stores the payload or
/// reports failure. Failures are recoverable: the session stays dirty and
/// retries on the next autosave tick.
pub trait ContentStore {
    fn persist(&mut self, content: &Content) -> Result<(), StorageError>;

    /// Returns the most recently persisted content, if any.
    fn load(&self) -> Result<Option<Content>, StorageError>;
}

/// Lets a host keep a handle on the store it injects into a session.
/// Single-threaded, like everything else on the controller's event loop.
impl<S: ContentStore> ContentStore for std::rc::Rc<std::cell::RefCell<S>> {
    fn persist(&mut self, content: &Content) -> Result<(), StorageError> {
        self.borrow_mut().persist(content)
    }

    fn load(&self) -> Result<Option<Content>, StorageError> {
        self.borrow().load()
    }
}

/// In-process store used by tests and by hosts that bring their own durable
/// layer. Can be armed to fail to exercise save-failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Content>,
    persist_calls: usize,
    fail_next: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `persist` fail until `succeed` is called.
    pub fn fail(&mut self) {
        self.fail_next = true;
    }

    pub fn succeed(&mut self) {
        self.fail_next = false;
    }

    /// Number of times `persist` has been invoked, including failed attempts.
    pub fn persist_calls(&self) -> usize {
        self.persist_calls
    }
}

impl ContentStore for MemoryStore {
    fn persist(&mut self, content: &Content) -> Result<(), StorageError> {
        self.persist_calls += 1;
        if self.fail_next {
            return Err(StorageError::Rejected("memory store armed to fail".into()));
        }
        self.saved = Some(content.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Content>, StorageError> {
        Ok(self.saved.clone())
    }
}
