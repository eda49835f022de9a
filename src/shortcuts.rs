use std::collections::HashMap;

/// A normalized keyboard chord as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Lowercase key character.
    pub key: char,
    pub ctrl: bool,
    pub shift: bool,
}

impl Shortcut {
    pub fn ctrl(key: char) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            ctrl: true,
            shift: false,
        }
    }

    pub fn ctrl_shift(key: char) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            ctrl: true,
            shift: true,
        }
    }
}

/// Inline text styling toggles. Interpreted by the host's rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
}

/// Actions a shortcut can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Save,
    ToggleFindReplace,
    Undo,
    Redo,
    ToggleStyle(TextStyle),
}

/// A declarative mapping from shortcut to action, looked up once per key
/// event. Hosts can rebind or extend the defaults.
#[derive(Debug, Clone)]
pub struct ShortcutMap {
    bindings: HashMap<Shortcut, EditorAction>,
}

impl ShortcutMap {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// The stock bindings shared by all editors: Ctrl+S save, Ctrl+F find,
    /// Ctrl+Z / Ctrl+Shift+Z undo/redo, Ctrl+B/I/U styling.
    pub fn defaults() -> Self {
        let mut map = Self::empty();
        map.bind(Shortcut::ctrl('s'), EditorAction::Save);
        map.bind(Shortcut::ctrl('f'), EditorAction::ToggleFindReplace);
        map.bind(Shortcut::ctrl('z'), EditorAction::Undo);
        map.bind(Shortcut::ctrl_shift('z'), EditorAction::Redo);
        map.bind(Shortcut::ctrl('b'), EditorAction::ToggleStyle(TextStyle::Bold));
        map.bind(Shortcut::ctrl('i'), EditorAction::ToggleStyle(TextStyle::Italic));
        map.bind(Shortcut::ctrl('u'), EditorAction::ToggleStyle(TextStyle::Underline));
        map
    }

    /// Binds (or rebinds) a shortcut.
    pub fn bind(&mut self, shortcut: Shortcut, action: EditorAction) {
        self.bindings.insert(shortcut, action);
    }

    pub fn unbind(&mut self, shortcut: Shortcut) {
        self.bindings.remove(&shortcut);
    }

    pub fn lookup(&self, shortcut: Shortcut) -> Option<EditorAction> {
        self.bindings.get(&shortcut).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_stock_chords() {
        let map = ShortcutMap::defaults();
        assert_eq!(map.lookup(Shortcut::ctrl('s')), Some(EditorAction::Save));
        assert_eq!(map.lookup(Shortcut::ctrl_shift('z')), Some(EditorAction::Redo));
        assert_eq!(
            map.lookup(Shortcut::ctrl('b')),
            Some(EditorAction::ToggleStyle(TextStyle::Bold))
        );
        assert_eq!(map.lookup(Shortcut::ctrl('q')), None);
    }

    #[test]
    fn plain_and_shifted_chords_are_distinct() {
        let map = ShortcutMap::defaults();
        assert_ne!(
            map.lookup(Shortcut::ctrl('z')),
            map.lookup(Shortcut::ctrl_shift('z'))
        );
    }

    #[test]
    fn rebinding_replaces_the_action() {
        let mut map = ShortcutMap::defaults();
        map.bind(Shortcut::ctrl('s'), EditorAction::ToggleFindReplace);
        assert_eq!(
            map.lookup(Shortcut::ctrl('s')),
            Some(EditorAction::ToggleFindReplace)
        );
    }
}
