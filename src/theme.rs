use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A named color palette applied across every editor surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary_bg: String,
    pub secondary_bg: String,
    pub tertiary_bg: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_muted: String,
    pub border_color: String,
    pub accent_color: String,
    pub accent_hover: String,
    pub success_color: String,
    pub warning_color: String,
    pub danger_color: String,
    pub info_color: String,
}

impl Theme {
    /// Renders the palette as a CSS custom-property block for hosts that
    /// style HTML views.
    pub fn css_variables(&self) -> String {
        let vars: [(&str, &str); 13] = [
            ("--primary-bg", &self.primary_bg),
            ("--secondary-bg", &self.secondary_bg),
            ("--tertiary-bg", &self.tertiary_bg),
            ("--text-primary", &self.text_primary),
            ("--text-secondary", &self.text_secondary),
            ("--text-muted", &self.text_muted),
            ("--border-color", &self.border_color),
            ("--accent-color", &self.accent_color),
            ("--accent-hover", &self.accent_hover),
            ("--success-color", &self.success_color),
            ("--warning-color", &self.warning_color),
            ("--danger-color", &self.danger_color),
            ("--info-color", &self.info_color),
        ];
        let mut out = String::from(":root {\n");
        for (name, value) in vars {
            out.push_str(&format!("  {name}: {value};\n"));
        }
        out.push('}');
        out
    }
}

fn builtin_themes() -> BTreeMap<String, Theme> {
    let mut themes = BTreeMap::new();
    themes.insert(
        "light".to_string(),
        Theme {
            name: "Light".into(),
            primary_bg: "#ffffff".into(),
            secondary_bg: "#f8f9fa".into(),
            tertiary_bg: "#e9ecef".into(),
            text_primary: "#212529".into(),
            text_secondary: "#6c757d".into(),
            text_muted: "#adb5bd".into(),
            border_color: "#dee2e6".into(),
            accent_color: "#0066cc".into(),
            accent_hover: "#0052a3".into(),
            success_color: "#28a745".into(),
            warning_color: "#ffc107".into(),
            danger_color: "#dc3545".into(),
            info_color: "#17a2b8".into(),
        },
    );
    themes.insert(
        "dark".to_string(),
        Theme {
            name: "Dark".into(),
            primary_bg: "#1a1a1a".into(),
            secondary_bg: "#2d2d2d".into(),
            tertiary_bg: "#3a3a3a".into(),
            text_primary: "#ffffff".into(),
            text_secondary: "#b0b0b0".into(),
            text_muted: "#808080".into(),
            border_color: "#444444".into(),
            accent_color: "#4da6ff".into(),
            accent_hover: "#3399ff".into(),
            success_color: "#4caf50".into(),
            warning_color: "#ff9800".into(),
            danger_color: "#f44336".into(),
            info_color: "#2196f3".into(),
        },
    );
    themes.insert(
        "blue".to_string(),
        Theme {
            name: "Blue Professional".into(),
            primary_bg: "#f0f4f8".into(),
            secondary_bg: "#e2e8f0".into(),
            tertiary_bg: "#cbd5e0".into(),
            text_primary: "#1a202c".into(),
            text_secondary: "#4a5568".into(),
            text_muted: "#718096".into(),
            border_color: "#e2e8f0".into(),
            accent_color: "#3182ce".into(),
            accent_hover: "#2c5aa0".into(),
            success_color: "#38a169".into(),
            warning_color: "#d69e2e".into(),
            danger_color: "#e53e3e".into(),
            info_color: "#3182ce".into(),
        },
    );
    themes.insert(
        "green".to_string(),
        Theme {
            name: "Green Nature".into(),
            primary_bg: "#f0fff4".into(),
            secondary_bg: "#e6fffa".into(),
            tertiary_bg: "#c6f6d5".into(),
            text_primary: "#1a202c".into(),
            text_secondary: "#2d3748".into(),
            text_muted: "#718096".into(),
            border_color: "#c6f6d5".into(),
            accent_color: "#38a169".into(),
            accent_hover: "#2f855a".into(),
            success_color: "#38a169".into(),
            warning_color: "#d69e2e".into(),
            danger_color: "#e53e3e".into(),
            info_color: "#3182ce".into(),
        },
    );
    themes.insert(
        "purple".to_string(),
        Theme {
            name: "Purple Modern".into(),
            primary_bg: "#faf5ff".into(),
            secondary_bg: "#e9d8fd".into(),
            tertiary_bg: "#d6bcfa".into(),
            text_primary: "#1a202c".into(),
            text_secondary: "#4a5568".into(),
            text_muted: "#718096".into(),
            border_color: "#e9d8fd".into(),
            accent_color: "#805ad5".into(),
            accent_hover: "#6b46c1".into(),
            success_color: "#38a169".into(),
            warning_color: "#d69e2e".into(),
            danger_color: "#e53e3e".into(),
            info_color: "#805ad5".into(),
        },
    );
    themes
}

/// Shared theme state handed to each session at construction.
///
/// An explicit context object rather than process-wide state: every session
/// holds an `Arc<ThemeContext>`, so a theme switch is visible to all editors
/// that share the context while sessions stay independently constructible in
/// tests.
#[derive(Debug)]
pub struct ThemeContext {
    themes: BTreeMap<String, Theme>,
    active: RwLock<String>,
}

impl ThemeContext {
    /// A context with the five built-in palettes, starting on "light".
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            themes: builtin_themes(),
            active: RwLock::new("light".to_string()),
        })
    }

    pub fn theme_names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Look up a theme by name, falling back to "light" for unknown names.
    pub fn theme(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .unwrap_or_else(|| &self.themes["light"])
    }

    pub fn active_name(&self) -> String {
        self.active.read().clone()
    }

    pub fn active_theme(&self) -> Theme {
        self.theme(&self.active_name()).clone()
    }

    /// Switch the active theme. Unknown names are ignored and reported false.
    pub fn set_active(&self, name: &str) -> bool {
        if self.themes.contains_key(name) {
            *self.active.write() = name.to_string();
            true
        } else {
            log::warn!("ignoring unknown theme {name:?}");
            false
        }
    }
}
