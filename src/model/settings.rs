use serde::{Deserialize, Serialize};

/// Persisted theme preference. Absent key ⇒ light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePref {
    #[default]
    Light,
    Dark,
}

impl ThemePref {
    pub fn toggled(self) -> Self {
        match self {
            ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::Light,
        }
    }
}

/// User settings from settings.toml in the data directory.
///
/// Key-value contract: `theme = "dark"` switches the palette on startup,
/// `language` picks the label set. Everything is optional; defaults apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemePref,
    #[serde(default = "default_language")]
    pub language: String,
    /// Maximum number of projects in the local store. None = unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: ThemePref::Light,
            language: default_language(),
            project_limit: None,
        }
    }
}

fn default_language() -> String {
    "de".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_on_empty_document() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.theme, ThemePref::Light);
        assert_eq!(settings.language, "de");
        assert_eq!(settings.project_limit, None);
    }

    #[test]
    fn parses_full_document() {
        let settings: Settings = toml::from_str(
            r#"
theme = "dark"
language = "en"
project_limit = 1
"#,
        )
        .unwrap();
        assert_eq!(settings.theme, ThemePref::Dark);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.project_limit, Some(1));
    }

    #[test]
    fn serializes_without_empty_limit() {
        let text = toml::to_string(&Settings::default()).unwrap();
        assert!(text.contains("theme = \"light\""));
        assert!(!text.contains("project_limit"));
    }

    #[test]
    fn toggle_theme() {
        assert_eq!(ThemePref::Light.toggled(), ThemePref::Dark);
        assert_eq!(ThemePref::Dark.toggled(), ThemePref::Light);
    }
}
