use crate::model::NodeKind;

/// UI label set for one language. The `language` settings key picks the
/// set at startup; changing it swaps labels in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub language: &'static str,
    pub app_title: &'static str,
    pub dashboard: &'static str,
    pub settings: &'static str,
    pub no_projects: &'static str,
    pub no_phases: &'static str,
    pub editor_hint: &'static str,
    pub comments: &'static str,
    pub no_comments: &'static str,
    pub guest_author: &'static str,
    pub saved: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub all_data_deleted: &'static str,
    pub confirm_reset_title: &'static str,
    pub confirm_reset_message: &'static str,
    pub confirm_delete_project_title: &'static str,
    pub confirm_delete_node_title: &'static str,
    pub new_project_title: &'static str,
    pub name_field: &'static str,
    pub theme_label: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub language_label: &'static str,
    pub delete_all_label: &'static str,
    pub progress: &'static str,
    pub hint_dashboard: &'static str,
    pub hint_project: &'static str,
    pub hint_settings: &'static str,
    pub hint_edit: &'static str,
    pub prompt_keys: &'static str,
    pub confirm_keys: &'static str,
    pub info_keys: &'static str,
}

impl Labels {
    pub fn german() -> Self {
        Labels {
            language: "de",
            app_title: "planbaum",
            dashboard: "Projekte",
            settings: "Einstellungen",
            no_projects: "Noch keine Projekte erstellt.",
            no_phases: "Diesem Projekt wurden noch keine Phasen hinzugefügt.",
            editor_hint: "Wählen Sie links ein Element aus, um es zu bearbeiten.",
            comments: "Kommentare",
            no_comments: "Noch keine Kommentare.",
            guest_author: "Gast",
            saved: "gespeichert",
            success: "Erfolg",
            error: "Fehler",
            all_data_deleted: "Alle Ihre Daten wurden gelöscht.",
            confirm_reset_title: "Alle Daten löschen?",
            confirm_reset_message:
                "Möchten Sie wirklich alle lokal gespeicherten Projekte löschen?",
            confirm_delete_project_title: "Projekt löschen?",
            confirm_delete_node_title: "Element löschen?",
            new_project_title: "Neues Projekt erstellen",
            name_field: "Name",
            theme_label: "Design",
            theme_light: "Light Mode",
            theme_dark: "Dark Mode",
            language_label: "Sprache",
            delete_all_label: "Alle Daten löschen",
            progress: "Fortschritt",
            hint_dashboard: "↵ öffnen · n neu · x löschen · s Einstellungen · q beenden",
            hint_project:
                "↵ auswählen · e bearbeiten · ␣ erledigt · p/a anlegen · c Kommentar · x löschen · Esc zurück",
            hint_settings: "↵ ändern · Esc zurück",
            hint_edit: "↵ speichern · Esc verwerfen",
            prompt_keys: "↵ OK · Esc Abbrechen",
            confirm_keys: "y Bestätigen · n Abbrechen",
            info_keys: "↵ OK",
        }
    }

    pub fn english() -> Self {
        Labels {
            language: "en",
            app_title: "planbaum",
            dashboard: "Projects",
            settings: "Settings",
            no_projects: "No projects yet.",
            no_phases: "No phases have been added to this project yet.",
            editor_hint: "Select an item on the left to edit it.",
            comments: "Comments",
            no_comments: "No comments yet.",
            guest_author: "Guest",
            saved: "saved",
            success: "Success",
            error: "Error",
            all_data_deleted: "All your data has been deleted.",
            confirm_reset_title: "Delete all data?",
            confirm_reset_message: "Do you really want to delete all locally stored projects?",
            confirm_delete_project_title: "Delete project?",
            confirm_delete_node_title: "Delete item?",
            new_project_title: "Create new project",
            name_field: "Name",
            theme_label: "Theme",
            theme_light: "Light mode",
            theme_dark: "Dark mode",
            language_label: "Language",
            delete_all_label: "Delete all data",
            progress: "Progress",
            hint_dashboard: "↵ open · n new · x delete · s settings · q quit",
            hint_project:
                "↵ select · e edit · ␣ done · p/a add · c comment · x delete · Esc back",
            hint_settings: "↵ change · Esc back",
            hint_edit: "↵ save · Esc discard",
            prompt_keys: "↵ OK · Esc cancel",
            confirm_keys: "y confirm · n cancel",
            info_keys: "↵ OK",
        }
    }

    /// Pick the label set for a locale identifier. Unknown locales fall
    /// back to German, the app's original language.
    pub fn for_language(language: &str) -> Self {
        match language {
            "en" | "en-US" | "en-GB" => Labels::english(),
            _ => Labels::german(),
        }
    }

    /// Editor field label: `"Phase-Name"`, `"Aufgabe-Name"`, `"Subaufgabe-Name"`
    pub fn name_label(&self, kind: NodeKind) -> String {
        format!("{}-{}", kind.label(), self.name_field)
    }

    /// Prompt title for creating a node of the given kind
    pub fn create_title(&self, kind: NodeKind) -> String {
        if self.language == "en" {
            format!("New {}", kind.label())
        } else {
            format!("{} anlegen", kind.label())
        }
    }
}
