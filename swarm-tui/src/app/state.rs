use ratatui::widgets::ListState;
use std::time::Instant;
use swarm_types::{ColorScheme, NewGroup, ProfileGroup};
use tui_textarea::TextArea;

use crate::config::ConfigManager;
use crate::query::{GroupQuery, ProfileQuery};
use crate::store::GroupStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Navigation, // Browsing content, shortcuts active
    Typing,     // In text input, shortcuts disabled
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Groups,
    Profiles,
}

/// Group list pane state
#[derive(Debug, Default)]
pub struct GroupsPaneState {
    pub list_state: ListState,
    pub query: GroupQuery,
    pub search_mode: bool,
}

/// Member list pane state for the selected group
#[derive(Debug, Default)]
pub struct ProfilesPaneState {
    pub list_state: ListState,
    pub query: ProfileQuery,
    pub search_mode: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DialogField {
    Name,
    Description,
    Profiles,
}

impl DialogField {
    pub fn next(&self) -> Self {
        match self {
            DialogField::Name => DialogField::Description,
            DialogField::Description => DialogField::Profiles,
            DialogField::Profiles => DialogField::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            DialogField::Name => DialogField::Profiles,
            DialogField::Description => DialogField::Name,
            DialogField::Profiles => DialogField::Description,
        }
    }
}

/// Create/edit group dialog
pub struct GroupDialogState {
    /// Group being edited; `None` when creating
    pub editing: Option<ProfileGroup>,
    pub name: TextArea<'static>,
    pub description: TextArea<'static>,
    /// Member ids in the order they were picked
    pub selected_profiles: Vec<String>,
    pub profile_cursor: usize,
    pub focused_field: DialogField,
}

impl GroupDialogState {
    pub fn create() -> Self {
        Self::with_fields(None, String::new(), String::new(), Vec::new())
    }

    pub fn edit(group: &ProfileGroup) -> Self {
        Self::with_fields(
            Some(group.clone()),
            group.name.clone(),
            group.description.clone(),
            group.profiles.clone(),
        )
    }

    fn with_fields(
        editing: Option<ProfileGroup>,
        name: String,
        description: String,
        selected_profiles: Vec<String>,
    ) -> Self {
        let mut name_area = TextArea::new(vec![name]);
        name_area.set_placeholder_text("Enter group name");
        name_area.move_cursor(tui_textarea::CursorMove::End);

        // Split on '\n' only so trailing newlines and '\r' survive a round trip
        let description_lines: Vec<String> = description.split('\n').map(String::from).collect();
        let mut description_area = TextArea::new(description_lines);
        description_area.set_placeholder_text("Enter group description");
        description_area.set_hard_tab_indent(true);

        Self {
            editing,
            name: name_area,
            description: description_area,
            selected_profiles,
            profile_cursor: 0,
            focused_field: DialogField::Name,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Group"
        } else {
            "Create New Group"
        }
    }

    pub fn save_label(&self) -> &'static str {
        if self.is_editing() {
            "Save Changes"
        } else {
            "Create Group"
        }
    }

    /// Name as typed; only the emptiness check ignores surrounding whitespace
    pub fn name(&self) -> String {
        self.name.lines().join(" ")
    }

    pub fn description(&self) -> String {
        self.description.lines().join("\n")
    }

    /// Saving is disabled until the name has non-whitespace content
    pub fn can_save(&self) -> bool {
        !self.name().trim().is_empty()
    }

    pub fn is_selected(&self, profile_id: &str) -> bool {
        self.selected_profiles.iter().any(|id| id == profile_id)
    }

    pub fn toggle_profile(&mut self, profile_id: &str) {
        if self.is_selected(profile_id) {
            self.selected_profiles.retain(|id| id != profile_id);
        } else {
            self.selected_profiles.push(profile_id.to_string());
        }
    }

    pub fn to_new_group(&self) -> NewGroup {
        NewGroup {
            name: self.name(),
            description: self.description(),
            profiles: self.selected_profiles.clone(),
        }
    }
}

/// What a confirmation dialog does when accepted
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    DeleteGroup { group_id: String },
}

/// Generic yes/no prompt
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialog {
    pub title: String,
    pub description: String,
    pub action: ConfirmAction,
}

impl ConfirmDialog {
    pub fn delete_group(group: &ProfileGroup) -> Self {
        Self {
            title: "Delete Group".to_string(),
            description: format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                group.name
            ),
            action: ConfirmAction::DeleteGroup {
                group_id: group.id.clone(),
            },
        }
    }
}

/// Transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub created_at: Instant,
}

/// Main application state
pub struct App {
    pub running: bool,
    pub store: GroupStore,
    pub color_scheme: ColorScheme,
    /// Absent in tests; theme changes are then kept in memory only
    pub config_manager: Option<ConfigManager>,
    pub log_config: crate::logging::LogConfig,
    pub show_help: bool,
    pub input_mode: InputMode,
    pub focus: Focus,
    pub groups_pane: GroupsPaneState,
    pub profiles_pane: ProfilesPaneState,
    pub group_dialog: Option<GroupDialogState>,
    pub confirm_dialog: Option<ConfirmDialog>,
    pub status: Option<StatusMessage>,
}
