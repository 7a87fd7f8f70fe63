use anyhow::Result;
use crossterm::event::KeyEvent;
use std::time::{Duration, Instant};
use swarm_types::{ProfileGroup, SocialProfile};

use crate::config::{ConfigManager, Preferences};
use crate::query::GroupView;
use crate::store::GroupStore;
use crate::{log_debug, log_modal_state, log_store};

pub mod state;
pub use state::*;
pub mod handlers;

const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

impl App {
    pub fn new(store: GroupStore) -> Self {
        let mut app = Self {
            running: true,
            store,
            color_scheme: swarm_types::ColorScheme::default(),
            config_manager: None,
            log_config: crate::logging::LogConfig::default(),
            show_help: false,
            input_mode: InputMode::Navigation,
            focus: Focus::Groups,
            groups_pane: GroupsPaneState::default(),
            profiles_pane: ProfilesPaneState::default(),
            group_dialog: None,
            confirm_dialog: None,
            status: None,
        };
        app.clamp_selection();
        app
    }

    /// Attach a config manager and apply the preferences it holds
    pub fn with_config_manager(mut self, manager: ConfigManager) -> Self {
        match manager.load_preferences() {
            Ok(prefs) => self.color_scheme = prefs.color_scheme,
            Err(e) => log::warn!("Ignoring unreadable preferences: {:#}", e),
        }
        self.config_manager = Some(manager);
        self
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key_event(self, key)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        log_modal_state!(self.log_config, "help overlay open={}", self.show_help);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Groups => Focus::Profiles,
            Focus::Profiles => Focus::Groups,
        };
        self.clamp_selection();
    }

    pub fn cycle_color_scheme(&mut self) {
        self.color_scheme = self.color_scheme.next();
        self.set_status(format!("Theme: {}", self.color_scheme.as_str()));

        if let Some(manager) = &self.config_manager {
            let prefs = Preferences {
                color_scheme: self.color_scheme,
            };
            if let Err(e) = manager.save_preferences(&prefs) {
                log::error!("Failed to save preferences: {:#}", e);
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            created_at: Instant::now(),
        });
    }

    /// Drop the status message once it has been visible long enough
    pub fn clear_expired_messages(&mut self) {
        if let Some(status) = &self.status {
            if status.created_at.elapsed() >= STATUS_TIMEOUT {
                self.status = None;
            }
        }
    }

    // ---- Queries ----

    /// Groups after applying the current search and sort
    pub fn visible_groups(&self) -> Vec<GroupView<'_>> {
        self.groups_pane.query.apply(&self.store)
    }

    pub fn selected_group(&self) -> Option<&ProfileGroup> {
        let index = self.groups_pane.list_state.selected()?;
        self.visible_groups().get(index).map(|view| view.group)
    }

    /// Members of the selected group after applying the profile search and sort
    pub fn visible_members(&self) -> Vec<&SocialProfile> {
        match self.selected_group() {
            Some(group) => {
                let members = self.store.resolve_members(group);
                self.profiles_pane.query.apply(&members)
            }
            None => Vec::new(),
        }
    }

    pub fn selected_member(&self) -> Option<&SocialProfile> {
        let index = self.profiles_pane.list_state.selected()?;
        self.visible_members().get(index).copied()
    }

    // ---- Selection ----

    /// Keep both list selections inside their visible ranges
    pub fn clamp_selection(&mut self) {
        let group_count = self.visible_groups().len();
        clamp_list(&mut self.groups_pane.list_state, group_count);

        let member_count = self.visible_members().len();
        clamp_list(&mut self.profiles_pane.list_state, member_count);
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Focus::Groups => {
                let len = self.visible_groups().len();
                step_list(&mut self.groups_pane.list_state, len, 1);
                self.profiles_pane.list_state.select(None);
            }
            Focus::Profiles => {
                let len = self.visible_members().len();
                step_list(&mut self.profiles_pane.list_state, len, 1);
            }
        }
        self.clamp_selection();
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            Focus::Groups => {
                let len = self.visible_groups().len();
                step_list(&mut self.groups_pane.list_state, len, -1);
                self.profiles_pane.list_state.select(None);
            }
            Focus::Profiles => {
                let len = self.visible_members().len();
                step_list(&mut self.profiles_pane.list_state, len, -1);
            }
        }
        self.clamp_selection();
    }

    /// Move the group cursor onto the given group if it is visible
    pub fn select_group_by_id(&mut self, group_id: &str) {
        let index = self
            .visible_groups()
            .iter()
            .position(|view| view.group.id == group_id);
        match index {
            Some(_) => {
                self.groups_pane.list_state.select(index);
                self.profiles_pane.list_state.select(None);
                log_debug!(self.log_config, "selected group {} at {:?}", group_id, index);
            }
            None => log_debug!(self.log_config, "group {} is not visible, keeping selection", group_id),
        }
        self.clamp_selection();
    }

    // ---- Search and sort ----

    pub fn enter_search_mode(&mut self) {
        match self.focus {
            Focus::Groups => self.groups_pane.search_mode = true,
            Focus::Profiles => self.profiles_pane.search_mode = true,
        }
        self.input_mode = InputMode::Typing;
    }

    /// Leave search mode, optionally discarding the query
    pub fn exit_search_mode(&mut self, clear: bool) {
        if self.groups_pane.search_mode {
            self.groups_pane.search_mode = false;
            if clear {
                self.groups_pane.query.search.clear();
            }
        }
        if self.profiles_pane.search_mode {
            self.profiles_pane.search_mode = false;
            if clear {
                self.profiles_pane.query.search.clear();
            }
        }
        self.input_mode = InputMode::Navigation;
        self.clamp_selection();
    }

    pub fn is_searching(&self) -> bool {
        self.groups_pane.search_mode || self.profiles_pane.search_mode
    }

    pub fn push_search_char(&mut self, c: char) {
        if self.groups_pane.search_mode {
            self.groups_pane.query.search.push(c);
        } else if self.profiles_pane.search_mode {
            self.profiles_pane.query.search.push(c);
        }
        self.clamp_selection();
    }

    pub fn pop_search_char(&mut self) {
        if self.groups_pane.search_mode {
            self.groups_pane.query.search.pop();
        } else if self.profiles_pane.search_mode {
            self.profiles_pane.query.search.pop();
        }
        self.clamp_selection();
    }

    pub fn cycle_sort_key(&mut self) {
        let selected = self.selected_group().map(|g| g.id.clone());
        match self.focus {
            Focus::Groups => {
                let query = &mut self.groups_pane.query;
                query.sort_key = query.sort_key.next();
            }
            Focus::Profiles => {
                let query = &mut self.profiles_pane.query;
                query.sort_key = query.sort_key.next();
            }
        }
        self.reselect_after_reorder(selected);
    }

    pub fn toggle_sort_direction(&mut self) {
        let selected = self.selected_group().map(|g| g.id.clone());
        match self.focus {
            Focus::Groups => {
                let query = &mut self.groups_pane.query;
                query.direction = query.direction.toggle();
            }
            Focus::Profiles => {
                let query = &mut self.profiles_pane.query;
                query.direction = query.direction.toggle();
            }
        }
        self.reselect_after_reorder(selected);
    }

    fn reselect_after_reorder(&mut self, selected_group: Option<String>) {
        match selected_group {
            Some(id) if self.focus == Focus::Groups => self.select_group_by_id(&id),
            _ => self.clamp_selection(),
        }
    }

    // ---- Group dialog ----

    pub fn open_create_dialog(&mut self) {
        self.group_dialog = Some(GroupDialogState::create());
        self.input_mode = InputMode::Typing;
        log_modal_state!(self.log_config, "group dialog opened for create");
    }

    pub fn open_edit_dialog(&mut self) {
        let Some(group) = self.selected_group().cloned() else {
            return;
        };
        self.group_dialog = Some(GroupDialogState::edit(&group));
        self.input_mode = InputMode::Typing;
        log_modal_state!(self.log_config, "group dialog opened for edit of {}", group.id);
    }

    pub fn close_group_dialog(&mut self) {
        self.group_dialog = None;
        self.input_mode = InputMode::Navigation;
        log_modal_state!(self.log_config, "group dialog closed");
    }

    /// Save the dialog through the store. Returns false when saving is disabled.
    pub fn submit_group_dialog(&mut self) -> bool {
        let Some(dialog) = &self.group_dialog else {
            return false;
        };
        if !dialog.can_save() {
            return false;
        }

        let new_group = dialog.to_new_group();
        let saved_id = match &dialog.editing {
            Some(existing) => {
                let updated = ProfileGroup {
                    name: new_group.name,
                    description: new_group.description,
                    profiles: new_group.profiles,
                    ..existing.clone()
                };
                self.store.update_group(updated).map(|group| {
                    log_store!(self.log_config, "UI updated group {}", group.id);
                    (group.id.clone(), format!("Group \"{}\" updated successfully", group.name))
                })
            }
            None => {
                let group = self.store.add_group(new_group);
                log_store!(self.log_config, "UI created group {}", group.id);
                Some((group.id.clone(), format!("Group \"{}\" created successfully", group.name)))
            }
        };

        self.close_group_dialog();
        if let Some((id, message)) = saved_id {
            self.set_status(message);
            self.select_group_by_id(&id);
        }
        true
    }

    // ---- Confirmation dialog ----

    pub fn request_delete_selected(&mut self) {
        let Some(group) = self.selected_group() else {
            return;
        };
        self.confirm_dialog = Some(ConfirmDialog::delete_group(group));
        log_modal_state!(self.log_config, "delete confirmation opened");
    }

    pub fn cancel_confirm_dialog(&mut self) {
        self.confirm_dialog = None;
        log_modal_state!(self.log_config, "confirmation dismissed");
    }

    pub fn accept_confirm_dialog(&mut self) {
        let Some(dialog) = self.confirm_dialog.take() else {
            return;
        };

        match dialog.action {
            ConfirmAction::DeleteGroup { group_id } => {
                if let Some(removed) = self.store.delete_group(&group_id) {
                    log_store!(self.log_config, "UI deleted group {}", removed.id);
                    self.set_status(format!("Group \"{}\" deleted successfully", removed.name));
                }
            }
        }
        self.clamp_selection();
    }
}

fn clamp_list(list_state: &mut ratatui::widgets::ListState, len: usize) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let index = list_state.selected().unwrap_or(0).min(len - 1);
    list_state.select(Some(index));
}

fn step_list(list_state: &mut ratatui::widgets::ListState, len: usize, delta: isize) {
    if len == 0 {
        list_state.select(None);
        return;
    }
    let current = list_state.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    list_state.select(Some(next as usize));
}

#[cfg(test)]
mod tests;
