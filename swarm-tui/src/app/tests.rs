use super::*;
use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swarm_types::{GroupSortKey, SocialNetwork, SortDirection};
use crate::logging::LogConfig;

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    let mut event = KeyEvent::new(code, KeyModifiers::empty());
    event.kind = KeyEventKind::Press;
    event
}

fn ctrl(c: char) -> KeyEvent {
    let mut event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
    event.kind = KeyEventKind::Press;
    event
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key_event(KeyCode::Char(c))).unwrap();
    }
}

fn profile(id: &str, name: &str, network: SocialNetwork) -> SocialProfile {
    SocialProfile {
        id: id.to_string(),
        name: name.to_string(),
        username: format!("@{}", id),
        network,
        avatar: String::new(),
        access_token: String::new(),
        access_token_secret: None,
    }
}

fn group(id: &str, name: &str, members: &[&str]) -> ProfileGroup {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    ProfileGroup {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} description", name),
        profiles: members.iter().map(|s| s.to_string()).collect(),
        created_at: at,
        updated_at: at,
    }
}

fn test_app() -> App {
    let store = GroupStore::new(
        vec![
            profile("p1", "Alpha", SocialNetwork::Twitter),
            profile("p2", "Bravo", SocialNetwork::Instagram),
            profile("p3", "Charlie", SocialNetwork::Linkedin),
        ],
        vec![group("g1", "Brand", &["p1", "p2"]), group("g2", "Personal", &["p3"])],
    );
    App::new(store)
}

#[test]
fn test_initial_selection_is_first_group() {
    let app = test_app();
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g1"));
    assert_eq!(app.visible_members().len(), 2);
}

#[test]
fn test_escape_closes_help_modal_first() {
    let mut app = test_app();
    app.show_help = true;

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(!app.show_help, "Help modal should be closed");
    assert!(app.running, "App should still be running");
}

#[test]
fn test_question_mark_toggles_help() {
    let mut app = test_app();

    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(app.show_help, "Help modal should be open");

    app.handle_key_event(key_event(KeyCode::Char('?'))).unwrap();
    assert!(!app.show_help, "Help modal should be closed");
}

#[test]
fn test_q_quits() {
    let mut app = test_app();
    app.handle_key_event(key_event(KeyCode::Char('q'))).unwrap();
    assert!(!app.running);
}

#[test]
fn test_create_group_through_dialog() {
    let mut app = test_app();

    app.handle_key_event(key_event(KeyCode::Char('n'))).unwrap();
    assert_eq!(app.input_mode, InputMode::Typing);
    assert_eq!(app.group_dialog.as_ref().unwrap().title(), "Create New Group");

    type_text(&mut app, "Launch");
    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    type_text(&mut app, "Spring launch");
    app.handle_key_event(key_event(KeyCode::Tab)).unwrap();
    // Toggle p2 (second in profile order)
    app.handle_key_event(key_event(KeyCode::Char('j'))).unwrap();
    app.handle_key_event(key_event(KeyCode::Char(' '))).unwrap();

    app.handle_key_event(ctrl('s')).unwrap();

    assert!(app.group_dialog.is_none(), "Dialog should close after save");
    assert_eq!(app.input_mode, InputMode::Navigation);
    assert_eq!(app.store.group_count(), 3);

    let created = app.store.groups().last().unwrap();
    assert_eq!(created.name, "Launch");
    assert_eq!(created.description, "Spring launch");
    assert_eq!(created.profiles, vec!["p2".to_string()]);
    assert_eq!(created.created_at, created.updated_at);

    assert_eq!(app.selected_group().map(|g| g.name.as_str()), Some("Launch"));
    assert!(app.status.as_ref().unwrap().text.contains("created successfully"));
}

#[test]
fn test_blank_name_disables_save() {
    let mut app = test_app();
    app.open_create_dialog();
    type_text(&mut app, "   ");

    assert!(!app.group_dialog.as_ref().unwrap().can_save());
    app.handle_key_event(ctrl('s')).unwrap();

    assert!(app.group_dialog.is_some(), "Dialog should stay open");
    assert_eq!(app.store.group_count(), 2);
}

#[test]
fn test_escape_cancels_dialog_without_saving() {
    let mut app = test_app();
    app.open_create_dialog();
    type_text(&mut app, "Draft");

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(app.group_dialog.is_none());
    assert!(app.running, "Esc in a dialog must not quit");
    assert_eq!(app.store.group_count(), 2);
}

#[test]
fn test_edit_dialog_prefills_and_updates() {
    let mut app = test_app();
    let original = app.store.group("g1").cloned().unwrap();

    app.handle_key_event(key_event(KeyCode::Char('e'))).unwrap();
    {
        let dialog = app.group_dialog.as_ref().unwrap();
        assert_eq!(dialog.title(), "Edit Group");
        assert_eq!(dialog.save_label(), "Save Changes");
        assert_eq!(dialog.name(), "Brand");
        assert_eq!(dialog.description(), "Brand description");
        assert_eq!(dialog.selected_profiles, vec!["p1".to_string(), "p2".to_string()]);
    }

    type_text(&mut app, " Team");
    // Untoggle p1, toggle p3
    app.handle_key_event(key_event(KeyCode::BackTab)).unwrap();
    app.handle_key_event(key_event(KeyCode::Char(' '))).unwrap();
    app.handle_key_event(key_event(KeyCode::Down)).unwrap();
    app.handle_key_event(key_event(KeyCode::Down)).unwrap();
    app.handle_key_event(key_event(KeyCode::Char(' '))).unwrap();
    app.handle_key_event(ctrl('s')).unwrap();

    let updated = app.store.group("g1").unwrap();
    assert_eq!(updated.name, "Brand Team");
    assert_eq!(updated.profiles, vec!["p2".to_string(), "p3".to_string()]);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);
}

#[test]
fn test_edit_without_changes_keeps_description_verbatim() {
    let mut app = test_app();
    let mut seeded = app.store.group("g1").cloned().unwrap();
    seeded.description = "Line one\r\nLine two\n".to_string();
    app.store.update_group(seeded);

    app.handle_key_event(key_event(KeyCode::Char('e'))).unwrap();
    assert_eq!(
        app.group_dialog.as_ref().unwrap().description(),
        "Line one\r\nLine two\n"
    );
    app.handle_key_event(ctrl('s')).unwrap();

    assert!(app.group_dialog.is_none());
    assert_eq!(app.store.group("g1").unwrap().description, "Line one\r\nLine two\n");
}

#[test]
fn test_empty_description_opens_as_single_blank_line() {
    let dialog = GroupDialogState::create();
    assert_eq!(dialog.description.lines().len(), 1);
    assert_eq!(dialog.description(), "");
}

#[test]
fn test_edit_keeps_name_whitespace_as_typed() {
    let mut app = test_app();
    let mut seeded = app.store.group("g2").cloned().unwrap();
    seeded.name = " Team ".to_string();
    app.store.update_group(seeded);

    app.select_group_by_id("g2");
    app.open_edit_dialog();
    assert_eq!(app.group_dialog.as_ref().unwrap().name(), " Team ");
    assert!(app.group_dialog.as_ref().unwrap().can_save());
    app.handle_key_event(ctrl('s')).unwrap();

    assert_eq!(app.store.group("g2").unwrap().name, " Team ");
}

#[test]
fn test_toggle_profile_adds_then_removes() {
    let mut dialog = GroupDialogState::create();
    dialog.toggle_profile("p1");
    dialog.toggle_profile("p3");
    assert_eq!(dialog.selected_profiles, vec!["p1".to_string(), "p3".to_string()]);

    dialog.toggle_profile("p1");
    assert_eq!(dialog.selected_profiles, vec!["p3".to_string()]);
    assert!(!dialog.is_selected("p1"));
}

#[test]
fn test_delete_requires_confirmation() {
    let mut app = test_app();

    app.handle_key_event(key_event(KeyCode::Char('d'))).unwrap();
    let dialog = app.confirm_dialog.clone().unwrap();
    assert_eq!(dialog.title, "Delete Group");
    assert!(dialog.description.contains("\"Brand\""));
    assert_eq!(app.store.group_count(), 2, "Nothing deleted before confirming");

    app.handle_key_event(key_event(KeyCode::Char('y'))).unwrap();
    assert!(app.confirm_dialog.is_none());
    assert!(app.store.group("g1").is_none());
    assert!(app.visible_groups().iter().all(|v| v.group.id != "g1"));
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));
}

#[test]
fn test_escape_cancels_delete_confirmation() {
    let mut app = test_app();
    app.request_delete_selected();

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();

    assert!(app.confirm_dialog.is_none());
    assert!(app.running, "App should still be running");
    assert_eq!(app.store.group_count(), 2);
}

#[test]
fn test_deleting_last_group_clears_selection() {
    let mut app = App::new(GroupStore::new(Vec::new(), vec![group("g1", "Only", &[])]));
    app.request_delete_selected();
    app.accept_confirm_dialog();

    assert!(app.selected_group().is_none());
    assert!(app.visible_groups().is_empty());
    // Nothing to edit or delete
    app.open_edit_dialog();
    app.request_delete_selected();
    assert!(app.group_dialog.is_none());
    assert!(app.confirm_dialog.is_none());
}

#[test]
fn test_search_filters_groups() {
    let mut app = test_app();

    app.handle_key_event(key_event(KeyCode::Char('/'))).unwrap();
    assert_eq!(app.input_mode, InputMode::Typing);
    type_text(&mut app, "PERS");
    app.handle_key_event(key_event(KeyCode::Enter)).unwrap();

    assert_eq!(app.input_mode, InputMode::Navigation);
    let visible: Vec<String> = app.visible_groups().iter().map(|v| v.group.id.clone()).collect();
    assert_eq!(visible, vec!["g2"]);
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));
}

#[test]
fn test_search_keys_do_not_trigger_shortcuts() {
    let mut app = test_app();
    app.enter_search_mode();
    type_text(&mut app, "qdn");

    assert!(app.running);
    assert!(app.group_dialog.is_none());
    assert!(app.confirm_dialog.is_none());
    assert_eq!(app.groups_pane.query.search, "qdn");

    app.handle_key_event(key_event(KeyCode::Esc)).unwrap();
    assert!(app.groups_pane.query.search.is_empty(), "Esc discards the query");
}

#[test]
fn test_sort_keys_cycle_and_toggle() {
    let mut app = test_app();
    assert_eq!(app.groups_pane.query.sort_key, GroupSortKey::Name);

    app.handle_key_event(key_event(KeyCode::Char('s'))).unwrap();
    assert_eq!(app.groups_pane.query.sort_key, GroupSortKey::Created);

    app.handle_key_event(key_event(KeyCode::Char('s'))).unwrap();
    assert_eq!(app.groups_pane.query.sort_key, GroupSortKey::ProfileCount);

    app.handle_key_event(key_event(KeyCode::Char('o'))).unwrap();
    assert_eq!(app.groups_pane.query.direction, SortDirection::Descending);
    let order: Vec<String> = app.visible_groups().iter().map(|v| v.group.id.clone()).collect();
    assert_eq!(order, vec!["g1", "g2"]);

    app.handle_key_event(key_event(KeyCode::Char('o'))).unwrap();
    let order: Vec<String> = app.visible_groups().iter().map(|v| v.group.id.clone()).collect();
    assert_eq!(order, vec!["g2", "g1"]);
}

#[test]
fn test_reordering_keeps_selected_group() {
    let mut app = test_app();
    app.select_next();
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));

    app.toggle_sort_direction();
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));
}

#[test]
fn test_profile_pane_search_and_sort() {
    let mut app = test_app();
    app.handle_key_event(key_event(KeyCode::Char('l'))).unwrap();
    assert_eq!(app.focus, Focus::Profiles);

    app.handle_key_event(key_event(KeyCode::Char('o'))).unwrap();
    let names: Vec<&str> = app.visible_members().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Bravo", "Alpha"]);

    app.enter_search_mode();
    type_text(&mut app, "alp");
    let names: Vec<&str> = app.visible_members().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha"]);
    assert!(app.groups_pane.query.search.is_empty(), "Group search untouched");
}

#[test]
fn test_selection_moves_within_bounds() {
    let mut app = test_app();
    app.select_previous();
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g1"));
    app.select_next();
    app.select_next();
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));
}

#[test]
fn test_select_group_by_id_ignores_hidden_groups() {
    let mut app = test_app();
    app.log_config = LogConfig::verbose();

    app.select_group_by_id("g2");
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));

    app.select_group_by_id("missing");
    assert_eq!(app.selected_group().map(|g| g.id.as_str()), Some("g2"));
}

#[test]
fn test_theme_cycle_without_config_manager() {
    let mut app = test_app();
    app.handle_key_event(key_event(KeyCode::Char('t'))).unwrap();
    assert_eq!(app.color_scheme, swarm_types::ColorScheme::Dark);
}

#[test]
fn test_theme_cycle_persists_preferences() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_dir(dir.path());
    let mut app = test_app().with_config_manager(manager.clone());

    app.cycle_color_scheme();

    let prefs = manager.load_preferences().unwrap();
    assert_eq!(prefs.color_scheme, swarm_types::ColorScheme::Dark);

    let reloaded = test_app().with_config_manager(manager);
    assert_eq!(reloaded.color_scheme, swarm_types::ColorScheme::Dark);
}

#[test]
fn test_status_message_expires() {
    let mut app = test_app();
    app.set_status("hello");
    app.clear_expired_messages();
    assert!(app.status.is_some());

    app.status.as_mut().unwrap().created_at = Instant::now() - STATUS_TIMEOUT;
    app.clear_expired_messages();
    assert!(app.status.is_none());
}

#[test]
fn test_release_events_are_ignored() {
    let mut app = test_app();
    let mut event = key_event(KeyCode::Char('q'));
    event.kind = KeyEventKind::Release;
    app.handle_key_event(event).unwrap();
    assert!(app.running);
}
