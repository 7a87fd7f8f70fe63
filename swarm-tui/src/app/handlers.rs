use crate::app::state::{App, DialogField, Focus, InputMode};
use crate::log_key_event;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input;

pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    log_key_event!(app.log_config, "key={:?} modifiers={:?}", key.code, key.modifiers);

    // Priority 1: Help overlay
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            app.toggle_help();
        }
        return Ok(());
    }

    // Priority 2: Confirmation dialog
    if app.confirm_dialog.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.accept_confirm_dialog(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_confirm_dialog(),
            _ => {}
        }
        return Ok(());
    }

    // Priority 3: Create/edit dialog
    if app.group_dialog.is_some() {
        if matches!(key.code, KeyCode::Esc) {
            app.close_group_dialog();
            return Ok(());
        }
        return handle_group_dialog_keys(app, key);
    }

    // Priority 4: Search input
    if app.is_searching() {
        return handle_search_keys(app, key);
    }

    // Priority 5: Global keys
    match key.code {
        KeyCode::Char('?') if app.input_mode == InputMode::Navigation => {
            app.toggle_help();
            return Ok(());
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
            if app.input_mode == InputMode::Navigation =>
        {
            app.running = false;
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return Ok(());
        }
        _ => {}
    }

    handle_main_keys(app, key)
}

pub fn handle_main_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::Groups,
        KeyCode::Char('l') | KeyCode::Right => {
            if app.selected_group().is_some() {
                app.focus = Focus::Profiles;
                app.clamp_selection();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('n') => app.open_create_dialog(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Char('s') => app.cycle_sort_key(),
        KeyCode::Char('o') => app.toggle_sort_direction(),
        KeyCode::Char('t') => app.cycle_color_scheme(),
        _ => {}
    }
    Ok(())
}

fn handle_search_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.exit_search_mode(false),
        KeyCode::Esc => app.exit_search_mode(true),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
    Ok(())
}

fn handle_group_dialog_keys(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        // Disabled save is silently ignored
        app.submit_group_dialog();
        return Ok(());
    }

    let profile_ids: Vec<String> = app.store.profiles().iter().map(|p| p.id.clone()).collect();
    let Some(dialog) = app.group_dialog.as_mut() else {
        return Ok(());
    };

    match key.code {
        KeyCode::Tab => {
            dialog.focused_field = dialog.focused_field.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            dialog.focused_field = dialog.focused_field.previous();
            return Ok(());
        }
        _ => {}
    }

    match dialog.focused_field {
        DialogField::Name => match key.code {
            KeyCode::Enter => dialog.focused_field = DialogField::Description,
            _ => {
                dialog.name.input(Input::from(key));
            }
        },
        DialogField::Description => {
            dialog.description.input(Input::from(key));
        }
        DialogField::Profiles => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                if dialog.profile_cursor + 1 < profile_ids.len() {
                    dialog.profile_cursor += 1;
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                dialog.profile_cursor = dialog.profile_cursor.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = profile_ids.get(dialog.profile_cursor) {
                    dialog.toggle_profile(id);
                }
            }
            _ => {}
        },
    }

    Ok(())
}
