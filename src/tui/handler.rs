//! Event handler for the TUI
//!
//! Routes keyboard events to the form or the active dialog.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.expire_notification();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Quit works everywhere
    if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    if ctrl {
        return handle_shortcut(app, key);
    }

    handle_form_key(app, key)
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => app.close_dialog(),
        KeyCode::F(1) if app.active_dialog == ActiveDialog::Help => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Handle Ctrl shortcuts on the form
fn handle_shortcut(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('o') => app.load(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('r') => app.clear_form(),
        KeyCode::Char('h') => app.open_dialog(ActiveDialog::Help),
        _ => {}
    }
    Ok(())
}

/// Handle navigation and editing keys on the form
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.open_dialog(ActiveDialog::Help),
        KeyCode::Enter => app.calculate(),

        // Field navigation
        KeyCode::Down | KeyCode::Tab => app.form.focus_next(),
        KeyCode::Up | KeyCode::BackTab => app.form.focus_prev(),

        // Editing
        KeyCode::Left => app.form.focused_input_mut().move_left(),
        KeyCode::Right => app.form.focused_input_mut().move_right(),
        KeyCode::Home => app.form.focused_input_mut().move_start(),
        KeyCode::End => app.form.focused_input_mut().move_end(),
        KeyCode::Backspace => app.form.focused_input_mut().backspace(),
        KeyCode::Delete => app.form.focused_input_mut().delete(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            app.form.focused_input_mut().insert(c)
        }
        _ => {}
    }
    Ok(())
}
