use crate::app::command::Command;
use crate::app::event::AppEvent;
use crate::app::input::TextInput;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route an event to the mode-specific key handler. Text editing happens in
/// place; list changes come back as commands for [`AppState::apply`].
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Command> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Command> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Command::Quit];
    }

    match state.mode() {
        Mode::Adding => handle_dialog_key(state, key),
        Mode::Editing => handle_edit_key(state, key),
        Mode::Browse => handle_browse_key(state, key),
    }
}

fn handle_browse_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('+') => vec![Command::OpenAddDialog],
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Char('e') | KeyCode::Enter => state
            .selected_id()
            .map(|id| vec![Command::BeginEdit { id }])
            .unwrap_or_default(),
        KeyCode::Char('d') | KeyCode::Delete => state
            .selected_id()
            .map(|id| vec![Command::DeleteItem { id }])
            .unwrap_or_default(),
        KeyCode::Char('q') => vec![Command::Quit],
        _ => vec![],
    }
}

fn handle_dialog_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Esc => vec![Command::CancelAddDialog],
        KeyCode::Enter => vec![Command::ConfirmAdd {
            name: state.list.draft(DraftField::Name).as_str().to_string(),
            quantity: state.list.draft(DraftField::Quantity).as_str().to_string(),
        }],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            state.dialog_field = state.dialog_field.toggle();
            vec![]
        }
        _ => {
            let field = state.dialog_field;
            edit_text(state.list.draft_mut(field), key);
            vec![]
        }
    }
}

fn handle_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Command> {
    let Some(draft) = state.edit.as_mut() else {
        return vec![];
    };
    match key.code {
        KeyCode::Esc => vec![Command::CancelEdit { id: draft.id }],
        KeyCode::Enter => vec![Command::CommitEdit {
            id: draft.id,
            name: draft.name.as_str().to_string(),
            amount: draft.amount.as_str().to_string(),
        }],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            draft.field = draft.field.toggle();
            vec![]
        }
        _ => {
            edit_text(draft.focused_mut(), key);
            vec![]
        }
    }
}

fn edit_text(input: &mut TextInput, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(c) if !ctrl => input.insert_char(c),
        KeyCode::Backspace => input.delete_back(),
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
}
