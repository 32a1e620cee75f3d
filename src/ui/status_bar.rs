use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mode = state.mode();
    let mode_name = match mode {
        Mode::Browse => "LIST",
        Mode::Adding => "ADD",
        Mode::Editing => "EDIT",
    };

    let mut parts: Vec<Span> = vec![Span::styled(format!(" {} ", mode_name), Theme::mode_badge())];

    if let Some(item) = state.list.editing() {
        parts.push(Span::styled(format!(" {} ", item.name), Theme::status_bar()));
    }

    if state.config.ui.show_help {
        for (key, label) in key_help(mode) {
            parts.push(Span::styled(format!(" {}", key), Theme::key().bg(Theme::BG_SURFACE)));
            parts.push(Span::styled(format!(" {} ", label), Theme::status_bar()));
        }
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}

fn key_help(mode: Mode) -> &'static [(&'static str, &'static str)] {
    match mode {
        Mode::Browse => &[
            ("a", "add"),
            ("↑↓", "move"),
            ("e", "edit"),
            ("d", "delete"),
            ("q", "quit"),
        ],
        Mode::Adding => &[("Enter", "add"), ("Tab", "field"), ("Esc", "cancel")],
        Mode::Editing => &[("Enter", "save"), ("Tab", "field"), ("Esc", "cancel")],
    }
}
