mod add_dialog;
mod item_list;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

/// Draw the whole screen from `state`. Holds no state of its own.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_header(frame, app_layout.header, state);
    item_list::render(frame, app_layout.item_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
    add_dialog::render(frame, state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let count = state.list.len();
    let noun = if count == 1 { "item" } else { "items" };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", state.config.ui.title), Theme::title()),
        Span::styled(
            format!(" {} {} · {} total ", count, noun, state.list.total_quantity()),
            Theme::hint(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
