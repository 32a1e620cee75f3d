use crate::app::state::{AppState, DraftField};
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const LABEL_WIDTH: u16 = 10;

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.list.dialog_open() {
        return;
    }

    let popup_area = centered_popup(frame.area(), 50, 40, 8);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add Item ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ACCENT_TEAL))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 5 || inner.width <= LABEL_WIDTH + 2 {
        return;
    }

    let fields = [
        (DraftField::Name, "Name", inner.y + 1),
        (DraftField::Quantity, "Quantity", inner.y + 2),
    ];
    let field_width = inner.width - LABEL_WIDTH - 2;

    for (field, label, y) in fields {
        let focused = state.dialog_field == field;
        let input = state.list.draft(field);

        let label_area = Rect::new(inner.x + 1, y, LABEL_WIDTH, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(label, Theme::field_label(focused))),
            label_area,
        );

        let field_area = Rect::new(inner.x + 1 + LABEL_WIDTH, y, field_width, 1);
        frame.render_widget(
            Paragraph::new(input.as_str()).style(Theme::field(focused)),
            field_area,
        );

        if focused {
            let cx = field_area.x + input.cursor_width() as u16;
            frame.set_cursor_position((cx.min(field_area.right() - 1), y));
        }
    }

    let help_area = Rect::new(inner.x + 1, inner.y + inner.height - 1, inner.width - 1, 1);
    let help = Line::from(vec![
        Span::styled("Enter", Theme::key()),
        Span::styled(" Add  ", Theme::hint()),
        Span::styled("Esc", Theme::key()),
        Span::styled(" Cancel  ", Theme::hint()),
        Span::styled("Tab", Theme::key()),
        Span::styled(" Next field", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(help), help_area);
}
