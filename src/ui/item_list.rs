use crate::app::input::TextInput;
use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const NAME_FIELD_MIN: usize = 16;
const AMOUNT_FIELD_MIN: usize = 6;
const MAX_NAME_COLUMN: usize = 40;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Items ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    if state.list.is_empty() {
        let hint = Paragraph::new(Line::from(vec![
            Span::styled("No items yet. Press ", Theme::hint()),
            Span::styled("a", Theme::key()),
            Span::styled(" to add one.", Theme::hint()),
        ]))
        .alignment(Alignment::Center);
        let y = inner.y + inner.height / 2;
        frame.render_widget(hint, Rect::new(inner.x, y, inner.width, 1));
        return;
    }

    let symbol = state.config.ui.highlight_symbol.as_str();
    let symbol_w = symbol.width();
    let name_w = state
        .list
        .items()
        .iter()
        .map(|i| i.name.width())
        .max()
        .unwrap_or(0)
        .clamp(NAME_FIELD_MIN, MAX_NAME_COLUMN);

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_line = 0;
    let mut cursor: Option<(usize, usize)> = None;

    for (idx, item) in state.list.items().iter().enumerate() {
        let is_selected = idx == state.selected;
        if is_selected {
            selected_line = lines.len();
        }
        let marker = if is_selected {
            symbol.to_string()
        } else {
            " ".repeat(symbol_w)
        };

        match state.edit.as_ref().filter(|d| item.is_editing && d.id == item.id) {
            Some(draft) => {
                let name_focused = draft.field == DraftField::Name;
                let name_field = name_w.max(draft.name.as_str().width() + 1);
                let label_w = "Name ".width();
                let qty_label = "  Qty ";
                lines.push(
                    Line::from(vec![
                        Span::styled(marker, Theme::selected_row()),
                        Span::styled("Name ", Theme::field_label(name_focused)),
                        field_span(&draft.name, name_field, name_focused),
                        Span::styled(qty_label, Theme::field_label(!name_focused)),
                        field_span(&draft.amount, AMOUNT_FIELD_MIN, !name_focused),
                    ])
                    .style(Theme::edit_row()),
                );
                let x = if name_focused {
                    symbol_w + label_w + draft.name.cursor_width()
                } else {
                    symbol_w + label_w + name_field + qty_label.width() + draft.amount.cursor_width()
                };
                cursor = Some((x, lines.len() - 1));
                lines.push(
                    Line::from(vec![
                        Span::raw(" ".repeat(symbol_w)),
                        Span::styled("Enter", Theme::key()),
                        Span::styled(" save  ", Theme::hint()),
                        Span::styled("Esc", Theme::key()),
                        Span::styled(" cancel  ", Theme::hint()),
                        Span::styled("Tab", Theme::key()),
                        Span::styled(" switch field", Theme::hint()),
                    ])
                    .style(Theme::edit_row()),
                );
            }
            None => {
                let name_style = if is_selected {
                    Theme::selected_row()
                } else {
                    Theme::item_name()
                };
                let mut spans = vec![
                    Span::styled(marker, Theme::selected_row()),
                    Span::styled(pad_to_width(&item.name, name_w), name_style),
                    Span::styled(format!("  Qty: {:<4}", item.amount), Theme::item_quantity()),
                ];
                if is_selected {
                    spans.push(Span::styled("  [e]", Theme::key()));
                    spans.push(Span::styled("dit ", Theme::hint()));
                    spans.push(Span::styled("[d]", Theme::delete_key()));
                    spans.push(Span::styled("elete", Theme::hint()));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let visible = inner.height as usize;
    let offset = scroll_offset(selected_line, lines.len(), visible, cursor.is_some());
    frame.render_widget(Paragraph::new(lines).scroll((offset as u16, 0)), inner);

    if state.mode() == Mode::Editing {
        if let Some((x, line)) = cursor {
            if line >= offset && line < offset + visible {
                let cx = (inner.x as usize + x).min(inner.right().saturating_sub(1) as usize);
                frame.set_cursor_position((cx as u16, inner.y + (line - offset) as u16));
            }
        }
    }
}

/// First line to show so the selected row (plus its help line while
/// editing) stays on screen.
fn scroll_offset(selected_line: usize, total: usize, visible: usize, editing: bool) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    let last_needed = selected_line + usize::from(editing);
    last_needed.saturating_sub(visible - 1).min(total - visible)
}

fn field_span(input: &TextInput, width: usize, focused: bool) -> Span<'static> {
    Span::styled(pad_to_width(input.as_str(), width), Theme::field(focused))
}

fn pad_to_width(text: &str, width: usize) -> String {
    let used = text.width();
    let mut s = text.to_string();
    s.push_str(&" ".repeat(width.saturating_sub(used)));
    s
}
