use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 29);
    pub const BG_SURFACE: Color = Color::Rgb(32, 35, 42);
    pub const BG_EDIT: Color = Color::Rgb(48, 52, 60);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 85);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 146, 156);
    pub const ACCENT_TEAL: Color = Color::Rgb(86, 182, 194);
    pub const ACCENT_AMBER: Color = Color::Rgb(229, 192, 123);
    pub const ACCENT_RED: Color = Color::Rgb(224, 108, 117);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_name() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn item_quantity() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn delete_key() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn field(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_DARK)
        } else {
            Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_DARK)
        }
    }

    pub fn field_label(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::ACCENT_TEAL)
        } else {
            Self::hint()
        }
    }

    pub fn edit_row() -> Style {
        Style::default().bg(Self::BG_EDIT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_SURFACE)
    }

    pub fn mode_badge() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }
}
