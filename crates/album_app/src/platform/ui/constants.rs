use ratatui::style::{Color, Modifier, Style};

pub const TITLE_SEARCH: &str = " Search ";
pub const TITLE_CARDS: &str = " Albums ";
pub const SEARCH_PLACEHOLDER: &str = "Search items...";
pub const KEY_HINTS: &str = "Up/Down card  Enter open  Left/Right item  Tab mark seen  Esc quit";

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn item_unseen() -> Style {
    Style::default().fg(Color::White)
}

pub fn item_seen() -> Style {
    Style::default().fg(Color::Green)
}

pub fn cursor_highlight() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn card_selected() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub fn status_bar() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

pub fn status_error() -> Style {
    Style::default().fg(Color::LightRed).bg(Color::DarkGray)
}
