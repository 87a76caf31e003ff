use super::colors::*;
use doccards_domain::Emphasis;
use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

/// Border of a card tile. Focus wins over the attached-file accent.
pub fn card_border(selected: bool, emphasized: bool) -> Style {
    match (selected, emphasized) {
        (true, _) => Style::default()
            .fg(FOCUSED_BORDER)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(ATTACHED_BORDER),
        (false, false) => Style::default().fg(CARD_BORDER),
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn file_detail_text() -> Style {
    Style::default().fg(FILE_DETAIL_TEXT)
}

pub fn emphasis_color(emphasis: Option<Emphasis>) -> Color {
    match emphasis {
        Some(Emphasis::Blue) => TAG_BLUE,
        Some(Emphasis::Green) => TAG_GREEN,
        None => TAG_PLAIN,
    }
}

pub fn tag_strip(emphasis: Option<Emphasis>) -> Style {
    Style::default()
        .bg(emphasis_color(emphasis))
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
