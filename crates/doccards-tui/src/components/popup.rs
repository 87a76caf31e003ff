use crate::theme::{focused_border, highlight_text, label_text, normal_text, popup_bg};
use doccards_core::TextBuffer;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn popup_block(frame: &mut Frame, title: &str, percent_x: u16, percent_y: u16) -> Rect {
    let area = centered_rect(percent_x, percent_y, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Text field popup with the terminal cursor placed inside the field.
/// `field_lines` sets how many lines of text are visible.
pub fn render_text_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    buffer: &TextBuffer,
    field_lines: u16,
) {
    let inner = popup_block(frame, title, 60, 40);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(field_lines + 2),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label).style(highlight_text()), chunks[0]);

    let (line, col) = buffer.cursor_line_col();
    let scroll = (line as u16).saturating_sub(field_lines.saturating_sub(1));
    let field = Paragraph::new(buffer.as_str())
        .style(normal_text())
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(field, chunks[1]);

    let cursor_x = chunks[1].x + 1 + col as u16;
    let cursor_y = chunks[1].y + 1 + (line as u16 - scroll);
    frame.set_cursor_position((cursor_x, cursor_y));
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, message: &str) {
    let inner = popup_block(frame, title, 50, 25);

    let lines = vec![
        Line::from(Span::styled(message, normal_text())),
        Line::from(""),
        Line::from(Span::styled("[y] Yes    [n] No", label_text())),
    ];
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, inner);
}
