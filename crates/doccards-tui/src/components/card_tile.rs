use crate::theme::{card_border, file_detail_text, label_text, normal_text, tag_strip};
use doccards_domain::{CardView, CornerAction};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub const TILE_WIDTH: u16 = 28;
pub const TILE_HEIGHT: u16 = 13;

fn corner_glyph(corner: CornerAction) -> &'static str {
    match corner {
        CornerAction::Delete => "[x]",
        CornerAction::Download => "[v]",
    }
}

pub fn render_card_tile(frame: &mut Frame, area: Rect, view: &CardView, selected: bool) {
    let mut title = vec![Span::styled(format!(" #{} ", view.id), label_text())];
    if view.emphasized {
        title.push(Span::styled("● ", file_detail_text()));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(card_border(selected, view.emphasized));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let mut body = vec![Line::from(Span::styled(
        view.description.as_str(),
        normal_text(),
    ))];
    if let Some(file) = &view.file {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("Type: {}", file.mime_type),
            file_detail_text(),
        )));
        body.push(Line::from(Span::styled(
            format!("Size: {}", file.size_label),
            file_detail_text(),
        )));
    }
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), chunks[0]);

    let footer_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(chunks[1]);
    frame.render_widget(
        Paragraph::new(view.size_label.as_str()).style(label_text()),
        footer_row[0],
    );
    frame.render_widget(
        Paragraph::new(corner_glyph(view.corner)).style(normal_text()),
        footer_row[1],
    );

    if let Some(tag) = view.tag {
        frame.render_widget(
            Paragraph::new(tag.title)
                .alignment(Alignment::Center)
                .style(tag_strip(tag.emphasis)),
            chunks[2],
        );
    }
}
