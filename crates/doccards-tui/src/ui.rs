use crate::app::{App, AppMode};
use crate::components::{
    render_card_tile, render_confirm_popup, render_text_popup, TILE_HEIGHT, TILE_WIDTH,
};
use crate::theme::*;
use doccards_domain::CardController;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TILE_GAP: u16 = 2;
const ACTIVITY_LINES: usize = 50;

pub fn render(app: &mut App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    let cards_area = if app.show_activity {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        render_activity(app, frame, main[1]);
        main[0]
    } else {
        chunks[1]
    };

    let (per_row, visible_rows) = grid_shape(cards_area);
    app.selection
        .ensure_selected_visible(app.board.len(), per_row, visible_rows);
    render_cards(app, frame, cards_area);

    render_footer(app, frame, chunks[2]);

    match &app.mode {
        AppMode::Normal => {}
        AppMode::EditCard(card_id) => {
            if let Some(draft) = app.controllers.get(card_id).and_then(|c| c.draft()) {
                render_text_popup(
                    frame,
                    &format!(" Edit card #{} ", card_id),
                    "Description:",
                    draft,
                    4,
                );
            }
        }
        AppMode::PickFile => {
            render_text_popup(frame, " Upload ", "Path to file:", &app.path_input, 1);
        }
        AppMode::ConfirmDelete { message } => {
            render_confirm_popup(frame, " Delete ", message);
        }
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(banner) = &app.banner {
        banner.render(frame, area);
        return;
    }
    let title = Line::from(vec![
        Span::styled("Documents ", bold_highlight()),
        Span::styled(format!("({} cards)", app.board.len()), label_text()),
    ]);
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM)),
        area,
    );
}

/// Cards per row and whole rows that fit in `area`. At least one of each,
/// so the selected card always gets a (possibly clipped) tile.
pub fn grid_shape(area: Rect) -> (usize, usize) {
    let per_row = ((area.width + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1);
    let rows = ((area.height + 1) / (TILE_HEIGHT + 1)).max(1);
    (per_row as usize, rows as usize)
}

/// Lay the tiles out left to right, wrapping into rows like the web grid,
/// starting at row `row_offset`. Yields the card index with each tile.
pub fn tile_areas(area: Rect, count: usize, row_offset: usize) -> Vec<(usize, Rect)> {
    let (per_row, visible_rows) = grid_shape(area);
    let first = row_offset * per_row;
    (first..count)
        .take(per_row * visible_rows)
        .map(|idx| {
            let col = ((idx - first) % per_row) as u16;
            let row = ((idx - first) / per_row) as u16;
            let tile = Rect {
                x: area.x + col * (TILE_WIDTH + TILE_GAP),
                y: area.y + row * (TILE_HEIGHT + 1),
                width: TILE_WIDTH,
                height: TILE_HEIGHT,
            };
            (idx, tile.intersection(area))
        })
        .filter(|(_, tile)| !tile.is_empty())
        .collect()
}

fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    if app.board.is_empty() {
        frame.render_widget(
            Paragraph::new("No cards yet. Press 'n' to add one!").style(label_text()),
            area,
        );
        return;
    }

    let cards = app.board.cards();
    for (idx, tile) in tile_areas(area, cards.len(), app.selection.row_offset()) {
        let record = &cards[idx];
        let view = app
            .controllers
            .get(&record.id)
            .map(|controller| controller.present(record))
            .unwrap_or_else(|| CardController::new(record.id).present(record));
        render_card_tile(frame, tile, &view, app.selection.get() == Some(idx));
    }
}

fn render_activity(app: &App, frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = app
        .activity
        .recent(ACTIVITY_LINES)
        .iter()
        .rev()
        .map(|entry| Line::from(Span::styled(entry.display_line(), label_text())))
        .collect();
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Activity ")
            .borders(Borders::ALL)
            .border_style(focused_border()),
    );
    frame.render_widget(panel, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let help = match &app.mode {
        AppMode::Normal if app.in_flight.is_some() => "Waiting... | q: quit",
        AppMode::Normal => {
            "←/→: select | n: new | e: edit | x: corner | t: tag | u/r: undo/redo | a: activity | q: quit"
        }
        AppMode::EditCard(_) => "Enter: save | Alt+Enter: new line | Esc: cancel",
        AppMode::PickFile => "Enter: upload | Esc: cancel",
        AppMode::ConfirmDelete { .. } => "y: delete | n: keep | q: keep and quit",
    };
    frame.render_widget(
        Paragraph::new(help)
            .style(label_text())
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}
