//! Terminal UI rendering with ratatui

use crate::board::BOARD_WIDTH;
use crate::game::Game;
use crate::settings::Settings;
use crate::tetromino::color_for;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const EMPTY: &str = "  ";

/// Board window: 12 cells at 2 columns each, plus borders
const BOARD_WIN_WIDTH: u16 = (BOARD_WIDTH as u16) * 2 + 2;
/// Board plus the side panel
const GAME_WIDTH: u16 = BOARD_WIN_WIDTH + 18;
/// 20 rows plus borders
const GAME_HEIGHT: u16 = 22;

/// Render the entire game UI
pub fn render(frame: &mut Frame, game: &Game, settings: &Settings) {
    let area = frame.area();
    let game_area = center_rect(area, GAME_WIDTH, GAME_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIN_WIDTH),
            Constraint::Length(18),
        ])
        .split(game_area);

    render_board(frame, layout[0], game, settings);
    render_side_panel(frame, layout[1], game);
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Render the board with the falling piece overlaid
fn render_board(frame: &mut Frame, area: Rect, game: &Game, settings: &Settings) {
    let block_char = settings.visual.block_char();

    let block = Block::default()
        .title(" GRIDFALL ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let piece = game.piece();
    let mut lines: Vec<Line> = Vec::new();
    for (y, row) in game.board().rows().enumerate() {
        let mut spans = Vec::with_capacity(BOARD_WIDTH);
        for (x, &settled) in row.iter().enumerate() {
            // The falling piece draws over whatever is settled beneath it.
            let code = piece.cell_at(x as i32, y as i32).unwrap_or(settled);
            if code == 0 {
                spans.push(Span::raw(EMPTY));
            } else {
                spans.push(Span::styled(
                    block_char,
                    Style::default().fg(color_for(code)),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render score, lines, and the controls hint
fn render_side_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    let score = game.score();
    let mut score_lines = vec![
        Line::raw(""),
        Line::styled(format!("{:>10}", score.points), Style::default().fg(Color::Yellow).bold()),
        Line::styled(
            format!("{:>10} lines", score.lines),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(action) = &game.last_action {
        score_lines.push(Line::raw(""));
        score_lines.push(Line::styled(
            action.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }

    let score_block = Block::default()
        .title(" SCORE ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let score_inner = score_block.inner(layout[0]);
    frame.render_widget(score_block, layout[0]);
    frame.render_widget(Paragraph::new(score_lines), score_inner);

    let help = Paragraph::new(vec![
        Line::raw(""),
        Line::styled("←/→  move", Style::default().fg(Color::DarkGray)),
        Line::styled("↓    drop", Style::default().fg(Color::DarkGray)),
        Line::styled("q/w  rotate", Style::default().fg(Color::DarkGray)),
        Line::styled("r    restart", Style::default().fg(Color::DarkGray)),
        Line::styled("esc  quit", Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(help, layout[1]);
}
