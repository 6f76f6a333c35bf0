//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::App;
use crate::config::Theme;
use crate::games::tictactoe::{Board, Player, Position, Square};

/// Colours for one theme.
struct Palette {
    background: Color,
    text: Color,
    grid: Color,
    x: Color,
    o: Color,
    cursor: Color,
    highlight: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::Gray,
                grid: Color::DarkGray,
                x: Color::Cyan,
                o: Color::Magenta,
                cursor: Color::White,
                highlight: Color::Rgb(3, 218, 197),
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                grid: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                cursor: Color::Black,
                highlight: Color::Rgb(3, 218, 197),
            },
        }
    }

    /// Foreground for text drawn on the cursor colour.
    fn background_or_black(&self) -> Color {
        match self.background {
            Color::Reset => Color::Black,
            other => other,
        }
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.mode_label(), Style::default().fg(palette.text))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let highlight: Vec<Position> = app
        .highlighted_line()
        .map(|line| line.to_vec())
        .unwrap_or_default();
    draw_board(frame, chunks[1], &app.visible_board(), app.cursor(), &highlight, &palette);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow).bg(palette.background))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help_text = "1-9/Enter: place | Arrows: move | R: restart | M: mode | T: theme | Q: quit";
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(palette.grid))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: &[Position],
    palette: &Palette,
) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, row) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[i * 2], board, cursor, highlight, row, palette);
        if i < 2 {
            let sep = Paragraph::new("─".repeat(41)).style(Style::default().fg(palette.grid));
            frame.render_widget(sep, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    highlight: &[Position],
    positions: &[Position],
    palette: &Palette,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (i, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, pos, pos == cursor, highlight.contains(&pos), palette);
        if i < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(palette.grid));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    under_cursor: bool,
    highlighted: bool,
    palette: &Palette,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (pos.number().to_string(), Style::default().fg(palette.grid)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(palette.x).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(palette.o).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(palette.highlight).fg(Color::Black)
    } else if under_cursor {
        base_style.bg(palette.cursor).fg(palette.background_or_black())
    } else {
        base_style
    };

    // Middle line of the three-line cell carries the mark.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
