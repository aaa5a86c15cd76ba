//! UI rendering using ratatui
//!
//! One screen: the board grid on the left, with premium cells
//! color-coded, and a side panel with the scoreboard, the current rack,
//! the action feed, and the command line.

use crate::app::App;
use crate::game::board::{Board, Bonus, BOARD_SIZE};
use crate::game::engine::Player;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(52), Constraint::Min(34)])
        .split(frame.area());

    render_board(frame, layout[0], app.game.board());
    render_side_panel(frame, layout[1], app);
}

fn bonus_style(bonus: Bonus) -> Style {
    match bonus {
        Bonus::TripleWord => Style::default().fg(Color::Red),
        Bonus::DoubleWord => Style::default().fg(Color::Magenta),
        Bonus::TripleLetter => Style::default().fg(Color::Blue),
        Bonus::DoubleLetter => Style::default().fg(Color::Cyan),
        Bonus::None => Style::default().fg(Color::DarkGray),
    }
}

fn bonus_marker(bonus: Bonus) -> &'static str {
    match bonus {
        Bonus::TripleWord => "TW ",
        Bonus::DoubleWord => "DW ",
        Bonus::TripleLetter => "TL ",
        Bonus::DoubleLetter => "DL ",
        Bonus::None => " . ",
    }
}

fn render_board(frame: &mut Frame, area: Rect, board: &Board) {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 1);

    let mut header = String::from("   ");
    for col in 0..BOARD_SIZE {
        header.push(' ');
        header.push((b'A' + col as u8) as char);
        header.push(' ');
    }
    lines.push(Line::from(Span::styled(
        header,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    for row in 0..BOARD_SIZE {
        let mut spans = vec![Span::styled(
            format!("{:>2} ", row + 1),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for col in 0..BOARD_SIZE {
            let square = board.square(row, col);
            let span = match square.tile() {
                Some(tile) => {
                    let style = if tile.is_wildcard() {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    };
                    Span::styled(format!(" {} ", tile.letter()), style)
                }
                None => Span::styled(bonus_marker(square.bonus()), bonus_style(square.bonus())),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(widget, area);
}

fn render_side_panel(frame: &mut Frame, area: Rect, app: &App) {
    let players = app.game.players();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(players.len() as u16 + 2),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_scoreboard(frame, layout[0], players, app.game.current_index());
    render_rack(frame, layout[1], app.game.current_player());
    render_feed(frame, layout[2], app);
    render_input(frame, layout[3], app);

    let help = Paragraph::new("PLACE WORD ROW COL H/V [BLANKS] | SWAP | PASS | UNDO | REDO | EXIT")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout[4]);
}

fn render_scoreboard(frame: &mut Frame, area: Rect, players: &[Player], current: usize) {
    let items: Vec<ListItem> = players
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let marker = if i == current { "> " } else { "  " };
            let style = if i == current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Span::styled(
                format!("{}{:<12} {:>4}", marker, p.name, p.score),
                style,
            ))
        })
        .collect();
    let widget = List::new(items).block(Block::default().borders(Borders::ALL).title("Scores"));
    frame.render_widget(widget, area);
}

fn render_rack(frame: &mut Frame, area: Rect, player: &Player) {
    let mut spans = Vec::new();
    for tile in player.rack.tiles() {
        spans.push(Span::styled(
            format!("{}", tile.letter()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{} ", tile.value()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let title = format!("Rack ({})", player.name);
    let widget =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

fn render_feed(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .feed
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();
    let widget = List::new(items).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(format!("> {}", app.input)),
        Line::from(Span::styled(
            app.feedback.clone(),
            Style::default().fg(Color::Red),
        )),
    ];
    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Command"));
    frame.render_widget(widget, area);
}
