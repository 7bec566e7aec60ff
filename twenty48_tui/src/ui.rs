use rand::Rng;
use ratatui::{prelude::*, widgets::*};
use twenty48::{tile_value, visualize_grid, Exponent, GameState, Grid, Status};

use crate::keys::KEY_HELP;

/// Space between the board and the side panel.
const GAP: u16 = 2;

/// The board plus a side panel with key bindings, progress and the
/// end-of-game message.
pub struct GameView<'a> {
    grid: &'a Grid,
    goal_display_digits: usize,
    goal_exponent: Exponent,
    highest_exponent: Exponent,
    status: Status,
}

impl<'a> GameView<'a> {
    pub fn new<R: Rng>(game: &'a GameState<R>) -> Self {
        Self {
            grid: game.grid(),
            goal_display_digits: game.goal_display_digits(),
            goal_exponent: game.goal_exponent(),
            highest_exponent: game.highest_exponent(),
            status: game.status(),
        }
    }

    fn side_panel(&self) -> Vec<Line<'static>> {
        let label_width = KEY_HELP.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 1;
        let mut lines: Vec<Line> = KEY_HELP
            .iter()
            .map(|(name, key)| Line::from(format!("{:<label_width$} {}", format!("{}:", name), key)))
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(format!(
            "{:<label_width$} {} / {}",
            "goal:",
            tile_value(self.highest_exponent),
            tile_value(self.goal_exponent)
        )));

        let message = match self.status {
            Status::Playing => None,
            Status::Won => Some("you win"),
            Status::Stuck => Some("no more moves"),
        };
        if let Some(message) = message {
            lines.push(Line::default());
            lines.push(Line::styled(message, Style::new().bold()));
            lines.push(Line::from("press any key to exit"));
        }
        lines
    }
}

impl Widget for GameView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = visualize_grid(self.grid, self.goal_display_digits);
        let board_width = board.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let board_width = u16::try_from(board_width).unwrap_or(u16::MAX);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(board_width),
                Constraint::Length(GAP),
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(board.as_str()).render(layout[0], buf);
        Paragraph::new(self.side_panel()).render(layout[2], buf);
    }
}

pub fn ui<R: Rng>(frame: &mut Frame, game: &GameState<R>) {
    frame.render_widget(GameView::new(game), frame.size());
}
