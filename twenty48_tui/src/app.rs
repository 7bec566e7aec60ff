use rand::Rng;
use ratatui::prelude::{Backend, Terminal};
use tracing::{debug, info};
use twenty48::{tile_value, GameState, Status};

use crate::keys::{read_command, wait_for_key, Command};
use crate::recording::Recorder;
use crate::ui::ui;

/// Run the game until it is won, stuck, or the player quits.
///
/// Returns the status the game ended in, which is [`Status::Playing`] if
/// the player quit.
pub fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut GameState<R>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<Status> {
    loop {
        terminal.draw(|frame| ui(frame, game))?;

        let status = game.status();
        if status != Status::Playing {
            info!(
                ?status,
                highest = tile_value(game.highest_exponent()),
                "Game over"
            );
            wait_for_key()?;
            return Ok(status);
        }

        match read_command()? {
            Some(Command::Quit) => {
                info!("Player quit");
                return Ok(Status::Playing);
            }
            Some(Command::Move(direction)) => {
                let outcome = game.play(direction)?;
                if !outcome.changed {
                    debug!(%direction, "Move did not change the board");
                    continue;
                }
                if let Some(recorder) = recorder {
                    recorder.record_move(direction, outcome.spawned_at, game.grid());
                }
            }
            // Redraw, e.g. after a resize
            None => {}
        }
    }
}
