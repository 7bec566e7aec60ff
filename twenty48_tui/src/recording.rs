use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use twenty48::{Direction, Exponent, GameState, Grid, Status};

/// Collects the moves of one game and writes them as a JSON file at the end.
pub struct Recorder {
    directory: PathBuf,
    recording: GameRecording,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub seed: u64,
    pub size: usize,
    pub goal_exponent: Exponent,
    pub initial: Grid,
    pub moves: Vec<RecordedMove>,
    pub status: Status,
}

/// A move that changed the board, and the board after the new tile spawned.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordedMove {
    pub direction: Direction,
    pub spawned_at: Option<(usize, usize)>,
    pub grid: Grid,
}

impl Recorder {
    pub fn new<R>(directory: PathBuf, seed: u64, game: &GameState<R>) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            directory,
            recording: GameRecording {
                seed,
                size: game.grid().size(),
                goal_exponent: game.goal_exponent(),
                initial: game.snapshot(),
                moves: Vec::new(),
                status: Status::Playing,
            },
        })
    }

    pub fn record_move(
        &mut self,
        direction: Direction,
        spawned_at: Option<(usize, usize)>,
        grid: &Grid,
    ) {
        self.recording.moves.push(RecordedMove {
            direction,
            spawned_at,
            grid: grid.clone(),
        });
    }

    /// Write `game_<seed>.json` into the directory and return its path.
    pub fn write_game_recording(mut self, status: Status) -> anyhow::Result<PathBuf> {
        self.recording.status = status;
        let filepath = self
            .directory
            .join(format!("game_{}.json", self.recording.seed));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &self.recording)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(filepath)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn missing_directory_is_an_error() {
        let game = GameState::new(11, 4, StdRng::seed_from_u64(1)).unwrap();
        let dir = std::env::temp_dir().join("twenty48-recording-does-not-exist");
        assert!(Recorder::new(dir, 1, &game).is_err());
    }

    #[test]
    fn writes_moves_and_status() {
        let dir = std::env::temp_dir().join(format!("twenty48-recording-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut game = GameState::new(11, 4, StdRng::seed_from_u64(5)).unwrap();
        let initial = game.snapshot();
        let mut recorder = Recorder::new(dir.clone(), 5, &game).unwrap();
        for direction in Direction::ALL {
            let outcome = game.play(direction).unwrap();
            if outcome.changed {
                recorder.record_move(direction, outcome.spawned_at, game.grid());
            }
        }
        let num_moves = recorder.recording.moves.len();

        let path = recorder.write_game_recording(Status::Playing).unwrap();
        assert_eq!(path, dir.join("game_5.json"));
        let recording: GameRecording =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(recording.seed, 5);
        assert_eq!(recording.size, 4);
        assert_eq!(recording.goal_exponent, 11);
        assert_eq!(recording.initial, initial);
        assert_eq!(recording.moves.len(), num_moves);
        assert_eq!(recording.status, Status::Playing);
        if let Some(last) = recording.moves.last() {
            assert_eq!(&last.grid, game.grid());
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
