use thiserror::Error;
use tracing::debug;

use crate::game::Game;
use crate::journal::InputJournal;
use crate::state::Map;
use crate::types::{GameError, RunOutcome, Side};

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("journal was recorded on map {expected:?}, not {found:?}")]
    MapMismatch { expected: String, found: String },
    #[error("could not start the recorded game: {0}")]
    Start(GameError),
    #[error("recorded input {seq} was rejected: {source}")]
    Rejected { seq: u64, source: GameError },
    #[error("bot turn failed during replay: {0}")]
    BotTurn(GameError),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    /// `None` when the journal ends before the game does.
    pub final_outcome: Option<RunOutcome>,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

/// Replays a journal against a fresh game. Bot turns are recomputed from the
/// seeded engine; inputs left over after the game ends are ignored.
pub fn replay_to_end(map: &Map, journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    if journal.map_name != map.name {
        return Err(ReplayError::MapMismatch {
            expected: journal.map_name.clone(),
            found: map.name.clone(),
        });
    }

    let mut game =
        Game::new(map.clone(), journal.difficulty, journal.seed).map_err(ReplayError::Start)?;
    let mut inputs = journal.inputs.iter();

    while !game.is_over() {
        match game.to_move() {
            Side::Bot => game.play_bot().map_err(ReplayError::BotTurn)?,
            Side::Human => {
                let Some(record) = inputs.next() else {
                    break;
                };
                game.play_human(record.command)
                    .map_err(|source| ReplayError::Rejected { seq: record.seq, source })?;
            }
        }
    }

    let leftover = inputs.count();
    if leftover > 0 {
        debug!(leftover, "journal inputs after game over were ignored");
    }

    Ok(ReplayResult {
        final_outcome: game.outcome(),
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.turn(),
    })
}
