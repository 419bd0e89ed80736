//! The console command loop: read a line per human turn, run bot turns, and
//! print whatever new log events each turn produced.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use doom_core::{Command, Game, InputJournal, RunOutcome, Side};
use tracing::{debug, info};

use crate::render::render_event;

/// Plays until the game ends and returns the outcome. Every human command is
/// appended to `journal`. End of input counts as `quit`.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
    journal: &mut InputJournal,
) -> Result<RunOutcome> {
    let mut printed = game.log().len();
    let mut line = String::new();

    loop {
        if let Some(outcome) = game.outcome() {
            info!(?outcome, turn = game.turn(), "session finished");
            return Ok(outcome);
        }

        match game.to_move() {
            Side::Human => {
                write!(out, "Your turn: ")?;
                out.flush()?;
                line.clear();
                let command = if input.read_line(&mut line).context("failed to read command")? == 0 {
                    writeln!(out)?;
                    debug!("input closed, quitting");
                    Command::Quit
                } else {
                    Command::parse(&line)
                };
                journal.append_command(command);
                game.play_human(command).context("human turn rejected")?;
            }
            Side::Bot => game.play_bot().context("bot turn rejected")?,
        }

        for event in &game.log()[printed..] {
            if let Some(text) = render_event(event) {
                writeln!(out, "{text}")?;
            }
        }
        printed = game.log().len();
    }
}
