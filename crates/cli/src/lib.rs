pub mod config;
pub mod maps;
pub mod prompt;
pub mod render;
pub mod seed;
pub mod session;

use doom_core::RunOutcome;

pub const APP_NAME: &str = "DungeonOfDoom";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Map a `RunOutcome` to its reason code string.
pub fn reason_code(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::HumanEscaped => "WIN_ESCAPED",
        RunOutcome::BotEscaped => "LOSE_BOT_ESCAPED",
        RunOutcome::Caught => "LOSE_CAUGHT",
        RunOutcome::Forfeit => "LOSE_FORFEIT",
    }
}
