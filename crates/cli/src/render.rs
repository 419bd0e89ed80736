//! Console wording for game log events.

use doom_core::{Difficulty, LogEvent, Map, RunOutcome, Side};

/// Text for one log event, or `None` for events the console keeps quiet
/// (bot bookkeeping, spawns, the human's own turn marker).
pub fn render_event(event: &LogEvent) -> Option<String> {
    let text = match event {
        LogEvent::TurnStarted { side: Side::Bot, .. } => "Bot's turn".to_string(),
        LogEvent::Moved { .. } => "Success".to_string(),
        LogEvent::MoveBlocked { .. } => "Fail".to_string(),
        LogEvent::PickedUp { gold, .. } => format!("Success. Gold owned: {gold}"),
        LogEvent::PickupFailed { gold, .. } => format!("Fail. Gold owned: {gold}"),
        LogEvent::Looked { side: Side::Human, view } => view.join("\n"),
        LogEvent::GoldToWin { gold } => format!("Gold to win: {gold}"),
        LogEvent::GoldOwned { gold } => format!("Gold owned: {gold}"),
        LogEvent::InvalidCommand => "Fail, not a valid command.".to_string(),
        LogEvent::GameOver(outcome) => outcome_message(*outcome).to_string(),
        LogEvent::TurnStarted { side: Side::Human, .. }
        | LogEvent::Looked { side: Side::Bot, .. }
        | LogEvent::Waited { .. }
        | LogEvent::Quit { .. }
        | LogEvent::ObjectiveChanged { .. }
        | LogEvent::ObjectiveCleared
        | LogEvent::GoldSpawned { .. } => return None,
    };
    Some(text)
}

pub fn outcome_message(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::HumanEscaped => "WIN. You escaped the Dungeon of Doom!",
        RunOutcome::BotEscaped => "LOSE. The bot collected enough gold and won!",
        RunOutcome::Caught => "LOSE. The bot caught you!",
        RunOutcome::Forfeit => "LOSE. You quit the game early, better luck next time!",
    }
}

pub fn difficulty_label(difficulty: Difficulty) -> String {
    match difficulty {
        Difficulty::Normal => difficulty.label().to_string(),
        Difficulty::Impossible => format!(
            "{} - This difficulty is just for demonstration, since this bot cheats by seeing without looking.",
            difficulty.label()
        ),
    }
}

pub fn describe_map(map: &Map) -> [String; 2] {
    [
        format!("The name of the map is: {}.", map.name),
        format!("To win this map you must pick up {} gold.", map.win_gold),
    ]
}

#[cfg(test)]
mod tests {
    use doom_core::{ObjectiveKind, Pos};

    use super::*;

    #[test]
    fn human_facing_events_use_console_wording() {
        let cases = [
            (LogEvent::Moved { side: Side::Human, to: Pos::new(1, 1) }, "Success"),
            (LogEvent::MoveBlocked { side: Side::Human, target: Pos::new(0, 1) }, "Fail"),
            (LogEvent::PickedUp { side: Side::Human, gold: 2 }, "Success. Gold owned: 2"),
            (LogEvent::PickupFailed { side: Side::Human, gold: 0 }, "Fail. Gold owned: 0"),
            (LogEvent::GoldToWin { gold: 3 }, "Gold to win: 3"),
            (LogEvent::GoldOwned { gold: 1 }, "Gold owned: 1"),
            (LogEvent::InvalidCommand, "Fail, not a valid command."),
            (LogEvent::TurnStarted { side: Side::Bot, turn: 1 }, "Bot's turn"),
            (LogEvent::GameOver(RunOutcome::Caught), "LOSE. The bot caught you!"),
        ];
        for (event, expected) in cases {
            assert_eq!(render_event(&event).as_deref(), Some(expected), "{event:?}");
        }
    }

    #[test]
    fn human_look_prints_one_row_per_line() {
        let view = ["#####", "#####", "##P..", "##...", "##..."].map(String::from).to_vec();
        let text = render_event(&LogEvent::Looked { side: Side::Human, view }).expect("rendered");
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().nth(2), Some("##P.."));
    }

    #[test]
    fn bot_bookkeeping_stays_quiet() {
        let quiet = [
            LogEvent::Looked { side: Side::Bot, view: Vec::new() },
            LogEvent::ObjectiveChanged {
                kind: ObjectiveKind::CollectGold,
                target: Pos::new(2, 2),
                path_len: 2,
            },
            LogEvent::ObjectiveCleared,
            LogEvent::GoldSpawned { pos: Pos::new(3, 3) },
            LogEvent::TurnStarted { side: Side::Human, turn: 0 },
        ];
        for event in quiet {
            assert_eq!(render_event(&event), None, "{event:?}");
        }
    }

    #[test]
    fn only_escape_is_a_win_message() {
        assert!(outcome_message(RunOutcome::HumanEscaped).starts_with("WIN"));
        for outcome in [RunOutcome::BotEscaped, RunOutcome::Caught, RunOutcome::Forfeit] {
            assert!(outcome_message(outcome).starts_with("LOSE"));
        }
    }
}
