use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use tracing::{debug, info, warn};

use crate::state::{GameState, Map, Player, Tile};
use crate::types::*;

pub mod bots;
mod commands;
mod hash;
pub mod look;
pub mod objective;
pub mod pathfinding;
mod spawn;
#[cfg(test)]
mod test_support;

use bots::{BotBrain, BotMemory};

/// Alternating-turn engine. The human moves first; the outcome is evaluated
/// after every turn and no turn may be played once it is set.
pub struct Game {
    seed: u64,
    difficulty: Difficulty,
    turn: u64,
    rng: ChaCha8Rng,
    state: GameState,
    brain: BotBrain,
    log: Vec<LogEvent>,
    to_move: Side,
    quit_requested: bool,
    outcome: Option<RunOutcome>,
}

impl Game {
    /// Places both players on random spawn tiles drawn from the seeded RNG.
    pub fn new(map: Map, difficulty: Difficulty, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut map = map;

        let human = spawn::random_player_spawn(&map, &mut rng)
            .ok_or(GameError::NoSpawnTile(Side::Human))?;
        map.place_player(Side::Human, human);
        let bot =
            spawn::random_player_spawn(&map, &mut rng).ok_or(GameError::NoSpawnTile(Side::Bot))?;
        map.place_player(Side::Bot, bot);

        Ok(Self::assemble(map, difficulty, seed, rng, human, bot))
    }

    /// Like `new`, with caller-chosen spawn tiles. Both must be valid spawn points.
    pub fn with_spawns(
        map: Map,
        difficulty: Difficulty,
        seed: u64,
        human: Pos,
        bot: Pos,
    ) -> Result<Self, GameError> {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut map = map;

        for (side, pos) in [(Side::Human, human), (Side::Bot, bot)] {
            if !map.tile(pos).is_some_and(Tile::is_player_spawn_point) {
                return Err(GameError::InvalidSpawn { side, pos });
            }
            map.place_player(side, pos);
        }

        Ok(Self::assemble(map, difficulty, seed, rng, human, bot))
    }

    fn assemble(
        map: Map,
        difficulty: Difficulty,
        seed: u64,
        rng: ChaCha8Rng,
        human: Pos,
        bot: Pos,
    ) -> Self {
        debug!(map = %map.name, ?difficulty, seed, ?human, ?bot, "game assembled");
        Self {
            seed,
            difficulty,
            turn: 0,
            rng,
            state: GameState { map, human: Player::new(human), bot: Player::new(bot) },
            brain: BotBrain::for_difficulty(difficulty),
            log: Vec::new(),
            to_move: Side::Human,
            quit_requested: false,
            outcome: None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn map(&self) -> &Map {
        &self.state.map
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn bot_memory(&self) -> Option<&BotMemory> {
        self.brain.memory()
    }

    /// Plays one human turn. Every command, including an unknown one, spends it.
    pub fn play_human(&mut self, command: Command) -> Result<(), GameError> {
        self.begin_turn(Side::Human)?;
        let win_gold = self.state.map.win_gold;
        let action = match command {
            Command::Hello => {
                self.log.push(LogEvent::GoldToWin { gold: win_gold });
                None
            }
            Command::Gold => {
                self.log.push(LogEvent::GoldOwned { gold: self.state.human.gold });
                None
            }
            Command::Pickup => Some(Action::Pickup),
            Command::Look => Some(Action::Look),
            Command::Quit => Some(Action::Quit),
            Command::Move(direction) => Some(Action::Move(self.state.human.pos.step(direction))),
            Command::Unknown => {
                self.log.push(LogEvent::InvalidCommand);
                None
            }
        };
        if let Some(action) = action {
            self.execute(Side::Human, action);
        }
        self.end_turn();
        Ok(())
    }

    /// Lets the bot brain pick and execute one action.
    pub fn play_bot(&mut self) -> Result<(), GameError> {
        self.begin_turn(Side::Bot)?;
        let before = self.brain.objective_summary();
        let action = self.brain.act(&self.state.map, &self.state.bot, &mut self.rng);
        self.log_objective_change(before);
        self.execute(Side::Bot, action);
        self.end_turn();
        Ok(())
    }

    fn begin_turn(&mut self, side: Side) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::GameOver);
        }
        if self.to_move != side {
            return Err(GameError::NotYourTurn(side));
        }
        self.log.push(LogEvent::TurnStarted { side, turn: self.turn });
        Ok(())
    }

    fn log_objective_change(&mut self, before: Option<(ObjectiveKind, Pos, u32)>) {
        let after = self.brain.objective_summary();
        let same_goal = match (before, after) {
            (Some((kind_a, target_a, _)), Some((kind_b, target_b, _))) => {
                kind_a == kind_b && target_a == target_b
            }
            (None, None) => true,
            _ => false,
        };
        if same_goal {
            return;
        }
        match after {
            Some((kind, target, path_len)) => {
                self.log.push(LogEvent::ObjectiveChanged { kind, target, path_len });
            }
            None => self.log.push(LogEvent::ObjectiveCleared),
        }
    }

    fn execute(&mut self, side: Side, action: Action) {
        match action {
            Action::Move(target) => self.move_player(side, target),
            Action::Pickup => self.pick_up(side),
            Action::Look => {
                let view = look::look_view(&self.state.map, self.state.player(side).pos);
                self.log.push(LogEvent::Looked { side, view });
            }
            Action::Quit => {
                self.quit_requested = true;
                self.log.push(LogEvent::Quit { side });
            }
            Action::Wait => self.log.push(LogEvent::Waited { side }),
        }
    }

    fn move_player(&mut self, side: Side, target: Pos) {
        let from = self.state.player(side).pos;
        debug_assert_eq!(from.manhattan(target), 1, "moves are single orthogonal steps");
        if !self.state.map.can_move_to(target) {
            self.log.push(LogEvent::MoveBlocked { side, target });
            return;
        }
        self.state.map.remove_player(side, from);
        self.state.map.place_player(side, target);
        self.state.player_mut(side).pos = target;
        self.log.push(LogEvent::Moved { side, to: target });
    }

    fn pick_up(&mut self, side: Side) {
        let pos = self.state.player(side).pos;
        if self.state.map.remove_gold(pos) {
            let player = self.state.player_mut(side);
            player.gold += 1;
            let gold = player.gold;
            self.log.push(LogEvent::PickedUp { side, gold });
        } else {
            let gold = self.state.player(side).gold;
            self.log.push(LogEvent::PickupFailed { side, gold });
        }
    }

    fn end_turn(&mut self) {
        self.turn += 1;
        self.to_move = self.to_move.opponent();

        if let Some(outcome) = self.evaluate_outcome() {
            info!(?outcome, turn = self.turn, "game over");
            self.outcome = Some(outcome);
            self.log.push(LogEvent::GameOver(outcome));
            return;
        }

        if !self.enough_gold_remains() {
            self.spawn_gold();
        }
    }

    fn evaluate_outcome(&self) -> Option<RunOutcome> {
        let GameState { map, human, bot } = &self.state;
        if human.pos == bot.pos {
            return Some(RunOutcome::Caught);
        }
        if !self.quit_requested {
            return None;
        }
        let escaped = |player: &Player| {
            map.tile_at(player.pos).is_exit() && player.has_enough_gold(map.win_gold)
        };
        if escaped(human) {
            Some(RunOutcome::HumanEscaped)
        } else if escaped(bot) {
            Some(RunOutcome::BotEscaped)
        } else {
            Some(RunOutcome::Forfeit)
        }
    }

    /// Either player could still win by looting alone.
    fn enough_gold_remains(&self) -> bool {
        let GameState { map, human, bot } = &self.state;
        map.gold_on_map() + human.gold.min(bot.gold) >= map.win_gold
    }

    fn spawn_gold(&mut self) {
        match spawn::random_gold_spawn(&self.state.map, &mut self.rng) {
            Some(pos) => {
                self.state.map.add_gold(pos);
                self.log.push(LogEvent::GoldSpawned { pos });
            }
            None => warn!(turn = self.turn, "no free floor tile for replacement gold"),
        }
    }
}
