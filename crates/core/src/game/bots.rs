//! Bot decision entry points.
//! This module routes a bot turn to the policy chosen by the difficulty.
//! It does not execute actions; the engine applies whatever `Action` comes back.

use rand_chacha::rand_core::Rng;

use super::*;

mod bounded_vision;
mod full_vision;

pub use bounded_vision::{BotMemory, LOOK_INTERVAL, Objective, bounded_vision_turn};
pub use full_vision::full_vision_turn;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BotBrain {
    BoundedVision(BotMemory),
    FullVision,
}

impl BotBrain {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Normal => BotBrain::BoundedVision(BotMemory::default()),
            Difficulty::Impossible => BotBrain::FullVision,
        }
    }

    pub fn act<R: Rng + ?Sized>(&mut self, map: &Map, me: &Player, rng: &mut R) -> Action {
        match self {
            BotBrain::BoundedVision(memory) => bounded_vision_turn(memory, map, me, rng),
            BotBrain::FullVision => full_vision_turn(map, me),
        }
    }

    pub fn memory(&self) -> Option<&BotMemory> {
        match self {
            BotBrain::BoundedVision(memory) => Some(memory),
            BotBrain::FullVision => None,
        }
    }

    /// Remembered objective kind, target tile and path length, if any.
    pub fn objective_summary(&self) -> Option<(ObjectiveKind, Pos, u32)> {
        self.memory()
            .and_then(|memory| memory.objective.as_ref())
            .map(|objective| (objective.kind, objective.path.objective(), objective.path.distance()))
    }
}
