//! Which tiles a bot wants to walk toward, and what kind of goal each one is.

use crate::state::Tile;
use crate::types::{ObjectiveKind, Side};

/// Objective rules evaluated for one player at the current gold count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectivePolicy {
    pub gold: u32,
    pub win_gold: u32,
    pub opponent: Side,
}

impl ObjectivePolicy {
    pub fn for_bot(gold: u32, win_gold: u32) -> Self {
        Self { gold, win_gold, opponent: Side::Human }
    }

    pub fn has_enough_gold(self) -> bool {
        self.gold >= self.win_gold
    }

    pub fn is_objective(self, tile: &Tile) -> bool {
        self.classify(tile).is_some()
    }

    /// Exit beats gold beats the opponent when one tile qualifies twice.
    pub fn classify(self, tile: &Tile) -> Option<ObjectiveKind> {
        let enough = self.has_enough_gold();
        if enough && tile.is_exit() {
            Some(ObjectiveKind::ReachExit)
        } else if !enough && tile.has_gold() {
            Some(ObjectiveKind::CollectGold)
        } else if tile.has_player(self.opponent) {
            Some(ObjectiveKind::ChaseOpponent)
        } else {
            None
        }
    }
}
