//! Snapshot hash over everything that influences the next turn: both players,
//! gold placement, whose move it is and the bounded-vision bot's memory.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(match self.to_move {
            Side::Human => 0,
            Side::Bot => 1,
        });
        hasher.write_u8(u8::from(self.quit_requested));
        for player in [&self.state.human, &self.state.bot] {
            hasher.write_i32(player.pos.row);
            hasher.write_i32(player.pos.col);
            hasher.write_u32(player.gold);
        }
        hasher.write_u32(self.state.map.gold_on_map());
        for tile in self.state.map.tiles().filter(|tile| tile.has_gold()) {
            hasher.write_i32(tile.pos.row);
            hasher.write_i32(tile.pos.col);
        }
        if let Some(memory) = self.brain.memory() {
            hasher.write_u32(memory.turns_since_look);
            if let Some(objective) = &memory.objective {
                hasher.write_u8(objective.kind as u8);
                let current = objective.path.current();
                let target = objective.path.objective();
                hasher.write_i32(current.row);
                hasher.write_i32(current.col);
                hasher.write_i32(target.row);
                hasher.write_i32(target.col);
            }
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn hash_tracks_state_not_history() {
        let a = game_with(stocked_room(8, 8), Difficulty::Normal, Pos::new(1, 1), Pos::new(6, 6));
        let b = game_with(stocked_room(8, 8), Difficulty::Normal, Pos::new(1, 1), Pos::new(6, 6));
        assert_eq!(a.snapshot_hash(), b.snapshot_hash());

        let moved = game_with(stocked_room(8, 8), Difficulty::Normal, Pos::new(1, 2), Pos::new(6, 6));
        assert_ne!(a.snapshot_hash(), moved.snapshot_hash());
    }

    #[test]
    fn a_spent_turn_changes_the_hash() {
        let mut game =
            game_with(stocked_room(8, 8), Difficulty::Normal, Pos::new(1, 1), Pos::new(6, 6));
        let before = game.snapshot_hash();
        game.play_human(Command::Hello).expect("turn");
        assert_ne!(before, game.snapshot_hash());
    }
}
