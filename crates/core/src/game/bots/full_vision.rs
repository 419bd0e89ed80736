//! Full-vision bot: stateless, re-plans over the whole map every turn.

use super::*;
use crate::game::objective::ObjectivePolicy;
use crate::game::pathfinding::{SearchWindow, find_nearest_objective};

/// First matching rule wins: escape, catch, pick up, then step along the
/// shortest route to the nearest objective.
pub fn full_vision_turn(map: &Map, me: &Player) -> Action {
    let here = map.tile_at(me.pos);
    let enough = me.has_enough_gold(map.win_gold);

    if enough && here.is_exit() {
        return Action::Quit;
    }
    if let Some(opponent) = map.enterable_neighbors(me.pos).find(|tile| tile.has_human()) {
        return Action::Move(opponent.pos);
    }
    if !enough && here.has_gold() {
        return Action::Pickup;
    }

    let policy = ObjectivePolicy::for_bot(me.gold, map.win_gold);
    match find_nearest_objective(map, me.pos, SearchWindow::Unbounded, |tile| {
        policy.is_objective(tile)
    }) {
        Some(path) => Action::Move(path.first_step()),
        None => Action::Wait,
    }
}
