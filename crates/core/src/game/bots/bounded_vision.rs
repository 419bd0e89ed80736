//! Bounded-vision bot: remembers one objective found in its last 5x5 look and
//! walks the stored path toward it, looking again only every few turns.

use rand_chacha::rand_core::Rng;
use tracing::{debug, warn};

use super::*;
use crate::game::objective::ObjectivePolicy;
use crate::game::pathfinding::{ObjectivePath, SearchWindow, find_nearest_objective};

/// The bot observes once the turn counter exceeds this many turns.
pub const LOOK_INTERVAL: u32 = 2;

/// A remembered goal. Kind and path exist together or not at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub path: ObjectivePath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotMemory {
    pub objective: Option<Objective>,
    pub turns_since_look: u32,
}

impl Default for BotMemory {
    /// Starts primed so the first idle turn is a look.
    fn default() -> Self {
        Self { objective: None, turns_since_look: LOOK_INTERVAL + 1 }
    }
}

/// Runs one bounded-vision turn. The counter advances before anything else,
/// then exactly one branch fires.
pub fn bounded_vision_turn<R: Rng + ?Sized>(
    memory: &mut BotMemory,
    map: &Map,
    me: &Player,
    rng: &mut R,
) -> Action {
    memory.turns_since_look += 1;

    let kind = match memory.objective.as_mut() {
        None if memory.turns_since_look > LOOK_INTERVAL => return observe(memory, map, me),
        None => return wander(map, me.pos, rng),
        Some(objective) if objective.path.objective() != me.pos => {
            return Action::Move(objective.path.advance());
        }
        Some(objective) => objective.kind,
    };

    match kind {
        // The opponent has likely moved off the remembered tile.
        ObjectiveKind::ChaseOpponent => observe(memory, map, me),
        ObjectiveKind::CollectGold => {
            memory.objective = None;
            Action::Pickup
        }
        ObjectiveKind::ReachExit => {
            memory.objective = None;
            Action::Quit
        }
    }
}

/// Searches the 5x5 window, replaces the remembered objective with the result
/// (possibly none) and resets the counter.
fn observe(memory: &mut BotMemory, map: &Map, me: &Player) -> Action {
    memory.turns_since_look = 0;
    let policy = ObjectivePolicy::for_bot(me.gold, map.win_gold);
    memory.objective =
        find_nearest_objective(map, me.pos, SearchWindow::look_around(me.pos), |tile| {
            policy.is_objective(tile)
        })
        .and_then(|path| {
            let kind = policy.classify(map.tile_at(path.objective()))?;
            Some(Objective { kind, path })
        });
    debug!(
        at = ?me.pos,
        objective = ?memory.objective.as_ref().map(|objective| (objective.kind, objective.path.objective())),
        "bounded bot looked around"
    );
    Action::Look
}

fn wander<R: Rng + ?Sized>(map: &Map, from: Pos, rng: &mut R) -> Action {
    let options: Vec<Pos> = map.enterable_neighbors(from).map(|tile| tile.pos).collect();
    if options.is_empty() {
        warn!(at = ?from, "bounded bot is boxed in and waits");
        return Action::Wait;
    }
    let pick = (rng.next_u64() % options.len() as u64) as usize;
    Action::Move(options[pick])
}
