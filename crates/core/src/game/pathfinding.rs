//! Uniform-cost objective search over the tile grid and the forward path it yields.
//! This module exists so both bot policies share one search primitive.
//! It does not decide what counts as an objective; callers pass that predicate in.

use std::collections::BTreeSet;

use tracing::debug;

use crate::state::{Map, Tile};
use crate::types::Pos;

/// Half-width of the bounded-vision window (a 5x5 square).
pub const LOOK_RADIUS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchWindow {
    Unbounded,
    /// Inclusive square around `center`: `|d_row| <= radius && |d_col| <= radius`.
    Square { center: Pos, radius: u32 },
}

impl SearchWindow {
    pub fn look_around(center: Pos) -> Self {
        SearchWindow::Square { center, radius: LOOK_RADIUS }
    }

    pub fn contains(self, pos: Pos) -> bool {
        match self {
            SearchWindow::Unbounded => true,
            SearchWindow::Square { center, radius } => center.chebyshev(pos) <= radius,
        }
    }
}

/// Discovery record. `parent` indexes the search arena; seeds next to the
/// origin have no parent.
#[derive(Clone, Copy, Debug)]
struct PathNode {
    pos: Pos,
    distance: u32,
    parent: Option<usize>,
}

/// Frontier key. Ordered by distance, then by arena index so equal-distance
/// entries pop in discovery order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance: u32,
    node: usize,
}

/// Origin-to-objective route with a traversal cursor. `steps[0]` is the origin,
/// the last step is the objective tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectivePath {
    steps: Vec<Pos>,
    cursor: usize,
}

impl ObjectivePath {
    /// Builds a path from explicit steps; `None` unless there is at least one move.
    pub fn from_steps(steps: Vec<Pos>) -> Option<Self> {
        if steps.len() < 2 {
            return None;
        }
        Some(Self { steps, cursor: 0 })
    }

    fn from_discovery(nodes: &[PathNode], found: usize, origin: Pos) -> Self {
        let mut steps = Vec::with_capacity(nodes[found].distance as usize + 1);
        let mut current = Some(found);
        while let Some(idx) = current {
            steps.push(nodes[idx].pos);
            current = nodes[idx].parent;
        }
        steps.push(origin);
        steps.reverse();
        Self { steps, cursor: 0 }
    }

    pub fn origin(&self) -> Pos {
        self.steps[0]
    }

    pub fn objective(&self) -> Pos {
        self.steps[self.steps.len() - 1]
    }

    /// Hop count from origin to objective.
    pub fn distance(&self) -> u32 {
        (self.steps.len() - 1) as u32
    }

    pub fn steps(&self) -> &[Pos] {
        &self.steps
    }

    /// The first move off the origin, independent of the cursor.
    pub fn first_step(&self) -> Pos {
        self.steps[1]
    }

    pub fn current(&self) -> Pos {
        self.steps[self.cursor]
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.steps.len()
    }

    /// Moves the cursor one step toward the objective and returns that tile.
    ///
    /// # Panics
    /// When the cursor already sits on the objective. Callers check `has_next`.
    pub fn advance(&mut self) -> Pos {
        assert!(self.has_next(), "path cursor advanced past its objective");
        self.cursor += 1;
        self.steps[self.cursor]
    }
}

/// Finds the nearest tile (by hop count over enterable tiles) satisfying
/// `is_objective`, never testing the origin itself.
pub fn find_nearest_objective<IsObjective>(
    map: &Map,
    origin: Pos,
    window: SearchWindow,
    is_objective: IsObjective,
) -> Option<ObjectivePath>
where
    IsObjective: Fn(&Tile) -> bool,
{
    search(map, origin, window, is_objective, |_, _| {})
}

fn search<IsObjective, OnSettle>(
    map: &Map,
    origin: Pos,
    window: SearchWindow,
    is_objective: IsObjective,
    mut on_settle: OnSettle,
) -> Option<ObjectivePath>
where
    IsObjective: Fn(&Tile) -> bool,
    OnSettle: FnMut(Pos, u32),
{
    let mut nodes: Vec<PathNode> = Vec::new();
    let mut frontier = BTreeSet::new();
    let mut visited = BTreeSet::new();
    visited.insert(origin);

    for tile in map.enterable_neighbors(origin) {
        if window.contains(tile.pos) {
            enqueue(&mut nodes, &mut frontier, PathNode { pos: tile.pos, distance: 1, parent: None });
        }
    }

    while let Some(entry) = frontier.pop_first() {
        let node = nodes[entry.node];
        // Dominated duplicates stay queued and are dropped here.
        if !visited.insert(node.pos) {
            continue;
        }
        on_settle(node.pos, node.distance);

        if is_objective(map.tile_at(node.pos)) {
            let path = ObjectivePath::from_discovery(&nodes, entry.node, origin);
            debug!(
                ?origin,
                objective = ?path.objective(),
                distance = path.distance(),
                settled = visited.len(),
                "objective search settled"
            );
            return Some(path);
        }

        for neighbor in map.enterable_neighbors(node.pos) {
            if visited.contains(&neighbor.pos) || !window.contains(neighbor.pos) {
                continue;
            }
            enqueue(
                &mut nodes,
                &mut frontier,
                PathNode {
                    pos: neighbor.pos,
                    distance: node.distance + 1,
                    parent: Some(entry.node),
                },
            );
        }
    }

    debug!(?origin, settled = visited.len(), "objective search exhausted");
    None
}

fn enqueue(nodes: &mut Vec<PathNode>, frontier: &mut BTreeSet<FrontierEntry>, node: PathNode) {
    frontier.insert(FrontierEntry { distance: node.distance, node: nodes.len() });
    nodes.push(node);
}
