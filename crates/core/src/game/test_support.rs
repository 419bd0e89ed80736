//! Shared test fixtures for the `game` submodule test suites.

use super::*;
use crate::map_file::parse_map;
use crate::state::Map;

pub(super) const FIXTURE_WIN_GOLD: u32 = 3;

/// Parses fixture rows drawn with the map-file glyphs.
pub(super) fn grid(win_gold: u32, rows: &[&str]) -> Map {
    let text = format!("name fixture\nwin {win_gold}\n{}", rows.join("\n"));
    parse_map(&text).expect("fixture rows form a rectangular map")
}

pub(super) fn open_room(width: usize, height: usize) -> Map {
    Map::open_room("fixture", FIXTURE_WIN_GOLD, width, height)
}

/// Open room holding exactly the winning amount of gold along its bottom row,
/// so no replacement gold spawns while nobody has picked any up.
pub(super) fn stocked_room(width: usize, height: usize) -> Map {
    let mut map = open_room(width, height);
    for col in 1..=FIXTURE_WIN_GOLD as i32 {
        map.add_gold(Pos::new(height as i32 - 2, col));
    }
    map
}

/// Origin walled on north, west and south; gold two steps east through the gap.
pub(super) fn walled_pocket_fixture() -> (Map, Pos) {
    let mut map = open_room(7, 5);
    let origin = Pos::new(2, 2);
    map.set_tile(Pos::new(1, 2), TileKind::Wall);
    map.set_tile(Pos::new(3, 2), TileKind::Wall);
    map.set_tile(Pos::new(2, 1), TileKind::Wall);
    map.add_gold(Pos::new(2, 4));
    (map, origin)
}

/// Gold sealed on all four sides, far from the origin.
pub(super) fn sealed_vault_fixture() -> (Map, Pos) {
    let mut map = open_room(7, 7);
    let vault = Pos::new(4, 4);
    for direction in Direction::ALL {
        map.set_tile(vault.step(direction), TileKind::Wall);
    }
    map.add_gold(vault);
    (map, Pos::new(1, 1))
}

pub(super) fn corridor_maze_fixture() -> (Map, Pos) {
    let map = grid(
        FIXTURE_WIN_GOLD,
        &[
            "#########",
            "#...#...#",
            "#.#.#.#.#",
            "#.#...#.#",
            "#.#####.#",
            "#.......#",
            "#########",
        ],
    );
    (map, Pos::new(1, 1))
}

/// A game on `map` with both players placed explicitly.
pub(super) fn game_with(map: Map, difficulty: Difficulty, human: Pos, bot: Pos) -> Game {
    Game::with_spawns(map, difficulty, 7, human, bot).expect("fixture spawns are valid")
}

pub(super) fn last_event(game: &Game) -> &LogEvent {
    game.log().last().expect("game log has events")
}
