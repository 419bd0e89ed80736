use std::collections::{BTreeMap, VecDeque};

use doom_core::{Map, Pos, SearchWindow, Tile, TileKind, find_nearest_objective};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn random_map(seed: u64, width: usize, height: usize) -> (Map, Pos) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut map = Map::open_room("random", 1, width, height);
    for row in 1..height as i32 - 1 {
        for col in 1..width as i32 - 1 {
            match rng.next_u64() % 8 {
                0 | 1 => map.set_tile(Pos::new(row, col), TileKind::Wall),
                2 => {
                    map.add_gold(Pos::new(row, col));
                }
                _ => {}
            }
        }
    }
    let origin = Pos::new(1, 1);
    map.set_tile(origin, TileKind::Floor);
    (map, origin)
}

fn bfs_distances(map: &Map, origin: Pos, window: SearchWindow) -> BTreeMap<Pos, u32> {
    let mut distances = BTreeMap::from([(origin, 0)]);
    let mut queue = VecDeque::from([origin]);
    while let Some(current) = queue.pop_front() {
        let next = distances[&current] + 1;
        for tile in map.enterable_neighbors(current) {
            if window.contains(tile.pos) && !distances.contains_key(&tile.pos) {
                distances.insert(tile.pos, next);
                queue.push_back(tile.pos);
            }
        }
    }
    distances
}

fn check_search(map: &Map, origin: Pos, window: SearchWindow) -> Result<(), String> {
    let distances = bfs_distances(map, origin, window);
    let nearest = distances
        .iter()
        .filter(|(pos, _)| **pos != origin && map.tile_at(**pos).has_gold())
        .map(|(_, distance)| *distance)
        .min();

    match (find_nearest_objective(map, origin, window, Tile::has_gold), nearest) {
        (None, None) => Ok(()),
        (Some(path), Some(expected)) => {
            if path.distance() != expected {
                return Err(format!("found distance {} but nearest is {expected}", path.distance()));
            }
            if path.origin() != origin || !map.tile_at(path.objective()).has_gold() {
                return Err("path does not run from origin to gold".to_string());
            }
            for pair in path.steps().windows(2) {
                if pair[0].manhattan(pair[1]) != 1 || !map.can_move_to(pair[1]) {
                    return Err(format!("illegal step {:?} -> {:?}", pair[0], pair[1]));
                }
            }
            if path.steps().iter().any(|pos| !window.contains(*pos)) {
                return Err("path leaves the search window".to_string());
            }
            Ok(())
        }
        (found, expected) => Err(format!(
            "search returned {:?} but reachable nearest is {expected:?}",
            found.map(|path| path.objective())
        )),
    }
}

#[test]
fn search_matches_breadth_first_distances() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(64));
    let cases = (any::<u64>(), 4usize..14, 4usize..14, any::<bool>());

    runner
        .run(&cases, |(seed, width, height, bounded)| {
            let (map, origin) = random_map(seed, width, height);
            let window =
                if bounded { SearchWindow::look_around(origin) } else { SearchWindow::Unbounded };
            check_search(&map, origin, window).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("objective search should return true shortest paths");
}
