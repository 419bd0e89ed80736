use doom_core::{Command, Difficulty, Direction, Game, Map, Side, parse_map};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn arena() -> Map {
    parse_map(
        "name arena\nwin 3\n###############\n#G....#......E#\n#.##.....##.#.#\n#....#G#......#\n#.#.......#.#G#\n#...##..G.....#\n###############",
    )
    .expect("valid map")
}

fn check_invariants(game: &Game, seed: u64) -> Result<(), String> {
    let state = game.state();
    for side in [Side::Human, Side::Bot] {
        let player = state.player(side);
        let tile = state
            .map
            .tile(player.pos)
            .ok_or_else(|| format!("Invariant failed: {side:?} off the map on seed {seed}"))?;
        if !tile.can_enter() {
            return Err(format!("Invariant failed: {side:?} inside a wall on seed {seed}"));
        }
        if !tile.has_player(side) {
            return Err(format!("Invariant failed: {side:?} flag missing on seed {seed}"));
        }
    }
    let flagged = state.map.tiles().filter(|tile| tile.has_gold()).count();
    if flagged != state.map.gold_on_map() as usize {
        return Err(format!("Invariant failed: gold count drifted on seed {seed}"));
    }
    if let Some(memory) = game.bot_memory()
        && let Some(objective) = &memory.objective
    {
        for pair in objective.path.steps().windows(2) {
            if pair[0].manhattan(pair[1]) != 1 {
                return Err(format!("Invariant failed: remembered path jumps on seed {seed}"));
            }
        }
    }
    Ok(())
}

fn run_fuzz_simulation(
    game_seed: u64,
    input_seed: u64,
    difficulty: Difficulty,
    max_turns: u64,
) -> Result<(), String> {
    let mut game = Game::new(arena(), difficulty, game_seed).map_err(|e| e.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);
    let commands = [
        Command::Move(Direction::North),
        Command::Move(Direction::East),
        Command::Move(Direction::South),
        Command::Move(Direction::West),
        Command::Pickup,
        Command::Look,
        Command::Gold,
        Command::Unknown,
    ];

    while !game.is_over() && game.turn() < max_turns {
        let played = match game.to_move() {
            Side::Human => game.play_human(choose(&mut rng, &commands)),
            Side::Bot => game.play_bot(),
        };
        played.map_err(|e| format!("turn rejected on seed {game_seed}: {e}"))?;
        check_invariants(&game, game_seed)?;
    }

    Ok(())
}

#[test]
fn fuzz_game_simulation() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(24));
    let seeds = (any::<u64>(), any::<u64>(), any::<bool>());

    runner
        .run(&seeds, |(game_seed, input_seed, impossible)| {
            let difficulty = if impossible { Difficulty::Impossible } else { Difficulty::Normal };
            run_fuzz_simulation(game_seed, input_seed, difficulty, 600)
                .map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
