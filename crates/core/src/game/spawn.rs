use rand_chacha::rand_core::Rng;

use super::*;

/// Uniform pick among the current player spawn tiles.
pub(super) fn random_player_spawn<R: Rng + ?Sized>(map: &Map, rng: &mut R) -> Option<Pos> {
    pick(&map.player_spawn_points(), rng)
}

/// Uniform pick among empty floor tiles; exits never receive gold.
pub(super) fn random_gold_spawn<R: Rng + ?Sized>(map: &Map, rng: &mut R) -> Option<Pos> {
    pick(&map.gold_spawn_points(), rng)
}

fn pick<R: Rng + ?Sized>(candidates: &[Pos], rng: &mut R) -> Option<Pos> {
    if candidates.is_empty() {
        return None;
    }
    let idx = (rng.next_u64() % candidates.len() as u64) as usize;
    Some(candidates[idx])
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn gold_never_spawns_on_exits_or_players() {
        let mut map = grid(1, &["#####", "#E..#", "#####"]);
        map.place_player(Side::Human, Pos::new(1, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..32 {
            assert_eq!(random_gold_spawn(&map, &mut rng), Some(Pos::new(1, 3)));
        }
    }

    #[test]
    fn players_may_spawn_on_exits() {
        let mut map = grid(1, &["####", "#E.#", "####"]);
        map.place_player(Side::Human, Pos::new(1, 2));
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(random_player_spawn(&map, &mut rng), Some(Pos::new(1, 1)));
    }

    #[test]
    fn full_map_has_no_spawn() {
        let mut map = grid(1, &["###", "#G#", "###"]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(random_player_spawn(&map, &mut rng), None);
        map.remove_gold(Pos::new(1, 1));
        map.place_player(Side::Bot, Pos::new(1, 1));
        assert_eq!(random_gold_spawn(&map, &mut rng), None);
    }
}
