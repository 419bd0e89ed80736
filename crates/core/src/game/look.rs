//! Text views of the grid: the 5x5 look window and full-map dumps.

use super::*;
use crate::game::pathfinding::LOOK_RADIUS;

/// Rows of the 5x5 window centred on `center`, top to bottom. Out-of-bounds
/// cells read as wall.
pub fn look_view(map: &Map, center: Pos) -> Vec<String> {
    let radius = LOOK_RADIUS as i32;
    (-radius..=radius)
        .map(|d_row| {
            (-radius..=radius)
                .map(|d_col| {
                    let pos = Pos::new(center.row + d_row, center.col + d_col);
                    map.tile(pos).map_or(TileKind::Wall.glyph(), Tile::glyph)
                })
                .collect()
        })
        .collect()
}

pub fn render_map(map: &Map) -> Vec<String> {
    (0..map.height() as i32)
        .map(|row| {
            (0..map.width() as i32).map(|col| map.tile_at(Pos::new(row, col)).glyph()).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn corner_view_pads_with_walls() {
        let mut map = open_room(5, 5);
        map.place_player(Side::Human, Pos::new(1, 1));
        map.add_gold(Pos::new(1, 2));
        map.place_player(Side::Bot, Pos::new(2, 1));

        let view = look_view(&map, Pos::new(1, 1));
        assert_eq!(view, vec!["#####", "#####", "##PG.", "##B..", "##..."]);
    }

    #[test]
    fn players_draw_over_gold_and_exits() {
        let mut map = open_room(7, 7);
        let center = Pos::new(3, 3);
        map.set_tile(Pos::new(3, 4), TileKind::Exit);
        map.add_gold(center);
        map.place_player(Side::Human, center);

        let view = look_view(&map, center);
        assert_eq!(view.len(), 5);
        assert!(view.iter().all(|row| row.chars().count() == 5));
        assert_eq!(view[2], "..PE.");
    }

    #[test]
    fn full_render_matches_the_grid() {
        let map = grid(1, &["###", "#E#", "#G#", "###"]);
        assert_eq!(render_map(&map), vec!["###", "#E#", "#G#", "###"]);
    }
}
