use crate::types::*;

/// One grid cell. Occupancy flags are independent: a tile can hold gold and
/// both players at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub pos: Pos,
    pub kind: TileKind,
    gold: bool,
    human: bool,
    bot: bool,
}

impl Tile {
    pub fn new(pos: Pos, kind: TileKind) -> Self {
        Self { pos, kind, gold: false, human: false, bot: false }
    }

    pub fn can_enter(&self) -> bool {
        self.kind != TileKind::Wall
    }

    pub fn is_exit(&self) -> bool {
        self.kind == TileKind::Exit
    }

    pub fn has_gold(&self) -> bool {
        self.gold
    }

    pub fn has_human(&self) -> bool {
        self.human
    }

    pub fn has_bot(&self) -> bool {
        self.bot
    }

    pub fn has_player(&self, side: Side) -> bool {
        match side {
            Side::Human => self.human,
            Side::Bot => self.bot,
        }
    }

    pub fn is_player_spawn_point(&self) -> bool {
        self.can_enter() && !self.gold && !self.human && !self.bot
    }

    pub fn is_gold_spawn_point(&self) -> bool {
        self.kind == TileKind::Floor && !self.gold && !self.human && !self.bot
    }

    /// Players draw over gold, gold draws over the tile itself.
    pub fn glyph(&self) -> char {
        if self.bot {
            'B'
        } else if self.human {
            'P'
        } else if self.gold {
            'G'
        } else {
            self.kind.glyph()
        }
    }

    fn set_player(&mut self, side: Side, present: bool) {
        match side {
            Side::Human => self.human = present,
            Side::Bot => self.bot = present,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Map {
    pub name: String,
    pub win_gold: u32,
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    gold_on_map: u32,
}

impl Map {
    /// Builds a map from row-major tile kinds. All rows must share the first
    /// row's width; `map_file` validates that before calling.
    pub fn new(name: impl Into<String>, win_gold: u32, rows: &[Vec<TileKind>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut tiles = Vec::with_capacity(width * height);
        for (row, kinds) in rows.iter().enumerate() {
            debug_assert_eq!(kinds.len(), width, "map rows must share one width");
            for (col, kind) in kinds.iter().enumerate() {
                tiles.push(Tile::new(Pos::new(row as i32, col as i32), *kind));
            }
        }
        Self { name: name.into(), win_gold, width, height, tiles, gold_on_map: 0 }
    }

    /// Builds a bordered open room, handy for fixtures and the arena tool.
    pub fn open_room(name: impl Into<String>, win_gold: u32, width: usize, height: usize) -> Self {
        let rows: Vec<Vec<TileKind>> = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                            TileKind::Wall
                        } else {
                            TileKind::Floor
                        }
                    })
                    .collect()
            })
            .collect();
        Self::new(name, win_gold, &rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn gold_on_map(&self) -> u32 {
        self.gold_on_map
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    pub fn is_out_of_bounds(&self, pos: Pos) -> bool {
        !self.in_bounds(pos)
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(&self.tiles[self.index(pos)])
    }

    /// Callers bounds-check first; an out-of-bounds lookup is a caller bug.
    pub fn tile_at(&self, pos: Pos) -> &Tile {
        debug_assert!(self.in_bounds(pos), "tile lookup out of bounds at {pos:?}");
        &self.tiles[self.index(pos)]
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn can_move_to(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(Tile::can_enter)
    }

    /// In-bounds, enterable 4-directional neighbours in N, E, S, W order.
    pub fn enterable_neighbors(&self, pos: Pos) -> impl Iterator<Item = &Tile> + '_ {
        Direction::ALL.into_iter().filter_map(move |direction| {
            self.tile(pos.step(direction)).filter(|tile| tile.can_enter())
        })
    }

    pub fn set_tile(&mut self, pos: Pos, kind: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx].kind = kind;
    }

    /// Returns false when the tile already held gold or cannot be reached.
    pub fn add_gold(&mut self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        let tile = &mut self.tiles[idx];
        if tile.gold || !tile.can_enter() {
            return false;
        }
        tile.gold = true;
        self.gold_on_map += 1;
        true
    }

    pub fn remove_gold(&mut self, pos: Pos) -> bool {
        if !self.in_bounds(pos) {
            return false;
        }
        let idx = self.index(pos);
        let tile = &mut self.tiles[idx];
        if !tile.gold {
            return false;
        }
        tile.gold = false;
        self.gold_on_map -= 1;
        true
    }

    pub fn place_player(&mut self, side: Side, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx].set_player(side, true);
    }

    pub fn remove_player(&mut self, side: Side, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx].set_player(side, false);
    }

    pub fn player_spawn_points(&self) -> Vec<Pos> {
        self.tiles.iter().filter(|tile| tile.is_player_spawn_point()).map(|tile| tile.pos).collect()
    }

    pub fn gold_spawn_points(&self) -> Vec<Pos> {
        self.tiles.iter().filter(|tile| tile.is_gold_spawn_point()).map(|tile| tile.pos).collect()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub gold: u32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, gold: 0 }
    }

    pub fn has_enough_gold(&self, win_gold: u32) -> bool {
        self.gold >= win_gold
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub map: Map,
    pub human: Player,
    pub bot: Player,
}

impl GameState {
    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Bot => &self.bot,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Human => &mut self.human,
            Side::Bot => &mut self.bot,
        }
    }
}
