pub mod game;
pub mod journal;
pub mod map_file;
pub mod replay;
pub mod state;
pub mod types;

pub use game::Game;
pub use game::bots::{BotBrain, BotMemory, Objective};
pub use game::look::{look_view, render_map};
pub use game::objective::ObjectivePolicy;
pub use game::pathfinding::{LOOK_RADIUS, ObjectivePath, SearchWindow, find_nearest_objective};
pub use journal::{InputJournal, InputRecord};
pub use map_file::{MapFileError, load_map, parse_map};
pub use replay::*;
pub use state::{GameState, Map, Player, Tile};
pub use types::*;
