mod food;
mod game_state;
mod grid;
mod input;
mod loop_driver;
mod session;
mod settings;
mod snake;
mod types;

pub use food::place_food;
pub use game_state::SnakeGameState;
pub use grid::Grid;
pub use input::{InputKey, SWIPE_THRESHOLD_PX, SwipeTracker, translate_key};
pub use loop_driver::{FrameHandle, FrameOutcome, FrameScheduler, LoopDriver, RenderSink};
pub use session::{GameEvent, GameView, SnakeSession};
pub use settings::{
    DEFAULT_BOARD_TILES, DEFAULT_MOVES_PER_SECOND, MAX_BOARD_TILES, MAX_MOVES_PER_SECOND,
    MIN_BOARD_TILES, MIN_MOVES_PER_SECOND, SnakeGameSettings,
};
pub use snake::Snake;
pub use types::{DeathReason, Direction, GameMode, Point, RunState, StepOutcome};
