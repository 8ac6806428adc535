mod engine;
mod game_state;
mod grid_store;

pub use engine::{SimulationEngine, RunState, MIN_RATE, MAX_RATE, DEFAULT_RATE};
pub use game_state::GameState;
pub use grid_store::GridStore;
