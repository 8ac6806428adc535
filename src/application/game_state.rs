use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::{GridStore, SimulationEngine, MAX_RATE, MIN_RATE};
use crate::config::SimulationConfig;
use crate::domain::Grid;

/// GameState orchestrates the simulation.
/// This is the application layer the controls talk to: it owns the store
/// and the engine and maps each control onto them.
pub struct GameState {
    store: GridStore,
    engine: SimulationEngine,
    random_density: f64,
    generation: u64,
    /// Whether the rules overlay is showing
    pub show_rules: bool,
}

impl GameState {
    /// Create new game state with an empty board
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            store: GridStore::new(),
            engine: SimulationEngine::new(config.rate.clamp(MIN_RATE, MAX_RATE)),
            random_density: config.random_density,
            generation: 0,
            show_rules: false,
        }
    }

    /// Snapshot of the current generation
    pub fn grid(&self) -> Arc<Grid> {
        self.store.get()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn rate(&self) -> u32 {
        self.engine.rate()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start/Stop control
    pub fn toggle_running(mut self) -> Self {
        if self.engine.is_running() {
            self.engine.stop();
            info!(generation = self.generation, "simulation stopped");
        } else {
            self.engine.start();
            info!(generation = self.generation, rate = self.engine.rate(), "simulation started");
        }
        self
    }

    /// Clear grid, stop autoplay and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.store.clear();
        self.engine.stop();
        self.generation = 0;
        info!("grid cleared");
        self
    }

    /// Reseed the grid; autoplay keeps its current state
    pub fn randomize(mut self) -> Self {
        self.store.randomize(self.random_density);
        self.generation = 0;
        info!(population = self.store.current().population(), "grid randomized");
        self
    }

    /// Next Step control, ignored while running
    pub fn next_step(mut self) -> Self {
        if self.engine.step_once(&mut self.store) {
            self.generation += 1;
            debug!(generation = self.generation, "manual step");
        }
        self
    }

    /// Flip one cell (cell click)
    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        self.store.toggle_cell(row, col);
    }

    /// Set simulation speed, clamped to the slider range
    pub fn set_rate(&mut self, rate: u32) {
        self.engine.set_rate(rate.clamp(MIN_RATE, MAX_RATE));
    }

    /// Adjust simulation speed by `delta` generations per second
    pub fn adjust_rate(mut self, delta: i32) -> Self {
        let rate = self.engine.rate().saturating_add_signed(delta);
        self.set_rate(rate);
        self
    }

    /// Show or hide the rules overlay
    pub fn toggle_rules(mut self) -> Self {
        self.show_rules = !self.show_rules;
        self
    }

    /// Poll the step timer with the time since the last frame
    pub fn update(mut self, frame_time: Duration) -> Self {
        let produced = self.engine.advance(&mut self.store, frame_time);
        if produced > 0 {
            self.generation += u64::from(produced);
            debug!(
                generation = self.generation,
                population = self.store.current().population(),
                "generation advanced"
            );
        }
        self
    }
}
