// Domain layer - Core business logic
pub mod domain;

// Application layer - Grid store, simulation engine, control facade
pub mod application;

// Ambient configuration
pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid};
pub use application::{GameState, GridStore, SimulationEngine};
pub use config::Settings;
