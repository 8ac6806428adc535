mod button;
mod slider;

pub use button::Button;
pub use slider::Slider;

use macroquad::prelude::Color;

use crate::application::{GameState, MAX_RATE, MIN_RATE};
use crate::domain::{COLS, ROWS};

pub const CELL_SIZE: f32 = 22.0;
pub const GRID_MARGIN: f32 = 16.0;
pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Live cells and controls share the accent blue
pub const ACCENT: Color = Color::new(0.098, 0.463, 0.824, 1.0);
pub const ACCENT_HOVER: Color = Color::new(0.259, 0.588, 0.906, 1.0);

/// Button order as returned by [`create_buttons`]
pub const START_STOP: usize = 0;
pub const CLEAR: usize = 1;
pub const RANDOM: usize = 2;
pub const NEXT_STEP: usize = 3;
pub const RULES: usize = 4;

/// The four rules shown in the overlay
pub const RULES_TEXT: [&str; 4] = [
    "Any live cell with fewer than two live neighbours dies (underpopulation).",
    "Any live cell with two or three live neighbours lives on.",
    "Any live cell with more than three live neighbours dies (overpopulation).",
    "Any dead cell with exactly three live neighbours becomes alive (reproduction).",
];

/// Width of the board in pixels
pub const fn grid_width() -> f32 {
    COLS as f32 * CELL_SIZE
}

/// Height of the board in pixels
pub const fn grid_height() -> f32 {
    ROWS as f32 * CELL_SIZE
}

/// X position where the control panel starts (right of the board)
pub const fn panel_x() -> f32 {
    GRID_MARGIN * 2.0 + grid_width()
}

/// Screen position of a cell's top-left corner
pub fn cell_origin(row: usize, col: usize) -> (f32, f32) {
    (
        GRID_MARGIN + col as f32 * CELL_SIZE,
        GRID_MARGIN + row as f32 * CELL_SIZE,
    )
}

/// Board cell under a screen position, `None` outside the board
pub fn cell_at(pos: (f32, f32)) -> Option<(usize, usize)> {
    let x = pos.0 - GRID_MARGIN;
    let y = pos.1 - GRID_MARGIN;
    if x < 0.0 || y < 0.0 {
        return None;
    }
    let (row, col) = ((y / CELL_SIZE) as usize, (x / CELL_SIZE) as usize);
    (row < ROWS && col < COLS).then_some((row, col))
}

/// Create UI buttons with standard layout.
/// The first label tracks the running state.
pub fn create_buttons(state: &GameState) -> Vec<Button> {
    let px = panel_x();
    let start_stop = if state.is_running() { "Stop" } else { "Start" };
    vec![
        Button::new(px, GRID_MARGIN, PANEL_WIDTH, BUTTON_HEIGHT, start_stop),
        Button::new(px, GRID_MARGIN + 50.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, GRID_MARGIN + 100.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, GRID_MARGIN + 150.0, PANEL_WIDTH, BUTTON_HEIGHT, "Next Step"),
        Button::new(px, GRID_MARGIN + 200.0, PANEL_WIDTH, BUTTON_HEIGHT, "Rules"),
    ]
}

/// Speed slider placed under the buttons
pub fn create_speed_slider(rate: u32) -> Slider {
    Slider::new(
        panel_x() + 10.0,
        GRID_MARGIN + 290.0,
        PANEL_WIDTH - 20.0,
        "Simulation speed",
        MIN_RATE,
        MAX_RATE,
        rate,
    )
}

/// Bounds of the rules overlay as (x, y, width, height)
pub const fn rules_panel() -> (f32, f32, f32, f32) {
    (GRID_MARGIN + 60.0, GRID_MARGIN + 60.0, grid_width() - 120.0, 260.0)
}

/// Close button in the overlay's top-right corner
pub fn rules_close_button() -> Button {
    let (x, y, width, _) = rules_panel();
    Button::new(x + width - 40.0, y + 10.0, 30.0, 30.0, "X")
}
