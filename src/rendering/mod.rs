use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::{
    self, Button, Slider, ACCENT, CELL_SIZE, GRID_MARGIN, RULES_TEXT, grid_height, grid_width, panel_x,
};

/// Draw the board: live cells filled, every cell outlined
pub fn draw_grid(grid: &Grid) {
    let grid_line_color = Color::from_rgba(60, 60, 60, 255);
    let dead_cell_color = Color::from_rgba(20, 20, 20, 255);

    draw_rectangle(GRID_MARGIN, GRID_MARGIN, grid_width(), grid_height(), dead_cell_color);

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = ui::cell_origin(row, col);
        if cell.is_alive() {
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, ACCENT);
        }
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x() - GRID_MARGIN / 2.0,
        0.0,
        ui::PANEL_WIDTH + GRID_MARGIN,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons, slider and status
pub fn draw_controls(state: &GameState, buttons: &[Button], slider: &Slider, mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    slider.draw(mouse_pos);

    let px = panel_x();
    let grid = state.grid();

    let status_color = if state.is_running() {
        Color::from_rgba(0, 220, 120, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let generation = state.generation().to_string();
    let population = grid.population().to_string();
    let speed = format!("{} gen/s", state.rate());

    let labels: [(&str, f32, f32, f32, Color); 8] = [
        ("Generation:", px, 380.0, 16.0, WHITE),
        (generation.as_str(), px, 400.0, 20.0, ACCENT),
        ("Population:", px, 430.0, 16.0, WHITE),
        (population.as_str(), px, 450.0, 20.0, ACCENT),
        ("Speed:", px, 480.0, 16.0, WHITE),
        (speed.as_str(), px, 500.0, 14.0, GRAY),
        ("Status:", px, 530.0, 16.0, WHITE),
        (if state.is_running() { "Running" } else { "Stopped" }, px, 550.0, 16.0, status_color),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    let help = [
        "Click: toggle cell",
        "Space: start/stop",
        "N: next step",
        "C: clear  R: random",
        "Up/Down: speed",
        "I: rules",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text_label(line, px, 590.0 + i as f32 * 16.0, 13.0, GRAY);
    });
}

/// Draw the rules overlay on top of everything else
pub fn draw_rules_overlay(mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::from_rgba(0, 0, 0, 160));

    let (x, y, width, height) = ui::rules_panel();
    draw_rectangle(x, y, width, height, Color::from_rgba(245, 245, 245, 255));
    draw_text_label("Rules", x + 24.0, y + 40.0, 28.0, ACCENT);

    RULES_TEXT.iter().enumerate().for_each(|(i, rule)| {
        draw_text_label(rule, x + 24.0, y + 90.0 + i as f32 * 40.0, 18.0, DARKGRAY);
    });

    ui::rules_close_button().draw(mouse_pos);
}
