use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::{self, Button, Slider};

/// Toggle the clicked cell. Clicks are honoured while running too.
pub fn handle_cell_click(state: &mut GameState, mouse_pos: (f32, f32)) {
    if state.show_rules || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((row, col)) = ui::cell_at(mouse_pos) {
        state.toggle_cell(row, col);
    }
}

/// Feed slider drags into the simulation rate
pub fn handle_speed_slider(state: &mut GameState, slider: &mut Slider, mouse_pos: (f32, f32)) {
    if let Some(rate) = slider.update(mouse_pos) {
        state.set_rate(rate);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::next_step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::I, GameState::toggle_rules),
        (KeyCode::Up, |s| s.adjust_rate(1)),
        (KeyCode::Down, |s| s.adjust_rate(-1)),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if new_state.show_rules && is_key_pressed(KeyCode::Escape) {
        return new_state.toggle_rules();
    }
    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    if state.show_rules {
        return if ui::rules_close_button().is_clicked(mouse_pos) {
            state.toggle_rules()
        } else {
            state
        };
    }

    buttons
        .iter()
        .enumerate()
        .fold(state, |s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                ui::START_STOP => s.toggle_running(),
                ui::CLEAR => s.clear(),
                ui::RANDOM => s.randomize(),
                ui::NEXT_STEP => s.next_step(),
                ui::RULES => s.toggle_rules(),
                _ => s,
            }
        })
}
