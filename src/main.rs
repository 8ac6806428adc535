use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use life_board::{GameState, Settings, input, rendering, ui};

#[derive(Parser, Debug)]
#[command(version, about = "Conway's Game of Life on a 20x40 board")]
struct Cli {
    /// TOML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generations per second (1-10)
    #[arg(long)]
    rate: Option<u32>,

    /// Live-cell probability used by Random (0-1)
    #[arg(long)]
    density: Option<f64>,

    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.window.title.clone(),
        window_width: settings.window.width,
        window_height: settings.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run(settings: Settings) {
    let mut state = GameState::new(&settings.simulation);
    let mut slider = ui::create_speed_slider(state.rate());

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons(&state);

        // Cell clicks go first so closing the overlay never edits the board
        input::handle_cell_click(&mut state, mouse_pos);
        if !state.show_rules {
            input::handle_speed_slider(&mut state, &mut slider, mouse_pos);
        }
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);
        slider.set_value(state.rate());

        state = state.update(Duration::from_secs_f32(get_frame_time().max(0.0)));

        clear_background(BLACK);
        rendering::draw_grid(&state.grid());
        rendering::draw_controls(&state, &ui::create_buttons(&state), &slider, mouse_pos);
        if state.show_rules {
            rendering::draw_rules_overlay(mouse_pos);
        }

        next_frame().await;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut settings = Settings::load(cli.config.as_deref())
        .context("could not load settings")?;
    if let Some(rate) = cli.rate {
        settings.simulation.rate = rate;
    }
    if let Some(density) = cli.density {
        settings.simulation.random_density = density;
    }
    let settings = settings.sanitized();

    info!(
        rate = settings.simulation.rate,
        density = settings.simulation.random_density,
        "starting"
    );

    macroquad::Window::from_config(window_conf(&settings), run(settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["life_board", "--rate", "7", "--density", "0.5"]);
        assert_eq!(cli.rate, Some(7));
        assert_eq!(cli.density, Some(0.5));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_window_conf_uses_settings() {
        let conf = window_conf(&Settings::default());
        assert_eq!(conf.window_title, "Conway's Game of Life");
        assert_eq!(conf.window_width, 1100);
    }
}
