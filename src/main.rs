mod bullets;
mod collision;
mod config;
mod constants;
mod entities;
mod formation;
mod game;
mod input;
mod rendering;
mod round;
mod sprites;
mod terminal_io;
mod types;

use std::env;
use std::io::{self, Write};
use crossterm::{
    cursor::{Hide, Show},
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal::{disable_raw_mode, enable_raw_mode, size, supports_keyboard_enhancement},
};
use log::{error, info, warn};

use crate::config::LaunchConfig;
use crate::constants::{GAME_HEIGHT, GAME_WIDTH, LOG_FILE};
use crate::rendering::{GameGrid, OutputTarget, ScreenBuffer};
use crate::round::Round;
use crate::terminal_io::SimulatedInput;

fn main() -> io::Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;
    info!("Starting space-invaders application.");

    let args: Vec<String> = env::args().collect();
    let config = LaunchConfig::from_args(&args);
    let debug_mode_active = config.debug_mode_active;
    let grid = GameGrid::new(GAME_WIDTH, GAME_HEIGHT);

    let mut stdout_target;
    let mut simulated_input: Option<SimulatedInput> = None;
    let mut release_events = false;

    if debug_mode_active {
        stdout_target = OutputTarget::ScreenBuffer(ScreenBuffer::new(grid.columns(), grid.rows()));
        simulated_input = Some(SimulatedInput::demo_script());
    } else {
        info!("Attempting to enable raw mode.");
        enable_raw_mode().map_err(|e| { error!("Failed to enable raw mode: {}", e); e })?;
        stdout_target = OutputTarget::Stdout(io::stdout());
        let (width, height) = size().map_err(|e| { error!("Failed to get terminal size: {}", e); e })?;
        info!("Terminal size: {}x{}", width, height);
        if width < grid.columns() || height < grid.rows() {
            warn!("Terminal smaller than {}x{}, the playfield will be clipped.", grid.columns(), grid.rows());
        }

        release_events = supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            stdout_target
                .execute_other_command(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
                .map_err(|e| { error!("Failed to enable key release events: {}", e); e })?;
            info!("Key release events enabled.");
        }

        grid.clear_screen_manual(&mut stdout_target, width, height)
            .map_err(|e| { error!("Failed to clear screen manually: {}", e); e })?;
        stdout_target.execute_other_command(Hide).map_err(|e| { error!("Failed to hide cursor: {}", e); e })?;
        stdout_target.flush().map_err(|e| { error!("Failed to flush stdout after initial clear: {}", e); e })?;
    }

    let mut round = Round::new(config, stdout_target, simulated_input, release_events);
    let result = round.run();
    match &result {
        Ok(outcome) => info!("Round finished: {:?}", outcome),
        Err(e) => error!("Round aborted: {}", e),
    }

    if !debug_mode_active {
        let stdout_target = &mut round.stdout_target;
        if release_events {
            stdout_target.execute_other_command(PopKeyboardEnhancementFlags)
                .map_err(|e| { error!("Failed to restore keyboard flags: {}", e); e })?;
        }
        stdout_target.execute_other_command(Show).map_err(|e| { error!("Failed to show cursor on exit: {}", e); e })?;
        disable_raw_mode().map_err(|e| { error!("Failed to disable raw mode on exit: {}", e); e })?;
    }

    info!("Exiting application.");
    result.map(|_| ())
}
