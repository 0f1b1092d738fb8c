use std::io;
use std::time::Instant;
use crossterm::event;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::LaunchConfig;
use crate::constants::*;
use crate::game::{Game, RoundState};
use crate::input::KeyboardInput;
use crate::rendering::{GameGrid, OutputTarget, Renderer};
use crate::sprites::{BACKGROUND_COLOR, TEXT_COLOR};
use crate::terminal_io::SimulatedInput;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
    Quit,
}

/// Drives one round from the first frame to the end of the terminal screen.
pub struct Round {
    pub stdout_target: OutputTarget,
    simulated_input: Option<SimulatedInput>,
    config: LaunchConfig,
    release_events: bool,
}

impl Round {
    pub fn new(
        config: LaunchConfig,
        stdout_target: OutputTarget,
        simulated_input: Option<SimulatedInput>,
        release_events: bool,
    ) -> Self {
        Round { stdout_target, simulated_input, config, release_events }
    }

    pub fn run(&mut self) -> io::Result<Outcome> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut game = Game::new(GAME_WIDTH, GAME_HEIGHT);
        let mut grid = GameGrid::new(GAME_WIDTH, GAME_HEIGHT);
        let mut keyboard = KeyboardInput::new(self.release_events);
        let mut frame_count = 0;

        info!("Round started.");
        let outcome = loop {
            let frame_start = Instant::now();
            if keyboard.state(frame_count).quit_requested {
                info!("Quit requested on frame {}.", frame_count);
                break Outcome::Quit;
            }
            if self.config.max_frames.is_some_and(|max| frame_count >= max) {
                info!("Frame limit {} reached.", frame_count);
                break Outcome::Quit;
            }

            game.render(&mut grid);
            self.present(&grid)?;
            self.poll_input(&mut keyboard, frame_count, frame_start + FRAME_DURATION)?;

            match game.update(keyboard.state(frame_count), &mut rng) {
                RoundState::Running => {}
                RoundState::Won => break Outcome::Won,
                RoundState::Lost => break Outcome::Lost,
            }
            frame_count += 1;
        };

        if outcome != Outcome::Quit {
            self.show_terminal_screen(outcome, game.score, &mut keyboard, frame_count)?;
        }
        Ok(outcome)
    }

    /// Feeds every event that arrives before `deadline` into `keyboard`.
    fn poll_input(&mut self, keyboard: &mut KeyboardInput, frame_count: u64, deadline: Instant) -> io::Result<()> {
        if let Some(sim_input) = &mut self.simulated_input {
            if sim_input.poll(frame_count)? {
                keyboard.handle_event(&sim_input.read()?, frame_count);
            }
            return Ok(());
        }

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            if event::poll(remaining).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
                let current_event = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
                keyboard.handle_event(&current_event, frame_count);
            }
        }
    }

    fn present(&mut self, grid: &GameGrid) -> io::Result<()> {
        if let OutputTarget::ScreenBuffer(sb) = &mut self.stdout_target {
            sb.clear();
        }
        grid.render(&mut self.stdout_target).map_err(|e| { error!("Failed to draw frame: {}", e); e })?;
        if let OutputTarget::ScreenBuffer(sb) = &self.stdout_target {
            sb.print_to_log();
        }
        Ok(())
    }

    fn show_terminal_screen(
        &mut self,
        outcome: Outcome,
        score: u32,
        keyboard: &mut KeyboardInput,
        mut frame_count: u64,
    ) -> io::Result<()> {
        info!("Displaying {:?} screen.", outcome);
        let message = if outcome == Outcome::Won { "YOU WIN!" } else { "GAME OVER" };
        let score_msg = format!("SCORE {}", score);
        let mut grid = GameGrid::new(GAME_WIDTH, GAME_HEIGHT);
        let started = Instant::now();

        loop {
            let frame_start = Instant::now();
            grid.clear(BACKGROUND_COLOR);
            grid.draw_text(message, centred_x(message), GAME_HEIGHT / 2, TEXT_COLOR);
            grid.draw_text(&score_msg, centred_x(&score_msg), GAME_HEIGHT / 2 - 2 * CELL_HEIGHT, TEXT_COLOR);
            self.present(&grid)?;
            self.poll_input(keyboard, frame_count, frame_start + FRAME_DURATION)?;
            frame_count += 1;

            if keyboard.state(frame_count).quit_requested || started.elapsed() >= self.config.terminal_screen {
                break;
            }
        }
        info!("Terminal screen closed.");
        Ok(())
    }
}

fn centred_x(text: &str) -> i32 {
    (GAME_WIDTH - text.len() as i32 * CELL_WIDTH) / 2
}
