use std::time::Duration;
use log::{info, warn};

use crate::constants::TERMINAL_SCREEN_DURATION;

/// Launch options parsed from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchConfig {
    pub debug_mode_active: bool,
    pub max_frames: Option<u64>,
    pub seed: Option<u64>,
    pub terminal_screen: Duration,
}

impl LaunchConfig {
    /// `args[0]` is the program name. Accepts `--debug`, `--seed N` and a
    /// bare frame limit; anything else is logged and ignored.
    pub fn from_args(args: &[String]) -> Self {
        let mut config = LaunchConfig {
            debug_mode_active: false,
            max_frames: None,
            seed: None,
            terminal_screen: TERMINAL_SCREEN_DURATION,
        };

        let mut rest = args.iter().skip(1);
        while let Some(arg) = rest.next() {
            match arg.as_str() {
                "--debug" => {
                    config.debug_mode_active = true;
                    config.terminal_screen = Duration::ZERO;
                    info!("Debug mode enabled.");
                }
                "--seed" => match rest.next().map(|value| value.parse::<u64>()) {
                    Some(Ok(seed)) => config.seed = Some(seed),
                    _ => warn!("--seed expects an unsigned integer, using entropy"),
                },
                other => match other.parse::<u64>() {
                    Ok(frames) => config.max_frames = Some(frames),
                    Err(_) => warn!("Ignoring unknown argument: {}", other),
                },
            }
        }
        config
    }
}
