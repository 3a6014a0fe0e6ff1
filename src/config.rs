//! Runtime configuration: environment variables, then command-line flags.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BLOCK_ROLL_LEVELS` | `--levels <path>` | built-in levels |
//! | `BLOCK_ROLL_LOG_PATH` | `--log <path>` | no session log |
//! | `BLOCK_ROLL_BELL` | | off |
//! | `BLOCK_ROLL_TICK_MS` | | 16 |
//! | | `--check` | off |

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::core::{LevelError, LevelPack};
use crate::types::TICK_MS;

pub const USAGE: &str = "usage: tui-block-roll [--levels <pack.json>] [--log <session.jsonl>] [--check]";

/// Frame interval bounds in milliseconds
const TICK_MS_MIN: u32 = 1;
const TICK_MS_MAX: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// JSON level pack; `None` plays the built-in levels
    pub levels_path: Option<String>,
    /// JSON-lines session log; `None` disables it
    pub log_path: Option<String>,
    /// Ring the terminal bell on resets and level clears
    pub bell: bool,
    /// Frame interval in milliseconds
    pub tick_ms: u32,
    /// Validate the level pack and exit without playing
    pub check_only: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels_path: None,
            log_path: None,
            bell: false,
            tick_ms: TICK_MS,
            check_only: false,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with a custom variable source.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let levels_path = get("BLOCK_ROLL_LEVELS").and_then(non_empty);
        let log_path = get("BLOCK_ROLL_LOG_PATH").and_then(non_empty);
        let bell = get("BLOCK_ROLL_BELL").map(|s| parse_flag(&s)).unwrap_or(false);
        let tick_ms = get("BLOCK_ROLL_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.clamp(TICK_MS_MIN, TICK_MS_MAX))
            .unwrap_or(TICK_MS);

        Self {
            levels_path,
            log_path,
            bell,
            tick_ms,
            check_only: false,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--levels" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --levels\n{}", USAGE))?;
                    self.levels_path = non_empty(v.clone());
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log\n{}", USAGE))?;
                    self.log_path = non_empty(v.clone());
                }
                "--check" => self.check_only = true,
                other => {
                    return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
                }
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// The configured pack, or the built-in levels.
    pub fn load_levels(&self) -> Result<LevelPack, LevelError> {
        match &self.levels_path {
            Some(path) => LevelPack::load(path),
            None => LevelPack::builtin(),
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    let s = s.trim().to_string();
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
