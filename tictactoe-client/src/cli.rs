//! 命令行参数

use std::path::PathBuf;

use clap::Parser;
use tictactoe_core::Difficulty;

use crate::settings::{GameSettings, LogLevel, StartingPlayer};
use crate::theme::ThemeName;

/// Terminal tic-tac-toe with a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to <config dir>/tictactoe/settings.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Computer difficulty: easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    /// Let the computer make the first move
    #[arg(long)]
    pub computer_starts: bool,

    /// Color theme: sunset, ocean, forest or mono
    #[arg(long)]
    pub theme: Option<ThemeName>,

    /// Delay before the computer moves, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// 命令行参数覆盖已加载的设置（只影响本次运行）
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if self.computer_starts {
            settings.starting_player = StartingPlayer::Computer;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.move_delay_ms = delay_ms;
        }
        if let Some(log_level) = self.log_level {
            settings.log_level = log_level;
        }
    }
}
