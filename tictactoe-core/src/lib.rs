//! 井字棋共享规则库
//!
//! 包含:
//! - 棋盘、标记、玩家等核心数据结构
//! - 落子校验
//! - 胜负与和棋判定（固定 8 条连线）
//! - 对局状态与换手
//! - 电脑难度定义

mod board;
mod constants;
mod difficulty;
mod error;
mod mark;
mod rules;
mod state;

pub use board::Board;
pub use constants::*;
pub use difficulty::Difficulty;
pub use error::{GameError, InvalidMoveReason, Result};
pub use mark::{Mark, Player};
pub use rules::{evaluate, line_marks, GameStatus, LineOrientation, WinningLine, WINNING_LINES};
pub use state::GameState;
