//! 错误类型定义

use std::fmt;

use thiserror::Error;

/// 非法落子的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// 索引超出 0-8
    OutOfRange,
    /// 格子已被占据
    Occupied,
    /// 游戏已结束
    GameOver,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfRange => "cell index out of range (0-8)",
            InvalidMoveReason::Occupied => "cell is already occupied",
            InvalidMoveReason::GameOver => "game is already over",
        };
        f.write_str(text)
    }
}

/// 对局规则错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// 无效的落子
    #[error("Invalid move at cell {index}: {reason}")]
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },

    /// 没有可落子的空格
    #[error("No legal move: board is full")]
    NoLegalMove,
}

impl GameError {
    /// 构造非法落子错误
    pub fn invalid_move(index: usize, reason: InvalidMoveReason) -> Self {
        GameError::InvalidMove { index, reason }
    }
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
