//! 对局状态
//!
//! 一局棋的完整状态：棋盘、走子方、终局判定

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::error::{GameError, InvalidMoveReason, Result};
use crate::mark::Player;
use crate::rules::{evaluate, GameStatus};

/// 完整的对局状态
///
/// 所有操作返回新状态，不修改自身
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// 当前走子方（终局后保持为最后落子的一方）
    current_turn: Player,
    /// 开局时的先手方（重置时沿用）
    starting_player: Player,
    status: GameStatus,
    /// 最后一步落子的格子
    last_move: Option<usize>,
    /// 已落子数
    move_count: u8,
}

impl GameState {
    /// 创建新对局
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::empty(),
            current_turn: starting_player,
            starting_player,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    /// 从已有棋盘创建状态（状态由棋盘评估得出）
    pub fn from_board(board: Board, current_turn: Player) -> Self {
        let status = evaluate(&board);
        let move_count = (board.count(Player::X) + board.count(Player::O)) as u8;
        Self {
            board,
            current_turn,
            starting_player: current_turn,
            status,
            last_move: None,
            move_count,
        }
    }

    /// 重置为空棋盘，先手方不变
    pub fn reset(&self) -> Self {
        Self::new(self.starting_player)
    }

    /// 当前玩家落子
    ///
    /// 落子后评估局面：仍在进行则换手，终局则不换手
    pub fn play_move(&self, index: usize) -> Result<GameState> {
        if self.status.is_terminal() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::GameOver));
        }

        let board = self.board.apply_move(index, self.current_turn)?;
        let status = evaluate(&board);
        let current_turn = if status.is_terminal() {
            self.current_turn
        } else {
            self.current_turn.opponent()
        };

        debug!("{} 落子于 {}，局面: {:?}", self.current_turn, index, status);

        Ok(Self {
            board,
            current_turn,
            starting_player: self.starting_player,
            status,
            last_move: Some(index),
            move_count: self.move_count + 1,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// 棋局是否仍可落子
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Player::X)
    }
}
