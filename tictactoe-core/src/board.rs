//! 棋盘状态

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{GameError, InvalidMoveReason, Result};
use crate::mark::{Mark, Player};
use crate::rules::evaluate;

/// 棋盘
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 棋盘，索引为 row * 3 + col
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// 从标记数组创建棋盘（不检查 X/O 数量）
    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 获取指定格子的标记
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// 获取标记（索引必须合法）
    pub(crate) fn mark_at(&self, index: usize) -> Mark {
        self.cells[index]
    }

    /// 全部格子
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// 指定格子是否为空（越界视为非空）
    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index).is_some_and(|mark| mark.is_empty())
    }

    /// 所有空格索引（升序）
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_empty())
    }

    /// 指定玩家的棋子数
    pub fn count(&self, player: Player) -> usize {
        let mark = Mark::from(player);
        self.cells.iter().filter(|&&m| m == mark).count()
    }

    /// 落子，返回新棋盘
    ///
    /// 越界、格子非空或棋局已结束时返回 `InvalidMove`，原棋盘不变
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board> {
        if index >= CELL_COUNT {
            return Err(GameError::invalid_move(index, InvalidMoveReason::OutOfRange));
        }
        if evaluate(self).is_terminal() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::GameOver));
        }
        if !self.cells[index].is_empty() {
            return Err(GameError::invalid_move(index, InvalidMoveReason::Occupied));
        }

        let mut next = self.clone();
        next.cells[index] = Mark::from(player);
        Ok(next)
    }

    /// 按行获取标记
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|m| m.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::Mark::{Empty as E, O, X};

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.count(Player::X), 0);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::empty();
        let next = board.apply_move(4, Player::X).unwrap();

        assert_eq!(next.get(4), Some(Mark::X));
        // 原棋盘不变
        assert_eq!(board, Board::empty());
        // 其它格子不变
        for index in (0..9).filter(|&i| i != 4) {
            assert_eq!(next.get(index), Some(Mark::Empty));
        }
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let board = Board::empty();
        let err = board.apply_move(9, Player::X).unwrap_err();
        assert_eq!(err, GameError::invalid_move(9, InvalidMoveReason::OutOfRange));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::from_marks([X, E, E, E, E, E, E, E, E]);
        let before = board.clone();

        for player in [Player::X, Player::O] {
            let err = board.apply_move(0, player).unwrap_err();
            assert_eq!(err, GameError::invalid_move(0, InvalidMoveReason::Occupied));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_after_win() {
        let board = Board::from_marks([X, X, X, O, O, E, E, E, E]);
        let err = board.apply_move(5, Player::O).unwrap_err();
        assert_eq!(err, GameError::invalid_move(5, InvalidMoveReason::GameOver));
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::empty();
        assert_eq!(board.get(9), None);
        assert!(!board.is_cell_empty(42));
    }

    #[test]
    fn test_count_and_full() {
        let board = Board::from_marks([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert_eq!(board.count(Player::X), 5);
        assert_eq!(board.count(Player::O), 4);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_display() {
        let board = Board::from_marks([X, E, O, E, X, E, E, E, O]);
        assert_eq!(board.to_string(), "X|.|O\n.|X|.\n.|.|O");
    }

    #[test]
    fn test_serde_round_trip() {
        let board = Board::from_marks([X, E, O, E, X, E, E, E, O]);
        let json = serde_json::to_string(&board).unwrap();
        let parsed: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, board);
    }
}
