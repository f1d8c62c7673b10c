//! 胜负判定
//!
//! 固定的 8 条连线及终局评估

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::mark::{Mark, Player};

/// 连线方向（供界面绘制高亮）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOrientation {
    /// 横线
    Horizontal,
    /// 竖线
    Vertical,
    /// 主对角线（左上到右下）
    Diagonal,
    /// 副对角线（右上到左下）
    AntiDiagonal,
}

/// 一条获胜连线（三个格子索引）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [usize; 3]);

/// 全部连线，顺序固定：行（上到下）、列（左到右）、主对角线、副对角线
///
/// 多条连线同时成立时按此顺序取第一条
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

impl WinningLine {
    /// 获取三个格子索引
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// 是否包含指定格子
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// 连线方向
    pub fn orientation(&self) -> LineOrientation {
        let [a, b, c] = self.0;
        if b == a + 1 && c == b + 1 {
            LineOrientation::Horizontal
        } else if b == a + 3 && c == b + 3 {
            LineOrientation::Vertical
        } else if a == 0 {
            LineOrientation::Diagonal
        } else {
            LineOrientation::AntiDiagonal
        }
    }
}

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// 进行中
    InProgress,
    /// 一方获胜
    Won { winner: Player, line: WinningLine },
    /// 和棋
    Draw,
}

impl GameStatus {
    /// 是否已终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// 获胜连线
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// 评估棋盘
pub fn evaluate(board: &Board) -> GameStatus {
    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        let mark = board.mark_at(a);
        if let Some(winner) = mark.player() {
            if mark == board.mark_at(b) && mark == board.mark_at(c) {
                return GameStatus::Won { winner, line };
            }
        }
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// 连线上三格的标记
pub fn line_marks(board: &Board, line: WinningLine) -> [Mark; 3] {
    line.cells().map(|index| board.mark_at(index))
}
