//! 一步杀/一步堵检测

use tictactoe_core::{line_marks, Board, Mark, Player, WINNING_LINES};

/// 战术检测器
pub struct Tactics;

impl Tactics {
    /// 查找能让 `player` 连成三子的空格
    ///
    /// 按连线的固定顺序检查，返回第一条"两子加一空"连线中的空格索引
    pub fn find_line_completion(board: &Board, player: Player) -> Option<usize> {
        let own = Mark::from(player);

        for line in WINNING_LINES {
            let [a, b, c] = line.cells();
            match line_marks(board, line) {
                [x, y, Mark::Empty] if x == own && y == own => return Some(c),
                [x, Mark::Empty, z] if x == own && z == own => return Some(b),
                [Mark::Empty, y, z] if y == own && z == own => return Some(a),
                _ => {}
            }
        }

        None
    }

    /// 查找 `player` 的制胜格
    pub fn winning_move(board: &Board, player: Player) -> Option<usize> {
        Self::find_line_completion(board, player)
    }

    /// 查找需要堵住对手的格子
    pub fn blocking_move(board: &Board, player: Player) -> Option<usize> {
        Self::find_line_completion(board, player.opponent())
    }
}
