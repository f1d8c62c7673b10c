//! 规则常量定义

/// 棋盘边长
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 中心格索引
pub const CENTER: usize = 4;

/// 四个角的索引（左上、右上、左下、右下）
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// 电脑落子前的默认等待时间（毫秒）
pub const COMPUTER_MOVE_DELAY_MS: u64 = 500;
