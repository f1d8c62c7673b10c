//! 电脑落子策略
//!
//! 分层启发式：先赢 -> 再堵 -> 占中心 -> 占角 -> 随机。
//! 不做博弈树搜索，困难难度依然可以被击败。

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tictactoe_core::{Board, GameError, GameState, Player, Result, CENTER, CORNERS};
use tracing::debug;

use crate::tactics::Tactics;

// 重导出 Difficulty 以便外部使用
pub use tictactoe_core::Difficulty;

/// AI 配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 是否检查一步杀和一步堵
    pub use_tactics: bool,
    /// 是否优先占中心
    pub take_center: bool,
    /// 是否优先占角
    pub prefer_corners: bool,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                difficulty,
                use_tactics: false,
                take_center: false,
                prefer_corners: false,
            },
            Difficulty::Medium => Self {
                difficulty,
                use_tactics: true,
                take_center: true,
                prefer_corners: false,
            },
            Difficulty::Hard => Self {
                difficulty,
                use_tactics: true,
                take_center: true,
                prefer_corners: true,
            },
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::Medium)
    }
}

/// 选中落子的依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// 一步取胜
    Win,
    /// 堵住对手
    Block,
    /// 占中心
    Center,
    /// 随机占角
    Corner,
    /// 随机空格
    Random,
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    last_decision: Option<Decision>,
}

impl AiEngine {
    /// 创建新的 AI 引擎（随机种子）
    pub fn new(config: AiConfig) -> Self {
        Self::with_seed(config, rand::random())
    }

    /// 使用固定种子创建（结果可复现）
    pub fn with_seed(config: AiConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_decision: None,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    /// 为 `player` 选择落子格
    ///
    /// 棋盘已满时返回 `NoLegalMove`
    pub fn choose_move(&mut self, board: &Board, player: Player) -> Result<usize> {
        let (index, decision) = self.select(board, player).ok_or(GameError::NoLegalMove)?;
        self.last_decision = Some(decision);

        debug!(
            "AI({:?}) 为 {} 选择 {}，依据: {:?}",
            self.config.difficulty, player, index, decision
        );

        Ok(index)
    }

    /// 为当前走子方选择落子格，终局时返回 `NoLegalMove`
    pub fn play(&mut self, state: &GameState) -> Result<usize> {
        if !state.is_active() {
            return Err(GameError::NoLegalMove);
        }
        self.choose_move(state.board(), state.current_turn())
    }

    fn select(&mut self, board: &Board, player: Player) -> Option<(usize, Decision)> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        if self.config.use_tactics {
            if let Some(index) = Tactics::winning_move(board, player) {
                return Some((index, Decision::Win));
            }
            if let Some(index) = Tactics::blocking_move(board, player) {
                return Some((index, Decision::Block));
            }
        }

        if self.config.take_center && board.is_cell_empty(CENTER) {
            return Some((CENTER, Decision::Center));
        }

        if self.config.prefer_corners {
            let corners: Vec<usize> = CORNERS
                .iter()
                .copied()
                .filter(|&index| board.is_cell_empty(index))
                .collect();
            if let Some(&index) = corners.choose(&mut self.rng) {
                return Some((index, Decision::Corner));
            }
        }

        empty
            .choose(&mut self.rng)
            .map(|&index| (index, Decision::Random))
    }

    /// 上一次落子的依据
    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }
}

/// 按难度为当前走子方计算一步
pub fn computer_move(state: &GameState, difficulty: Difficulty) -> Result<usize> {
    AiEngine::from_difficulty(difficulty).play(state)
}
