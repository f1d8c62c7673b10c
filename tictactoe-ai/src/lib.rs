//! 井字棋电脑对手
//!
//! 包含:
//! - 一步杀/一步堵检测
//! - 三档难度的分层启发式落子

mod strategy;
mod tactics;

pub use strategy::{computer_move, AiConfig, AiEngine, Decision, Difficulty};
pub use tactics::Tactics;
