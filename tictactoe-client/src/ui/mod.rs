//! 终端界面
//!
//! 只负责把状态画成文字，不包含任何规则

mod board;
mod menu;

pub use board::{describe_line, Renderer};
pub use menu::{game_help, menu_text, settings_text};
