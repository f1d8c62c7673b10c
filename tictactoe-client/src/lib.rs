//! 井字棋终端客户端
//!
//! 菜单、对局、设置三个界面，规则全部交给 `tictactoe-core` 和 `tictactoe-ai`

pub mod app;
pub mod cli;
pub mod game;
pub mod settings;
pub mod theme;
pub mod ui;

pub use app::App;

/// 界面状态
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum Screen {
    /// 主菜单
    #[default]
    Menu,
    /// 游戏中
    Playing,
    /// 设置
    Settings,
    /// 退出
    Exit,
}
