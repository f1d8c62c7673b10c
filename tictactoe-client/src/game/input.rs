//! 输入处理
//!
//! 把终端输入的一行文字翻译成各界面的命令

use tictactoe_core::CELL_COUNT;

/// 主菜单命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// 双人对战
    PlayLocal,
    /// 人机对战
    PlayComputer,
    /// 打开设置
    OpenSettings,
    /// 退出
    Quit,
}

/// 对局命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// 点击格子（0-8）
    Cell(usize),
    /// 重新开始
    Restart,
    /// 返回主菜单
    BackToMenu,
    /// 退出
    Quit,
}

/// 设置界面命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCommand {
    CycleDifficulty,
    ToggleStartingPlayer,
    CycleTheme,
    /// 保存并返回
    Save,
    /// 不保存返回
    Back,
}

pub fn parse_menu(line: &str) -> Option<MenuCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "p" | "play" => Some(MenuCommand::PlayLocal),
        "2" | "c" | "computer" => Some(MenuCommand::PlayComputer),
        "3" | "s" | "settings" => Some(MenuCommand::OpenSettings),
        "q" | "quit" | "exit" => Some(MenuCommand::Quit),
        _ => None,
    }
}

/// 格子用 1-9 输入，转换为 0-8 索引
///
/// 超出范围的数字原样转换，由引擎拒绝
pub fn parse_game(line: &str) -> Option<GameCommand> {
    let line = line.trim().to_ascii_lowercase();
    match line.as_str() {
        "r" | "restart" => return Some(GameCommand::Restart),
        "m" | "menu" => return Some(GameCommand::BackToMenu),
        "q" | "quit" | "exit" => return Some(GameCommand::Quit),
        _ => {}
    }

    let number: usize = line.parse().ok()?;
    if number == 0 {
        return Some(GameCommand::Cell(CELL_COUNT));
    }
    Some(GameCommand::Cell(number - 1))
}

pub fn parse_settings(line: &str) -> Option<SettingsCommand> {
    match line.trim().to_ascii_lowercase().as_str() {
        "d" | "difficulty" => Some(SettingsCommand::CycleDifficulty),
        "s" | "start" => Some(SettingsCommand::ToggleStartingPlayer),
        "t" | "theme" => Some(SettingsCommand::CycleTheme),
        "w" | "save" => Some(SettingsCommand::Save),
        "b" | "back" => Some(SettingsCommand::Back),
        _ => None,
    }
}
