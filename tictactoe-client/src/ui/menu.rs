//! 主菜单与设置界面文字

use crate::settings::GameSettings;

/// 主菜单
pub fn menu_text() -> String {
    [
        "=== Tic-Tac-Toe ===",
        "1) Play (two players)",
        "2) Play vs computer",
        "3) Settings",
        "q) Quit",
    ]
    .join("\n")
}

/// 对局中的操作提示
pub fn game_help() -> &'static str {
    "Enter a cell (1-9), r to restart, m for menu, q to quit"
}

/// 设置界面
pub fn settings_text(settings: &GameSettings) -> String {
    format!(
        "=== Settings ===\n\
         d) Difficulty:      {}\n\
         s) First to move:   {}\n\
         t) Theme:           {}\n\
         w) Save and return\n\
         b) Back without saving",
        settings.difficulty.display_name(),
        settings.starting_player.display_name(),
        settings.theme.display_name(),
    )
}
