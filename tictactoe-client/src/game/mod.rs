//! 游戏逻辑模块
//!
//! 管理对局状态和命令分发

mod input;
mod state;

pub use input::*;
pub use state::*;

use crate::Screen;

/// 命令处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// 下一个界面
    pub next_screen: Screen,
    /// 需要提示给玩家的信息
    pub notice: Option<String>,
}

impl CommandResult {
    fn stay(notice: Option<String>) -> Self {
        Self {
            next_screen: Screen::Playing,
            notice,
        }
    }
}

/// 处理对局命令
pub fn handle_game_command(game: &mut ClientGame, command: GameCommand) -> CommandResult {
    match command {
        GameCommand::Cell(index) => {
            let notice = match game.handle_cell(index) {
                Ok(CellOutcome::Played) => None,
                Ok(CellOutcome::Occupied) => Some(format!("Cell {} is already taken", index + 1)),
                Ok(CellOutcome::GameOver) => Some("The game is over, press r to restart".to_string()),
                Ok(CellOutcome::NotYourTurn) => Some("Wait for the computer to move".to_string()),
                Err(e) => {
                    tracing::warn!("拒绝落子: {}", e);
                    Some(e.to_string())
                }
            };
            CommandResult::stay(notice)
        }
        GameCommand::Restart => {
            game.restart();
            CommandResult::stay(None)
        }
        GameCommand::BackToMenu => CommandResult {
            next_screen: Screen::Menu,
            notice: None,
        },
        GameCommand::Quit => CommandResult {
            next_screen: Screen::Exit,
            notice: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_command_plays() {
        let mut game = ClientGame::local_pvp();
        let result = handle_game_command(&mut game, GameCommand::Cell(4));
        assert_eq!(result.next_screen, Screen::Playing);
        assert_eq!(result.notice, None);
        assert_eq!(game.state().last_move(), Some(4));
    }

    #[test]
    fn test_occupied_cell_notice() {
        let mut game = ClientGame::local_pvp();
        handle_game_command(&mut game, GameCommand::Cell(4));
        let result = handle_game_command(&mut game, GameCommand::Cell(4));
        assert_eq!(result.notice.as_deref(), Some("Cell 5 is already taken"));
    }

    #[test]
    fn test_out_of_range_notice() {
        let mut game = ClientGame::local_pvp();
        let result = handle_game_command(&mut game, GameCommand::Cell(9));
        assert_eq!(
            result.notice.as_deref(),
            Some("Invalid move at cell 9: cell index out of range (0-8)")
        );
    }

    #[test]
    fn test_navigation() {
        let mut game = ClientGame::local_pvp();
        handle_game_command(&mut game, GameCommand::Cell(0));

        let result = handle_game_command(&mut game, GameCommand::Restart);
        assert_eq!(result.next_screen, Screen::Playing);
        assert_eq!(game.state().move_count(), 0);

        assert_eq!(
            handle_game_command(&mut game, GameCommand::BackToMenu).next_screen,
            Screen::Menu
        );
        assert_eq!(
            handle_game_command(&mut game, GameCommand::Quit).next_screen,
            Screen::Exit
        );
    }
}
