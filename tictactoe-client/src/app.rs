//! 终端主循环
//!
//! 按界面读取一行输入、分发命令、输出新的画面。电脑落子在等待一段时间后执行。

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::game::{
    handle_game_command, parse_game, parse_menu, parse_settings, ClientGame, MenuCommand,
    SettingsCommand,
};
use crate::settings::GameSettings;
use crate::theme::{ColorTheme, ThemeName};
use crate::ui::{game_help, menu_text, settings_text, Renderer};
use crate::Screen;

/// 终端应用
pub struct App<R, W> {
    input: R,
    output: W,
    settings: GameSettings,
    /// 设置保存位置（None 时使用默认配置目录）
    settings_path: Option<PathBuf>,
    /// 设置界面中尚未保存的修改
    draft: Option<GameSettings>,
    renderer: Renderer,
    screen: Screen,
    game: Option<ClientGame>,
    /// 固定电脑对手的随机种子
    ai_seed: Option<u64>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, settings: GameSettings) -> Self {
        let renderer = Renderer::new(ColorTheme::from_name(settings.theme), false);
        Self {
            input,
            output,
            settings,
            settings_path: None,
            draft: None,
            renderer,
            screen: Screen::Menu,
            game: None,
            ai_seed: None,
        }
    }

    /// 设置保存位置
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.settings_path = path;
        self
    }

    /// 是否输出颜色
    pub fn with_color(mut self, colored: bool) -> Self {
        self.renderer = Renderer::new(ColorTheme::from_name(self.settings.theme), colored);
        self
    }

    /// 固定电脑对手的随机种子
    pub fn with_ai_seed(mut self, seed: u64) -> Self {
        self.ai_seed = Some(seed);
        self
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// 运行到退出或输入结束
    pub fn run(&mut self) -> Result<()> {
        loop {
            let next = match self.screen {
                Screen::Menu => self.menu_step()?,
                Screen::Playing => self.game_step()?,
                Screen::Settings => self.settings_step()?,
                Screen::Exit => break,
            };
            let Some(next) = next else {
                tracing::debug!("输入结束");
                break;
            };
            self.screen = next;
        }

        writeln!(self.output, "Goodbye!").context("写入输出失败")?;
        self.output.flush().context("写入输出失败")?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        write!(self.output, "> ").context("写入输出失败")?;
        self.output.flush().context("写入输出失败")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("读取输入失败")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("写入输出失败")
    }

    fn menu_step(&mut self) -> Result<Option<Screen>> {
        let text = menu_text();
        self.say(&text)?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        let next = match parse_menu(&line) {
            Some(MenuCommand::PlayLocal) => {
                self.game = Some(ClientGame::local_pvp());
                self.show_board()?;
                Screen::Playing
            }
            Some(MenuCommand::PlayComputer) => {
                let difficulty = self.settings.difficulty;
                let starting = self.settings.starting_player;
                let game = match self.ai_seed {
                    Some(seed) => ClientGame::local_pve_seeded(difficulty, starting, seed),
                    None => ClientGame::local_pve(difficulty, starting),
                };
                self.game = Some(game);
                self.show_board()?;
                Screen::Playing
            }
            Some(MenuCommand::OpenSettings) => {
                self.draft = Some(self.settings.clone());
                Screen::Settings
            }
            Some(MenuCommand::Quit) => Screen::Exit,
            None => {
                let notice = self.renderer.notice("Unknown option");
                self.say(&notice)?;
                Screen::Menu
            }
        };
        Ok(Some(next))
    }

    fn game_step(&mut self) -> Result<Option<Screen>> {
        let Some(game) = self.game.as_mut() else {
            return Ok(Some(Screen::Menu));
        };

        if game.should_computer_move() {
            self.say("Computer is thinking...")?;
            std::thread::sleep(self.settings.move_delay());
            if let Some(game) = self.game.as_mut() {
                if let Err(e) = game.play_computer_move() {
                    tracing::warn!("电脑无法落子: {}", e);
                }
            }
            self.show_board()?;
            return Ok(Some(Screen::Playing));
        }

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        let Some(command) = parse_game(&line) else {
            let notice = self.renderer.notice(game_help());
            self.say(&notice)?;
            return Ok(Some(Screen::Playing));
        };

        let Some(game) = self.game.as_mut() else {
            return Ok(Some(Screen::Menu));
        };
        let result = handle_game_command(game, command);

        if let Some(notice) = result.notice {
            let notice = self.renderer.notice(&notice);
            self.say(&notice)?;
        }
        if result.next_screen == Screen::Playing {
            self.show_board()?;
        } else {
            self.game = None;
        }
        Ok(Some(result.next_screen))
    }

    fn settings_step(&mut self) -> Result<Option<Screen>> {
        let draft = self.draft.get_or_insert_with(|| self.settings.clone()).clone();
        let text = settings_text(&draft);
        self.say(&text)?;

        let Some(line) = self.read_line()? else {
            return Ok(None);
        };

        let mut draft = draft;
        let next = match parse_settings(&line) {
            Some(SettingsCommand::CycleDifficulty) => {
                draft.difficulty = draft.difficulty.next();
                Screen::Settings
            }
            Some(SettingsCommand::ToggleStartingPlayer) => {
                draft.starting_player = draft.starting_player.toggle();
                Screen::Settings
            }
            Some(SettingsCommand::CycleTheme) => {
                // 主题切换立即生效并保存，不等待保存设置
                draft.theme = draft.theme.next();
                self.apply_theme(draft.theme);
                Screen::Settings
            }
            Some(SettingsCommand::Save) => {
                self.apply_settings(draft.clone());
                self.draft = None;
                return Ok(Some(Screen::Menu));
            }
            Some(SettingsCommand::Back) => {
                self.draft = None;
                return Ok(Some(Screen::Menu));
            }
            None => {
                let notice = self.renderer.notice("Unknown option");
                self.say(&notice)?;
                Screen::Settings
            }
        };

        self.draft = Some(draft);
        Ok(Some(next))
    }

    /// 应用并持久化设置
    fn apply_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.renderer.set_theme(ColorTheme::from_name(self.settings.theme));
        self.persist_settings();
    }

    fn apply_theme(&mut self, theme: ThemeName) {
        self.settings.theme = theme;
        self.renderer.set_theme(ColorTheme::from_name(theme));
        self.persist_settings();
    }

    /// 保存失败只提示不退出
    fn persist_settings(&self) {
        let saved = match &self.settings_path {
            Some(path) => self.settings.save_to(path),
            None => self.settings.save().map(|_| ()),
        };
        if let Err(e) = saved {
            tracing::warn!("保存设置失败: {:#}", e);
        }
    }

    fn show_board(&mut self) -> Result<()> {
        let Some(game) = self.game.as_ref() else {
            return Ok(());
        };
        let board = self.renderer.board(game.state());
        let status = self.renderer.status(&game.status_message());
        self.say(&board)?;
        self.say(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::settings::StartingPlayer;
    use crate::theme::ThemeName;
    use tictactoe_core::Difficulty;

    fn quick_settings() -> GameSettings {
        GameSettings {
            move_delay_ms: 0,
            ..GameSettings::default()
        }
    }

    fn run_script(settings: GameSettings, script: &str, path: Option<PathBuf>) -> (String, GameSettings) {
        let mut output = Vec::new();
        let mut app = App::new(Cursor::new(script.to_string()), &mut output, settings)
            .with_settings_path(path)
            .with_ai_seed(7);
        app.run().unwrap();
        let settings = app.settings().clone();
        drop(app);
        (String::from_utf8(output).unwrap(), settings)
    }

    #[test]
    fn test_two_player_win_and_restart() {
        let (out, _) = run_script(quick_settings(), "1\n1\n4\n2\n5\n3\nr\nm\nq\n", None);

        assert!(out.contains("Player O's turn"));
        assert!(out.contains("Player X has won!"));
        assert!(out.contains("[X]|[X]|[X]"));
        assert!(out.contains("Winning line: horizontal (1-2-3)"));
        // 重新开始后回到空棋盘
        assert!(out.contains(" 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \nPlayer X's turn"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_occupied_and_finished_notices() {
        let (out, _) = run_script(quick_settings(), "1\n5\n5\n1\n4\n2\n6\n9\nq\n", None);
        assert!(out.contains("Cell 5 is already taken"));
        assert!(out.contains("Player X has won!"));
        assert!(out.contains("The game is over, press r to restart"));
    }

    #[test]
    fn test_vs_computer_takes_center_and_blocks() {
        let (out, _) = run_script(quick_settings(), "2\n1\n2\nq\n", None);

        assert!(out.contains("Computer is thinking..."));
        // 中等难度先占中心
        assert!(out.contains(" X | 2 | 3 \n---+---+---\n 4 | O | 6 "));
        // 玩家威胁 3 号格后电脑去堵
        assert!(out.contains(" X | X | O \n---+---+---\n 4 | O | 6 "));
    }

    #[test]
    fn test_computer_starts() {
        let settings = GameSettings {
            starting_player: StartingPlayer::Computer,
            difficulty: Difficulty::Hard,
            ..quick_settings()
        };
        let (out, _) = run_script(settings, "2\nq\n", None);
        assert!(out.contains(" 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \nPlayer X's turn"));
    }

    #[test]
    fn test_settings_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let (out, settings) = run_script(
            quick_settings(),
            "3\nd\ns\nt\nw\nq\n",
            Some(path.clone()),
        );

        assert!(out.contains("Difficulty:      Hard"));
        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.starting_player, StartingPlayer::Computer);
        assert_eq!(settings.theme, ThemeName::Ocean);
        assert_eq!(GameSettings::try_load(Some(&path)).unwrap(), settings);
    }

    #[test]
    fn test_settings_back_discards() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let (_, settings) = run_script(quick_settings(), "3\nd\nb\nq\n", Some(path.clone()));
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert!(!path.exists());
    }

    #[test]
    fn test_theme_change_saved_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        // 切换主题和难度后返回：主题保留，难度丢弃
        let (_, settings) = run_script(quick_settings(), "3\nt\nd\nb\nq\n", Some(path.clone()));
        assert_eq!(settings.theme, ThemeName::Ocean);
        assert_eq!(settings.difficulty, Difficulty::Medium);

        let saved = GameSettings::try_load(Some(&path)).unwrap();
        assert_eq!(saved.theme, ThemeName::Ocean);
        assert_eq!(saved.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (out, _) = run_script(quick_settings(), "1\n5\n", None);
        assert!(out.ends_with("Goodbye!\n"));
    }
}
