//! 客户端游戏状态

use tictactoe_ai::{AiConfig, AiEngine};
use tictactoe_core::{Difficulty, GameError, GameState, GameStatus, Player};

use crate::settings::StartingPlayer;

/// 玩家执子（人机对战时电脑执 O）
pub const HUMAN_PLAYER: Player = Player::X;

/// 游戏模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// 本地双人对战（同一终端）
    LocalPvP,
    /// 本地人机对战
    LocalPvE {
        difficulty: Difficulty,
        starting_player: StartingPlayer,
    },
}

impl GameMode {
    /// 是否是人机模式
    pub fn is_pve(&self) -> bool {
        matches!(self, GameMode::LocalPvE { .. })
    }

    /// 电脑执子（仅人机模式有效）
    pub fn computer_player(&self) -> Option<Player> {
        self.is_pve().then(|| HUMAN_PLAYER.opponent())
    }

    /// 本模式的先手方
    pub fn first_player(&self) -> Player {
        match self {
            GameMode::LocalPvE {
                starting_player: StartingPlayer::Computer,
                ..
            } => HUMAN_PLAYER.opponent(),
            _ => HUMAN_PLAYER,
        }
    }
}

/// 玩家点击格子的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellOutcome {
    /// 已落子
    Played,
    /// 格子已被占据，忽略
    Occupied,
    /// 棋局已结束，忽略
    GameOver,
    /// 轮到电脑，忽略
    NotYourTurn,
}

/// 客户端游戏状态
pub struct ClientGame {
    /// 当前对局
    state: GameState,
    /// 游戏模式
    mode: GameMode,
    /// 电脑对手（仅人机模式）
    ai: Option<AiEngine>,
}

impl ClientGame {
    /// 初始化本地双人对战
    pub fn local_pvp() -> Self {
        Self::start(GameMode::LocalPvP, None)
    }

    /// 初始化本地人机对战
    pub fn local_pve(difficulty: Difficulty, starting_player: StartingPlayer) -> Self {
        let ai = AiEngine::from_difficulty(difficulty);
        Self::start(
            GameMode::LocalPvE {
                difficulty,
                starting_player,
            },
            Some(ai),
        )
    }

    /// 使用固定种子的电脑对手（结果可复现）
    pub fn local_pve_seeded(difficulty: Difficulty, starting_player: StartingPlayer, seed: u64) -> Self {
        let ai = AiEngine::with_seed(AiConfig::from_difficulty(difficulty), seed);
        Self::start(
            GameMode::LocalPvE {
                difficulty,
                starting_player,
            },
            Some(ai),
        )
    }

    fn start(mode: GameMode, ai: Option<AiEngine>) -> Self {
        tracing::info!("新对局开始: {:?}", mode);
        Self {
            state: GameState::new(mode.first_player()),
            mode,
            ai,
        }
    }

    /// 重新开始（模式和先手方不变）
    pub fn restart(&mut self) {
        self.state = self.state.reset();
        tracing::info!("对局重置，{} 先手", self.state.starting_player());
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// 是否轮到人类玩家落子
    pub fn is_human_turn(&self) -> bool {
        self.state.is_active() && Some(self.state.current_turn()) != self.mode.computer_player()
    }

    /// 是否需要电脑落子
    pub fn should_computer_move(&self) -> bool {
        self.state.is_active() && Some(self.state.current_turn()) == self.mode.computer_player()
    }

    /// 处理玩家点击
    ///
    /// 界面层先做过滤，引擎依然会再次校验
    pub fn handle_cell(&mut self, index: usize) -> Result<CellOutcome, GameError> {
        if !self.state.is_active() {
            return Ok(CellOutcome::GameOver);
        }
        if !self.is_human_turn() {
            return Ok(CellOutcome::NotYourTurn);
        }
        if self.state.board().get(index).is_some_and(|mark| !mark.is_empty()) {
            return Ok(CellOutcome::Occupied);
        }

        self.state = self.state.play_move(index)?;
        self.log_if_finished();
        Ok(CellOutcome::Played)
    }

    /// 电脑落子，返回落子格
    ///
    /// 不该电脑走（双人模式、轮到玩家、棋局已结束）时返回 `Ok(None)`
    pub fn play_computer_move(&mut self) -> Result<Option<usize>, GameError> {
        if !self.should_computer_move() {
            return Ok(None);
        }
        let Some(ai) = self.ai.as_mut() else {
            return Ok(None);
        };

        let index = ai.play(&self.state)?;
        self.state = self.state.play_move(index)?;
        self.log_if_finished();
        Ok(Some(index))
    }

    /// 状态栏文字
    pub fn status_message(&self) -> String {
        match self.state.status() {
            GameStatus::InProgress => format!("Player {}'s turn", self.state.current_turn()),
            GameStatus::Won { winner, .. } => format!("Player {} has won!", winner),
            GameStatus::Draw => "Game ended in a draw!".to_string(),
        }
    }

    fn log_if_finished(&self) {
        match self.state.status() {
            GameStatus::Won { winner, line } => {
                tracing::info!("对局结束: {} 获胜，连线 {:?}", winner, line.cells());
            }
            GameStatus::Draw => tracing::info!("对局结束: 和棋"),
            GameStatus::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, CENTER};

    #[test]
    fn test_pvp_flow() {
        let mut game = ClientGame::local_pvp();
        assert_eq!(game.status_message(), "Player X's turn");
        assert!(!game.should_computer_move());

        for index in [0, 3, 1, 4] {
            assert_eq!(game.handle_cell(index), Ok(CellOutcome::Played));
        }
        assert_eq!(game.status_message(), "Player X's turn");

        assert_eq!(game.handle_cell(2), Ok(CellOutcome::Played));
        assert_eq!(game.status_message(), "Player X has won!");
        assert_eq!(game.handle_cell(5), Ok(CellOutcome::GameOver));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = ClientGame::local_pvp();
        game.handle_cell(4).unwrap();
        let before = game.state().clone();

        assert_eq!(game.handle_cell(4), Ok(CellOutcome::Occupied));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_out_of_range_rejected_by_engine() {
        let mut game = ClientGame::local_pvp();
        assert!(matches!(game.handle_cell(12), Err(GameError::InvalidMove { .. })));
    }

    #[test]
    fn test_pve_computer_replies() {
        let mut game = ClientGame::local_pve_seeded(Difficulty::Medium, StartingPlayer::Human, 1);
        assert!(game.is_human_turn());

        game.handle_cell(0).unwrap();
        assert!(game.should_computer_move());
        assert_eq!(game.handle_cell(1), Ok(CellOutcome::NotYourTurn));

        assert_eq!(game.play_computer_move(), Ok(Some(CENTER)));
        assert_eq!(game.state().board().get(CENTER), Some(Mark::O));
        assert!(game.is_human_turn());

        // 玩家威胁 2，电脑必须堵
        game.handle_cell(1).unwrap();
        assert_eq!(game.play_computer_move(), Ok(Some(2)));
    }

    #[test]
    fn test_pve_computer_starts() {
        let mut game = ClientGame::local_pve_seeded(Difficulty::Hard, StartingPlayer::Computer, 1);
        assert_eq!(game.state().current_turn(), Player::O);
        assert!(game.should_computer_move());

        assert_eq!(game.play_computer_move(), Ok(Some(CENTER)));
        assert_eq!(game.status_message(), "Player X's turn");

        // 重新开始后仍然电脑先手
        game.restart();
        assert!(game.should_computer_move());
        assert_eq!(game.state().move_count(), 0);
    }

    #[test]
    fn test_computer_move_skipped_when_not_its_turn() {
        let mut game = ClientGame::local_pve_seeded(Difficulty::Easy, StartingPlayer::Human, 1);
        let before = game.state().clone();
        assert_eq!(game.play_computer_move(), Ok(None));
        assert_eq!(game.state(), &before);

        let mut pvp = ClientGame::local_pvp();
        assert_eq!(pvp.play_computer_move(), Ok(None));
        assert_eq!(pvp.state().move_count(), 0);
    }

    #[test]
    fn test_computer_move_skipped_after_game_over() {
        let mut game = ClientGame::local_pve_seeded(Difficulty::Medium, StartingPlayer::Human, 3);
        game.handle_cell(0).unwrap();
        assert_eq!(game.play_computer_move(), Ok(Some(CENTER)));
        game.handle_cell(1).unwrap();
        assert_eq!(game.play_computer_move(), Ok(Some(2)));
        game.handle_cell(3).unwrap();
        // 电脑 2-4-6 连成反对角线
        assert_eq!(game.play_computer_move(), Ok(Some(6)));
        assert_eq!(game.status_message(), "Player O has won!");

        let before = game.state().clone();
        assert_eq!(game.play_computer_move(), Ok(None));
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_draw_message() {
        let mut game = ClientGame::local_pvp();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.handle_cell(index).unwrap();
        }
        assert_eq!(game.status_message(), "Game ended in a draw!");
    }

    #[test]
    fn test_mode_helpers() {
        let mode = GameMode::LocalPvE {
            difficulty: Difficulty::Hard,
            starting_player: StartingPlayer::Human,
        };
        assert!(mode.is_pve());
        assert_eq!(mode.computer_player(), Some(Player::O));
        assert_eq!(GameMode::LocalPvP.computer_player(), None);
        assert_eq!(GameMode::LocalPvP.first_player(), Player::X);
    }
}
