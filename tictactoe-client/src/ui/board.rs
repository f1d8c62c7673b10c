//! 棋盘渲染
//!
//! 把对局状态画成带颜色的文本，获胜连线上的格子高亮显示

use crossterm::style::Stylize;
use tictactoe_core::{GameState, LineOrientation, Mark, WinningLine, BOARD_SIZE};

use crate::theme::ColorTheme;

/// 终端渲染器
pub struct Renderer {
    theme: ColorTheme,
    /// 关闭时输出纯文本（非终端输出、测试）
    colored: bool,
}

impl Renderer {
    pub fn new(theme: ColorTheme, colored: bool) -> Self {
        Self { theme, colored }
    }

    pub fn set_theme(&mut self, theme: ColorTheme) {
        self.theme = theme;
    }

    /// 渲染棋盘（空格显示 1-9 编号）
    pub fn board(&self, state: &GameState) -> String {
        let winning_line = state.status().winning_line();
        let separator = self.paint_grid("---+---+---");

        let rows: Vec<String> = state
            .board()
            .rows()
            .enumerate()
            .map(|(row, marks)| {
                let cells: Vec<String> = marks
                    .iter()
                    .enumerate()
                    .map(|(col, &mark)| {
                        let index = row * BOARD_SIZE + col;
                        let highlighted = winning_line.is_some_and(|line| line.contains(index));
                        self.cell(index, mark, highlighted)
                    })
                    .collect();
                cells.join(&self.paint_grid("|"))
            })
            .collect();

        let mut out = rows.join(&format!("\n{}\n", separator));
        if let Some(line) = winning_line {
            out.push('\n');
            out.push_str(&describe_line(line));
        }
        out
    }

    fn cell(&self, index: usize, mark: Mark, highlighted: bool) -> String {
        let symbol = match mark {
            Mark::Empty => (index + 1).to_string(),
            other => other.symbol().to_string(),
        };

        if !self.colored {
            return if highlighted {
                format!("[{}]", symbol)
            } else {
                format!(" {} ", symbol)
            };
        }

        let padded = format!(" {} ", symbol);
        let styled = match mark {
            Mark::Empty => padded.with(self.theme.cell_number),
            Mark::X => padded.with(self.theme.x_color).bold(),
            Mark::O => padded.with(self.theme.o_color).bold(),
        };
        if highlighted {
            styled.on(self.theme.highlight).to_string()
        } else {
            styled.to_string()
        }
    }

    fn paint_grid(&self, text: &str) -> String {
        if self.colored {
            text.with(self.theme.grid).to_string()
        } else {
            text.to_string()
        }
    }

    /// 状态栏
    pub fn status(&self, text: &str) -> String {
        if self.colored {
            text.with(self.theme.status).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// 提示信息
    pub fn notice(&self, text: &str) -> String {
        if self.colored {
            text.with(self.theme.notice).to_string()
        } else {
            text.to_string()
        }
    }
}

/// 获胜连线的文字说明，格子按 1-9 编号
pub fn describe_line(line: WinningLine) -> String {
    let kind = match line.orientation() {
        LineOrientation::Horizontal => "horizontal",
        LineOrientation::Vertical => "vertical",
        LineOrientation::Diagonal => "diagonal",
        LineOrientation::AntiDiagonal => "anti-diagonal",
    };
    let [a, b, c] = line.cells();
    format!("Winning line: {} ({}-{}-{})", kind, a + 1, b + 1, c + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Board, Mark::Empty as E, Mark::O, Mark::X, Player};

    fn plain() -> Renderer {
        Renderer::new(ColorTheme::default(), false)
    }

    #[test]
    fn test_empty_board_shows_numbers() {
        let out = plain().board(&GameState::default());
        assert_eq!(
            out,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_line_highlighted() {
        let board = Board::from_marks([X, O, E, X, O, E, X, E, E]);
        let state = GameState::from_board(board, Player::X);
        let out = plain().board(&state);

        assert!(out.starts_with("[X]| O | 3 "));
        assert!(out.contains("[X]| O | 6 "));
        assert!(out.contains("[X]| 8 | 9 "));
        assert!(out.ends_with("Winning line: vertical (1-4-7)"));
    }

    #[test]
    fn test_describe_line() {
        assert_eq!(
            describe_line(WinningLine([2, 4, 6])),
            "Winning line: anti-diagonal (3-5-7)"
        );
        assert_eq!(
            describe_line(WinningLine([0, 1, 2])),
            "Winning line: horizontal (1-2-3)"
        );
    }

    #[test]
    fn test_colored_output_keeps_symbols() {
        let renderer = Renderer::new(ColorTheme::ocean(), true);
        let state = GameState::default().play_move(4).unwrap();
        let out = renderer.board(&state);
        assert!(out.contains('X'));
        assert!(out.contains('9'));
        assert!(renderer.status("Player O's turn").contains("Player O's turn"));
    }
}
