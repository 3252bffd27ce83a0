//! 文本渲染
//!
//! 空格显示 1-9 编号提示，获胜线用方括号标出。

use ttt_core::{Board, Cell, BOARD_WIDTH};

use crate::game::{Match, Scores};

const ROW_SEPARATOR: &str = "---+---+---";

/// 渲染棋盘
pub fn render_board(board: &Board, highlight: Option<[Cell; 3]>) -> String {
    let mut rows = Vec::with_capacity(BOARD_WIDTH);

    for row in 0..BOARD_WIDTH {
        let cells: Vec<String> = (0..BOARD_WIDTH)
            .filter_map(|col| Cell::from_row_col(row, col))
            .map(|cell| {
                let symbol = match board.get(cell) {
                    Some(mark) => mark.to_string(),
                    None => (cell.index() + 1).to_string(),
                };
                if highlight.is_some_and(|line| line.contains(&cell)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    let separator = format!("\n{}\n", ROW_SEPARATOR);
    rows.join(separator.as_str())
}

/// 渲染比分
pub fn render_scores(scores: &Scores) -> String {
    format!("Score  X: {}  O: {}", scores.x, scores.o)
}

/// 渲染完整画面（棋盘、状态栏、比分）
pub fn render_match(game: &Match) -> String {
    format!(
        "{}\n\n{}\n{}  Difficulty: {}\n",
        render_board(game.board(), game.winning_line()),
        game.status_line(),
        render_scores(&game.scores()),
        game.difficulty().display_name(),
    )
}
