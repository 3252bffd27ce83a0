//! 胜负评估

use serde::{Deserialize, Serialize};
use ttt_core::{Board, Cell, Mark, WINNING_LINES};

/// 对局结果（完全由棋盘推导，不单独存储）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 进行中
    InProgress,
    /// 某方获胜
    Win(Mark),
    /// 和棋
    Draw,
}

impl Outcome {
    /// 是否终局
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// 胜者
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 评估棋盘
    ///
    /// 按行、列、对角线的固定顺序检查获胜线，先匹配者胜；
    /// 无人获胜且棋盘已满为和棋，否则进行中。
    pub fn evaluate(board: &Board) -> Outcome {
        if let Some(line) = Self::winning_line(board) {
            if let Some(mark) = board.get(line[0]) {
                return Outcome::Win(mark);
            }
        }

        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// 第一条被同一标记占满的线
    pub fn winning_line(board: &Board) -> Option<[Cell; 3]> {
        let cells = board.cells();
        WINNING_LINES
            .iter()
            .find(|&&[a, b, c]| cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c])
            .and_then(|line| {
                let [a, b, c] = line.map(Cell::new);
                Some([a?, b?, c?])
            })
    }

    /// 胜者（如果有）
    pub fn winner(board: &Board) -> Option<Mark> {
        Self::evaluate(board).winner()
    }

    /// 是否终局
    pub fn is_terminal(board: &Board) -> bool {
        Self::evaluate(board).is_terminal()
    }
}
