//! 走法定义和合法走法生成

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::mark::{Cell, Mark};

/// 走法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 目标格子
    pub cell: Cell,
    /// 落下的标记
    pub mark: Mark,
}

impl Move {
    /// 创建新走法
    pub fn new(cell: Cell, mark: Mark) -> Self {
        Self { cell, mark }
    }

    /// 在棋盘上执行
    pub fn apply(&self, board: &mut Board) -> crate::Result<()> {
        board.place(self.cell, self.mark)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mark, self.cell)
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成所有空格（升序）
    ///
    /// 不判断胜负，终局判断由评估器负责。
    pub fn generate_legal(board: &Board) -> Vec<Cell> {
        board.empty_cells()
    }

    /// 按给定优先顺序列出空格
    pub fn generate_ordered(board: &Board, order: &[usize]) -> Vec<Cell> {
        order
            .iter()
            .filter_map(|&i| Cell::new(i))
            .filter(|&cell| board.is_empty_at(cell))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MOVE_PREFERENCE;

    #[test]
    fn test_generate_legal_empty_board() {
        let moves = MoveGenerator::generate_legal(&Board::empty());
        let indices: Vec<usize> = moves.iter().map(Cell::index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_generate_ordered_skips_taken() {
        let board: Board = "XO./.../...".parse().unwrap();
        let ordered = MoveGenerator::generate_ordered(&board, &MOVE_PREFERENCE);
        let indices: Vec<usize> = ordered.iter().map(Cell::index).collect();
        assert_eq!(indices, vec![4, 2, 6, 8, 3, 5, 7]);
    }

    #[test]
    fn test_move_apply_and_display() {
        let mut board = Board::empty();
        let mv = Move::new(Cell::CENTER, Mark::O);
        mv.apply(&mut board).unwrap();

        assert_eq!(board.get(Cell::CENTER), Some(Mark::O));
        assert_eq!(mv.to_string(), "O@4");
        assert!(mv.apply(&mut board).is_err());
    }
}
