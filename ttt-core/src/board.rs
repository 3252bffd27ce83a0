//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;
use crate::error::GameError;
use crate::mark::{Cell, Mark};

/// 棋盘
///
/// 3x3 棋盘，索引为 row * 3 + col。已下的格子只能通过 `reset` 整体清空。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; BOARD_SIZE],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从格子数组创建
    pub fn from_cells(cells: [Option<Mark>; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// 获取指定格子的标记
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    /// 格子是否为空
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// 落子，不允许覆盖
    pub fn place(&mut self, cell: Cell, mark: Mark) -> Result<(), GameError> {
        if let Some(existing) = self.get(cell) {
            return Err(GameError::CellOccupied {
                index: cell.index(),
                mark: existing,
            });
        }
        self.cells[cell.index()] = Some(mark);
        Ok(())
    }

    /// 清空整个棋盘
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }

    /// 所有空格（升序）
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.is_empty_at(cell)).collect()
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 是否为空棋盘
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 某方已下的子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// 已下子总数
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// 按子数推断走子方（X 先手）
    ///
    /// 子数关系不可能出现时返回 None。
    pub fn side_to_move(&self) -> Option<Mark> {
        let x = self.count(Mark::X);
        let o = self.count(Mark::O);
        if x == o {
            Some(Mark::X)
        } else if x == o + 1 {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// 底层格子
    pub fn cells(&self) -> &[Option<Mark>; BOARD_SIZE] {
        &self.cells
    }
}
