//! 标记与格子定义

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, BOARD_WIDTH};
use crate::error::GameError;

/// 标记（X 先手）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// 获取记法字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// 从记法字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Mark::from_char), chars.next()) {
            (Some(mark), None) => Ok(mark),
            _ => Err(GameError::InvalidMark(s.to_string())),
        }
    }
}

/// 棋盘格子（行优先索引 0-8）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Cell(u8);

impl Cell {
    /// 中心格
    pub const CENTER: Cell = Cell(4);

    /// 创建格子，越界返回 None
    pub fn new(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// 由行列创建
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_WIDTH && col < BOARD_WIDTH {
            Self::new(row * BOARD_WIDTH + col)
        } else {
            None
        }
    }

    /// 所有格子（升序）
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE as u8).map(Cell)
    }

    /// 数组索引
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// 行 (0-2)
    pub fn row(&self) -> usize {
        self.index() / BOARD_WIDTH
    }

    /// 列 (0-2)
    pub fn col(&self) -> usize {
        self.index() % BOARD_WIDTH
    }

    pub fn is_center(&self) -> bool {
        *self == Self::CENTER
    }

    pub fn is_corner(&self) -> bool {
        matches!(self.0, 0 | 2 | 6 | 8)
    }

    pub fn is_edge(&self) -> bool {
        matches!(self.0, 1 | 3 | 5 | 7)
    }
}

impl TryFrom<usize> for Cell {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index).ok_or(GameError::InvalidCell { index })
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
