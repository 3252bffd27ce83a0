//! 棋盘记法解析和生成
//!
//! 9 个字符，行优先：`X`/`O` 表示标记，`.`、`-`、`_` 或空格表示空格。
//! 行分隔符 `/` 可选，解析时忽略。
//!
//! 示例：`X.O/.X./..O`

use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, BOARD_WIDTH};
use crate::error::GameError;
use crate::mark::{Cell, Mark};

/// 空棋盘记法
pub const EMPTY_NOTATION: &str = ".../.../...";

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; BOARD_SIZE];
        let mut index = 0;

        for c in s.chars().filter(|&c| c != '/') {
            if index >= BOARD_SIZE {
                return Err(GameError::InvalidNotation {
                    reason: format!("Too many cells in {:?}", s),
                });
            }

            cells[index] = match c {
                '.' | '-' | '_' | ' ' => None,
                _ => match Mark::from_char(c) {
                    Some(mark) => Some(mark),
                    None => {
                        return Err(GameError::InvalidNotation {
                            reason: format!("Invalid cell character: {}", c),
                        })
                    }
                },
            };
            index += 1;
        }

        if index != BOARD_SIZE {
            return Err(GameError::InvalidNotation {
                reason: format!("Expected {} cells, got {}", BOARD_SIZE, index),
            });
        }

        Ok(Board::from_cells(cells))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, cell) in Cell::all().enumerate() {
            if i > 0 && i % BOARD_WIDTH == 0 {
                write!(f, "/")?;
            }
            match self.get(cell) {
                Some(mark) => write!(f, "{}", mark)?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
