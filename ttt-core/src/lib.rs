//! 井字棋共享核心库
//!
//! 包含:
//! - 棋子标记、格子、棋盘等核心数据结构
//! - 合法走法生成
//! - 棋盘记法 (9 字符文本格式)
//! - 对局模式与 AI 难度定义

mod board;
mod constants;
mod error;
mod mark;
mod mode;
mod moves;
mod notation;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use mark::{Cell, Mark};
pub use mode::{Difficulty, GameMode};
pub use moves::{Move, MoveGenerator};
pub use notation::EMPTY_NOTATION;
