//! 错误类型定义

use thiserror::Error;

use crate::mark::Mark;

/// 井字棋规则错误
///
/// 全部属于调用方违反约定（invalid-input），没有可重试的情形。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子索引越界
    #[error("Invalid cell index: {index} (expected 0-8)")]
    InvalidCell { index: usize },

    /// 格子已被占用
    #[error("Cell {index} is already taken by {mark}")]
    CellOccupied { index: usize, mark: Mark },

    /// 游戏已结束（包括棋盘已满）
    #[error("Game is already over")]
    GameOver,

    /// 不是该方的回合
    #[error("Not {0}'s turn")]
    NotYourTurn(Mark),

    /// 无效的棋盘记法
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 无法识别的标记
    #[error("Invalid mark: {0:?}")]
    InvalidMark(String),

    /// 无法识别的难度
    #[error("Invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    /// 无法识别的对局模式
    #[error("Invalid game mode: {0:?}")]
    InvalidMode(String),
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
