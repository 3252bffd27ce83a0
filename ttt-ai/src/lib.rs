//! 井字棋 AI 引擎
//!
//! 包含:
//! - 胜负评估
//! - 随机走法
//! - 必胜/必堵 + 完整 Minimax 搜索

mod evaluate;
mod search;

pub use evaluate::{Evaluator, Outcome};
pub use search::{select_move, AiConfig, AiEngine, Difficulty};
