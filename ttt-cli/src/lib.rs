//! 井字棋终端客户端
//!
//! 包含:
//! - 对局控制（轮流走棋、比分、重开）
//! - 命令解析
//! - 文本渲染
//! - 设置加载

pub mod app;
pub mod command;
pub mod game;
pub mod render;
pub mod settings;

pub use app::App;
pub use command::{Command, CommandError};
pub use game::{Match, Scores};
pub use settings::Settings;
