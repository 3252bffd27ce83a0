//! 设置模块
//!
//! 只读加载，对局内容不做任何持久化。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use ttt_core::{Difficulty, GameMode, Mark, DEFAULT_COMPUTER_DELAY_MS};

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 对局模式
    pub mode: GameMode,
    /// 人机模式下玩家的标记
    pub player_mark: Mark,
    /// AI 难度
    pub difficulty: Difficulty,
    /// 电脑走棋前的延迟（毫秒），只影响显示节奏
    pub computer_delay_ms: u64,
    /// 随机模式种子（调试用）
    pub ai_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::PvP,
            player_mark: Mark::X,
            difficulty: Difficulty::Random,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            ai_seed: None,
        }
    }
}

impl Settings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置，失败时使用默认设置
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("设置文件不存在，使用默认设置");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("已加载设置: {:?}", path);
                    settings
                }
                Err(e) => {
                    tracing::warn!("设置文件格式无效: {}，使用默认设置", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("无法读取设置文件: {}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 电脑走棋延迟
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}
