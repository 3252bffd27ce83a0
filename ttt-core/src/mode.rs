//! 对局模式与 AI 难度

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// AI 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 随机：在所有空格中均匀随机选择
    #[default]
    #[serde(alias = "easy")]
    Random,
    /// 最优：必胜/必堵 + 完整 minimax
    #[serde(alias = "impossible")]
    Optimal,
}

impl Difficulty {
    /// 显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Random => "Easy",
            Difficulty::Optimal => "Impossible",
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" | "easy" => Ok(Difficulty::Random),
            "optimal" | "impossible" => Ok(Difficulty::Optimal),
            _ => Err(GameError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// 对局模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// 双人对战（同一终端）
    #[default]
    #[serde(rename = "pvp")]
    PvP,
    /// 人机对战
    #[serde(rename = "cpu", alias = "pve")]
    PvE,
}

impl GameMode {
    /// 状态栏中的模式标签
    pub fn label(&self) -> &'static str {
        match self {
            GameMode::PvP => "PVP",
            GameMode::PvE => "CPU",
        }
    }

    pub fn is_pve(&self) -> bool {
        matches!(self, GameMode::PvE)
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::PvP),
            "cpu" | "pve" => Ok(GameMode::PvE),
            _ => Err(GameError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse(), Ok(Difficulty::Random));
        assert_eq!("Impossible".parse(), Ok(Difficulty::Optimal));
        assert_eq!("optimal".parse(), Ok(Difficulty::Optimal));
        assert!("hard".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serde_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Optimal).unwrap(), "\"optimal\"");
        let d: Difficulty = serde_json::from_str("\"impossible\"").unwrap();
        assert_eq!(d, Difficulty::Optimal);
        let d: Difficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(d, Difficulty::Random);
    }

    #[test]
    fn test_mode_parse_and_serde() {
        assert_eq!("CPU".parse(), Ok(GameMode::PvE));
        assert_eq!("pvp".parse(), Ok(GameMode::PvP));
        assert!("online".parse::<GameMode>().is_err());

        assert_eq!(serde_json::to_string(&GameMode::PvE).unwrap(), "\"cpu\"");
        let m: GameMode = serde_json::from_str("\"pvp\"").unwrap();
        assert_eq!(m, GameMode::PvP);
    }
}
