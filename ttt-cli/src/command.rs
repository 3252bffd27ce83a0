//! 输入命令解析

use std::str::FromStr;

use thiserror::Error;
use ttt_core::{Cell, Difficulty, GameError, GameMode, Mark, BOARD_SIZE};

/// 帮助文本
pub const HELP: &str = "\
Commands:
  1-9                 place your mark (1 = top-left, 9 = bottom-right)
  reset               clear the board, keep the score
  new                 start a new match (score back to 0-0)
  mode pvp|cpu        two players, or play against the computer
  mark x|o            your mark against the computer
  difficulty easy|impossible
  help                show this text
  quit                leave";

/// 用户命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 落子
    Play(Cell),
    /// 重开一局
    Reset,
    /// 新比赛
    NewMatch,
    /// 切换模式
    Mode(GameMode),
    /// 切换玩家标记
    Mark(Mark),
    /// 切换难度
    Difficulty(Difficulty),
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0:?} (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// 格子编号不在 1-9
    #[error("Cell number must be 1-{max}, got {value}")]
    CellOutOfRange { value: usize, max: usize },

    #[error(transparent)]
    Game(#[from] GameError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };
        let arg = words.next();
        let head = head.to_ascii_lowercase();

        // 数字直接视为落子（1 起始）
        if let Ok(value) = head.parse::<usize>() {
            let cell = value
                .checked_sub(1)
                .and_then(Cell::new)
                .ok_or(CommandError::CellOutOfRange { value, max: BOARD_SIZE })?;
            return Ok(Command::Play(cell));
        }

        match head.as_str() {
            "reset" | "r" => Ok(Command::Reset),
            "new" | "n" => Ok(Command::NewMatch),
            "mode" => Ok(Command::Mode(
                arg.ok_or(CommandError::MissingArgument("mode"))?.parse()?,
            )),
            "mark" => Ok(Command::Mark(
                arg.ok_or(CommandError::MissingArgument("mark"))?.parse()?,
            )),
            "difficulty" | "diff" => Ok(Command::Difficulty(
                arg.ok_or(CommandError::MissingArgument("difficulty"))?
                    .parse()?,
            )),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!("1".parse(), Ok(Command::Play(Cell::new(0).unwrap())));
        assert_eq!(" 9 ".parse(), Ok(Command::Play(Cell::new(8).unwrap())));
        assert_eq!(
            "0".parse::<Command>(),
            Err(CommandError::CellOutOfRange { value: 0, max: 9 })
        );
        assert_eq!(
            "10".parse::<Command>(),
            Err(CommandError::CellOutOfRange { value: 10, max: 9 })
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("reset".parse(), Ok(Command::Reset));
        assert_eq!("NEW".parse(), Ok(Command::NewMatch));
        assert_eq!("mode cpu".parse(), Ok(Command::Mode(GameMode::PvE)));
        assert_eq!("mark o".parse(), Ok(Command::Mark(Mark::O)));
        assert_eq!(
            "difficulty impossible".parse(),
            Ok(Command::Difficulty(Difficulty::Optimal))
        );
        assert_eq!("q".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!("mode".parse::<Command>(), Err(CommandError::MissingArgument("mode")));
        assert!(matches!("dance".parse::<Command>(), Err(CommandError::Unknown(_))));
        assert!(matches!(
            "mark z".parse::<Command>(),
            Err(CommandError::Game(GameError::InvalidMark(_)))
        ));
        assert!(matches!(
            "difficulty hard".parse::<Command>(),
            Err(CommandError::Game(GameError::InvalidDifficulty(_)))
        ));
    }
}
