//! 终端主循环
//!
//! 逐行读取命令，人机模式下轮到电脑时先等待展示延迟再走棋。

use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::command::{Command, HELP};
use crate::game::Match;
use crate::render::render_match;
use crate::settings::Settings;

/// 终端应用
pub struct App {
    game: Match,
    /// 电脑走棋前的延迟
    computer_delay: Duration,
}

/// 命令处理后的去向
enum Flow {
    Continue,
    Quit,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: Match::new(settings),
            computer_delay: settings.computer_delay(),
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// 运行直到 `quit` 或输入结束
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        self.write_screen(&mut output).await?;

        loop {
            if self.game.should_computer_move() {
                // 让玩家先看到自己的落子
                tokio::time::sleep(self.computer_delay).await;
                let mv = self.game.computer_move()?;
                output
                    .write_all(format!("Computer plays {}\n", mv.cell.index() + 1).as_bytes())
                    .await?;
                self.write_screen(&mut output).await?;
                continue;
            }

            let Some(line) = lines.next_line().await? else {
                info!("输入结束，退出");
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.handle_line(&line, &mut output).await? {
                Flow::Continue => {}
                Flow::Quit => break,
            }
        }

        output.flush().await?;
        Ok(())
    }

    /// 处理一行输入
    async fn handle_line<W>(&mut self, line: &str, output: &mut W) -> Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("无效输入 {:?}: {}", line, e);
                output.write_all(format!("{}\n", e).as_bytes()).await?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Play(cell) => {
                if let Err(e) = self.game.play(cell) {
                    warn!("落子被拒绝: {}", e);
                    output.write_all(format!("{}\n", e).as_bytes()).await?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Reset => self.game.reset_round(),
            Command::NewMatch => self.game.new_match(),
            Command::Mode(mode) => self.game.set_mode(mode),
            Command::Mark(mark) => self.game.set_player_mark(mark),
            Command::Difficulty(difficulty) => self.game.set_difficulty(difficulty),
            Command::Help => {
                output.write_all(format!("{}\n", HELP).as_bytes()).await?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.write_screen(output).await?;
        Ok(Flow::Continue)
    }

    async fn write_screen<W>(&self, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(format!("\n{}", render_match(&self.game)).as_bytes())
            .await?;
        output.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_ai::Outcome;
    use ttt_core::{Difficulty, GameMode, Mark};

    async fn run_script(settings: &Settings, script: &str) -> (App, String) {
        let mut app = App::new(settings);
        let mut output = Vec::new();
        app.run(script.as_bytes(), &mut output).await.unwrap();
        (app, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_pvp_game_to_win() {
        let (app, output) = run_script(&Settings::default(), "1\n4\n2\n5\n3\nquit\n").await;

        assert_eq!(app.game().outcome(), Outcome::Win(Mark::X));
        assert_eq!(app.game().scores().x, 1);
        assert!(output.contains("X Wins!"));
        assert!(output.contains("[X]|[X]|[X]"));
    }

    #[tokio::test]
    async fn test_bad_input_reported_not_fatal() {
        let (app, output) = run_script(&Settings::default(), "dance\n1\n1\n").await;

        assert!(output.contains("Unknown command"));
        assert!(output.contains("already taken"));
        assert_eq!(app.game().board().occupied(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_replies_after_delay() {
        let settings = Settings {
            mode: GameMode::PvE,
            difficulty: Difficulty::Optimal,
            ..Settings::default()
        };
        let (app, output) = run_script(&settings, "1\n").await;

        // 角落开局，电脑下中心
        assert!(output.contains("Computer plays 5"));
        assert_eq!(app.game().board().occupied(), 2);
        assert_eq!(app.game().current_turn(), Mark::X);
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_opens_as_x() {
        let settings = Settings {
            mode: GameMode::PvE,
            player_mark: Mark::O,
            difficulty: Difficulty::Optimal,
            ..Settings::default()
        };
        let (app, output) = run_script(&settings, "").await;

        assert!(output.contains("Computer plays 5"));
        assert_eq!(app.game().history().len(), 1);
    }

    #[tokio::test]
    async fn test_reset_and_new_match_commands() {
        let script = "1\n4\n2\n5\n3\nreset\n";
        let (app, _) = run_script(&Settings::default(), script).await;
        assert!(app.game().board().is_blank());
        assert_eq!(app.game().scores().x, 1);

        let script = "1\n4\n2\n5\n3\nnew\n";
        let (app, output) = run_script(&Settings::default(), script).await;
        assert_eq!(app.game().scores().x, 0);
        assert!(output.contains("Score  X: 0  O: 0"));
    }

    #[tokio::test]
    async fn test_help() {
        let (_, output) = run_script(&Settings::default(), "help\n").await;
        assert!(output.contains("difficulty easy|impossible"));
    }
}
