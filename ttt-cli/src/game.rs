//! 对局控制
//!
//! 持有棋盘和回合顺序，负责比分累计、重开一局和新比赛。

use tracing::{debug, info};
use ttt_ai::{AiConfig, AiEngine, Evaluator, Outcome};
use ttt_core::{Board, Cell, Difficulty, GameError, GameMode, Mark, Move, Result};

use crate::settings::Settings;

/// 比分
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
}

impl Scores {
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn increment(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

/// 一场比赛（多局累计比分）
pub struct Match {
    /// 当前棋盘
    board: Board,
    /// 当前走子方
    current: Mark,
    /// 当前局结果
    outcome: Outcome,
    /// 比分
    scores: Scores,
    /// 对局模式
    mode: GameMode,
    /// 人机模式下玩家的标记
    player_mark: Mark,
    /// 电脑引擎（持有难度和随机数状态）
    engine: AiEngine,
    /// 本局走法记录
    history: Vec<Move>,
}

impl Match {
    /// 按设置创建比赛
    pub fn new(settings: &Settings) -> Self {
        let config = AiConfig {
            difficulty: settings.difficulty,
            seed: settings.ai_seed,
        };
        Self {
            board: Board::empty(),
            current: Mark::X,
            outcome: Outcome::InProgress,
            scores: Scores::default(),
            mode: settings.mode,
            player_mark: settings.player_mark,
            engine: AiEngine::new(config),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player_mark(&self) -> Mark {
        self.player_mark
    }

    pub fn difficulty(&self) -> Difficulty {
        self.engine.config().difficulty
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// 获胜线（用于高亮）
    pub fn winning_line(&self) -> Option<[Cell; 3]> {
        Evaluator::winning_line(&self.board)
    }

    /// 是否轮到人类走棋
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvP => true,
            GameMode::PvE => self.current == self.player_mark,
        }
    }

    /// 是否需要电脑走棋（人机模式、对局进行中且轮到电脑）
    pub fn should_computer_move(&self) -> bool {
        self.mode.is_pve() && !self.is_over() && self.current != self.player_mark
    }

    /// 人类落子
    pub fn play(&mut self, cell: Cell) -> Result<Outcome> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn(self.player_mark));
        }
        self.apply(cell)
    }

    /// 电脑落子
    pub fn computer_move(&mut self) -> Result<Move> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.should_computer_move() {
            return Err(GameError::NotYourTurn(self.current));
        }

        let mark = self.current;
        let cell = self.engine.select_move(&self.board, mark)?;
        debug!("电脑走棋: {}@{}，搜索节点: {}", mark, cell, self.engine.nodes_searched());
        self.apply(cell)?;
        Ok(Move::new(cell, mark))
    }

    /// 执行落子并判定结果
    fn apply(&mut self, cell: Cell) -> Result<Outcome> {
        let mv = Move::new(cell, self.current);
        mv.apply(&mut self.board)?;
        self.history.push(mv);

        self.outcome = Evaluator::evaluate(&self.board);
        match self.outcome {
            Outcome::Win(winner) => {
                self.scores.increment(winner);
                info!(
                    "{} 获胜，比分 X {} : {} O",
                    winner, self.scores.x, self.scores.o
                );
            }
            Outcome::Draw => info!("和棋"),
            Outcome::InProgress => self.current = self.current.opponent(),
        }

        Ok(self.outcome)
    }

    /// 重开一局（保留比分）
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.current = Mark::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        debug!("重开一局");
    }

    /// 新比赛（比分清零）
    pub fn new_match(&mut self) {
        self.reset_round();
        self.scores = Scores::default();
        info!("新比赛: 模式 {}，玩家 {}", self.mode.label(), self.player_mark);
    }

    /// 切换模式（开始新比赛）
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.new_match();
    }

    /// 切换玩家标记（开始新比赛）
    pub fn set_player_mark(&mut self, mark: Mark) {
        self.player_mark = mark;
        self.new_match();
    }

    /// 切换难度（当前局继续）
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// 状态栏文字
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Win(winner) => format!("{} Wins!", winner),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => match self.mode {
                GameMode::PvP => format!("Turn: {} | Mode: {}", self.current, self.mode.label()),
                GameMode::PvE => format!(
                    "Turn: {} | Mode: {} | You are {}",
                    self.current,
                    self.mode.label(),
                    self.player_mark
                ),
            },
        }
    }
}
