//! 走法选择
//!
//! 随机模式：在空格中均匀随机选择。
//! 最优模式：必胜 -> 必堵 -> 完整 Minimax（无剪枝，按中心、四角、四边排序）

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ttt_core::{Board, Cell, GameError, Mark, MoveGenerator, Result, MOVE_PREFERENCE};

use crate::evaluate::{Evaluator, Outcome};

// 重导出 Difficulty 以便外部使用
pub use ttt_core::Difficulty;

/// 终局基础分，按层数递减（更快获胜更好，更慢失败更好）
const WIN_SCORE: i32 = 10;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// 随机数种子，设置后随机模式可复现
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    rng: ChaCha8Rng,
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            nodes_searched: 0,
        }
    }

    /// 从难度创建
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(AiConfig::from_difficulty(difficulty))
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    /// 切换难度（不重置随机数状态）
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    /// 为 `mark` 选择一步棋
    ///
    /// 棋盘已终局（含已满）时返回 `GameError::GameOver`。输入棋盘不会被修改。
    pub fn select_move(&mut self, board: &Board, mark: Mark) -> Result<Cell> {
        self.nodes_searched = 0;

        if Evaluator::is_terminal(board) {
            return Err(GameError::GameOver);
        }

        let cell = match self.config.difficulty {
            Difficulty::Random => self.random_move(board)?,
            Difficulty::Optimal => self.optimal_move(board, mark)?,
        };

        debug!(
            "AI 选择 {}@{}，难度: {:?}，搜索节点: {}",
            mark, cell, self.config.difficulty, self.nodes_searched
        );
        Ok(cell)
    }

    /// 随机走法
    fn random_move(&mut self, board: &Board) -> Result<Cell> {
        let moves = MoveGenerator::generate_legal(board);
        moves.choose(&mut self.rng).copied().ok_or(GameError::GameOver)
    }

    /// 最优走法
    fn optimal_move(&mut self, board: &Board, mark: Mark) -> Result<Cell> {
        let moves = MoveGenerator::generate_legal(board);

        // 1. 必胜
        if let Some(cell) = Self::completing_move(board, &moves, mark)? {
            debug!("{} 直接获胜: {}", mark, cell);
            return Ok(cell);
        }

        // 2. 必堵
        if let Some(cell) = Self::completing_move(board, &moves, mark.opponent())? {
            debug!("{} 封堵 {}: {}", mark, mark.opponent(), cell);
            return Ok(cell);
        }

        // 3. Minimax，同分取优先顺序中的第一个
        let scored = self.evaluate_moves(board, mark)?;
        let mut best: Option<(Cell, i32)> = None;
        for (cell, score) in scored {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        best.map(|(cell, _)| cell).ok_or(GameError::GameOver)
    }

    /// 找出能让 `mark` 立即连成一线的空格（升序第一个）
    fn completing_move(board: &Board, moves: &[Cell], mark: Mark) -> Result<Option<Cell>> {
        for &cell in moves {
            let mut next = *board;
            next.place(cell, mark)?;
            if Evaluator::evaluate(&next) == Outcome::Win(mark) {
                return Ok(Some(cell));
            }
        }
        Ok(None)
    }

    /// 计算每个候选走法的 Minimax 分数（按中心、四角、四边的顺序）
    ///
    /// 不走必胜/必堵捷径，直接给出根节点各子节点的分值。
    pub fn evaluate_moves(&mut self, board: &Board, mark: Mark) -> Result<Vec<(Cell, i32)>> {
        MoveGenerator::generate_ordered(board, &MOVE_PREFERENCE)
            .into_iter()
            .map(|cell| -> Result<(Cell, i32)> {
                let mut next = *board;
                next.place(cell, mark)?;
                let score = self.minimax(&next, mark, false, 0)?;
                Ok((cell, score))
            })
            .collect()
    }

    /// Minimax 搜索
    ///
    /// `me` 是根节点走子方，`maximizing` 为 true 时轮到 `me`。
    /// 每个子节点使用棋盘副本，不修改调用方的棋盘。
    fn minimax(&mut self, board: &Board, me: Mark, maximizing: bool, depth: i32) -> Result<i32> {
        self.nodes_searched += 1;

        match Evaluator::evaluate(board) {
            Outcome::Win(winner) if winner == me => return Ok(WIN_SCORE - depth),
            Outcome::Win(_) => return Ok(depth - WIN_SCORE),
            Outcome::Draw => return Ok(0),
            Outcome::InProgress => {}
        }

        let to_move = if maximizing { me } else { me.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in MoveGenerator::generate_legal(board) {
            let mut next = *board;
            next.place(cell, to_move)?;
            let score = self.minimax(&next, me, !maximizing, depth + 1)?;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        Ok(best)
    }

    /// 获取上一次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

/// 按难度为 `mark` 选择一步棋
///
/// 每次调用新建引擎；随机模式使用熵种子。
pub fn select_move(board: &Board, mark: Mark, difficulty: Difficulty) -> Result<Cell> {
    AiEngine::from_difficulty(difficulty).select_move(board, mark)
}
