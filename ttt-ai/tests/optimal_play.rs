//! 完整对局测试
//!
//! - 最优 vs 最优 必然和棋
//! - 最优模式对随机对手从不失败

use ttt_ai::{AiConfig, AiEngine, Difficulty, Evaluator, Outcome};
use ttt_core::{Board, Mark};

/// 双方轮流走棋直到终局
fn play_out(x: &mut AiEngine, o: &mut AiEngine) -> (Board, Outcome) {
    let mut board = Board::empty();
    let mut turn = Mark::X;

    loop {
        let outcome = Evaluator::evaluate(&board);
        if outcome.is_terminal() {
            return (board, outcome);
        }

        let engine = match turn {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let before = board;
        let cell = engine.select_move(&board, turn).unwrap();
        assert_eq!(board, before, "select_move must not touch its input");

        board.place(cell, turn).unwrap();
        turn = turn.opponent();
    }
}

fn random_engine(seed: u64) -> AiEngine {
    AiEngine::new(AiConfig::from_difficulty(Difficulty::Random).with_seed(seed))
}

#[test]
fn test_optimal_vs_optimal_is_draw() {
    let mut x = AiEngine::from_difficulty(Difficulty::Optimal);
    let mut o = AiEngine::from_difficulty(Difficulty::Optimal);

    let (board, outcome) = play_out(&mut x, &mut o);
    assert_eq!(outcome, Outcome::Draw, "final board {}", board);
    assert!(board.is_full());
}

#[test]
fn test_optimal_never_loses_as_x() {
    let mut optimal = AiEngine::from_difficulty(Difficulty::Optimal);

    for seed in 0..30 {
        let mut random = random_engine(seed);
        let (board, outcome) = play_out(&mut optimal, &mut random);
        assert_ne!(outcome, Outcome::Win(Mark::O), "seed {} board {}", seed, board);
    }
}

#[test]
fn test_optimal_never_loses_as_o() {
    let mut optimal = AiEngine::from_difficulty(Difficulty::Optimal);

    for seed in 0..30 {
        let mut random = random_engine(seed + 1000);
        let (board, outcome) = play_out(&mut random, &mut optimal);
        assert_ne!(outcome, Outcome::Win(Mark::X), "seed {} board {}", seed, board);
    }
}

#[test]
fn test_optimal_game_is_deterministic() {
    let (first, _) = play_out(
        &mut AiEngine::from_difficulty(Difficulty::Optimal),
        &mut AiEngine::from_difficulty(Difficulty::Optimal),
    );
    let (second, _) = play_out(
        &mut AiEngine::from_difficulty(Difficulty::Optimal),
        &mut AiEngine::from_difficulty(Difficulty::Optimal),
    );
    assert_eq!(first, second);
    assert_eq!(first.get(ttt_core::Cell::CENTER), Some(Mark::X));
}
