//! 棋盘常量定义

/// 棋盘边长
pub const BOARD_WIDTH: usize = 3;

/// 格子总数
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

/// 8 条获胜线（行、列、对角线，顺序固定）
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // 行
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // 列
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // 对角线
    [0, 4, 8],
    [2, 4, 6],
];

/// 搜索根节点的候选顺序：中心、四角、四边
///
/// 同分时取最先出现者，空棋盘因此总是下中心。
pub const MOVE_PREFERENCE: [usize; BOARD_SIZE] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// 电脑走棋前的默认展示延迟（毫秒）
pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 300;
