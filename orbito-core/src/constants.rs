//! 棋盘常量定义

use crate::cell::Position;

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 4;

/// 棋盘格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 外圈 12 格，沿左列向下、底行向右、右列向上、顶行向左
///
/// 旋转一次时，每格取列表中前一格的值，首格取末格的值。
pub const OUTER_RING: [Position; 12] = [
    Position::new_unchecked(0, 0),
    Position::new_unchecked(1, 0),
    Position::new_unchecked(2, 0),
    Position::new_unchecked(3, 0),
    Position::new_unchecked(3, 1),
    Position::new_unchecked(3, 2),
    Position::new_unchecked(3, 3),
    Position::new_unchecked(2, 3),
    Position::new_unchecked(1, 3),
    Position::new_unchecked(0, 3),
    Position::new_unchecked(0, 2),
    Position::new_unchecked(0, 1),
];

/// 内圈 4 格，方向与外圈相同
pub const INNER_RING: [Position; 4] = [
    Position::new_unchecked(1, 1),
    Position::new_unchecked(2, 1),
    Position::new_unchecked(2, 2),
    Position::new_unchecked(1, 2),
];

/// 正交方向（上、下、左、右），高亮顺序即此顺序
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
