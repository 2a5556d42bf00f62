//! 格子、玩家与位置定义

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::{OrbitoError, Result};

/// 格子内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// 空格
    #[default]
    Empty,
    /// 黑子
    Black,
    /// 白子
    White,
}

impl Cell {
    /// 是否为空格
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// 棋子所属玩家（空格返回 None）
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    /// 获取表示法字符（空格没有单独字符，由数字压缩）
    pub fn to_notation_char(&self) -> Option<char> {
        self.player().map(|player| player.stone_char())
    }

    /// 从表示法字符解析
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            'B' => Some(Cell::Black),
            'W' => Some(Cell::White),
            _ => None,
        }
    }
}

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 黑方（先手）
    Black,
    /// 白方
    White,
}

impl Player {
    /// 获取对方
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// 该玩家的棋子
    pub fn stone(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// 棋盘上的棋子字符
    pub fn stone_char(&self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }

    /// 表示法中的走子方字符
    pub fn to_notation_char(&self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    /// 从走子方字符解析
    pub fn from_notation_char(c: char) -> Option<Player> {
        match c {
            'b' | 'B' => Some(Player::Black),
            'w' | 'W' => Some(Player::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 棋盘位置，原点 (0, 0) 在左上角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// 行 (0-3)，自上而下
    pub row: u8,
    /// 列 (0-3)，自左而右
    pub col: u8,
}

impl Position {
    /// 创建新位置
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// 创建新位置，越界时返回 `InvalidPosition`
    pub fn try_new(row: usize, col: usize) -> Result<Self> {
        Self::new(row, col).ok_or(OrbitoError::InvalidPosition { row, col })
    }

    /// 创建新位置（不检查边界，内部使用）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查位置是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 获取偏移后的位置
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Position> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && col >= 0 {
            Position::new(row as usize, col as usize)
        } else {
            None
        }
    }

    /// 曼哈顿距离
    pub fn manhattan_distance(&self, other: Position) -> u16 {
        u16::from(self.row.abs_diff(other.row)) + u16::from(self.col.abs_diff(other.col))
    }

    /// 是否正交相邻
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// 转换为数组索引（行优先）
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// 从数组索引转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Position {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// 所有位置，行优先
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
