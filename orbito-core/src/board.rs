//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Player, Position};
use crate::constants::{BOARD_SIZE, CELL_COUNT, INNER_RING, ORTHOGONAL_DIRECTIONS, OUTER_RING};

/// 连线（四子相同即获胜）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// 第 n 行
    Row(u8),
    /// 第 n 列
    Column(u8),
    /// 主对角线 (0,0)-(3,3)
    Diagonal,
    /// 副对角线 (0,3)-(3,0)
    AntiDiagonal,
}

impl Line {
    /// 全部 10 条连线，按判定顺序：行、列、主对角线、副对角线
    pub fn all() -> [Line; 10] {
        [
            Line::Row(0),
            Line::Row(1),
            Line::Row(2),
            Line::Row(3),
            Line::Column(0),
            Line::Column(1),
            Line::Column(2),
            Line::Column(3),
            Line::Diagonal,
            Line::AntiDiagonal,
        ]
    }

    /// 连线经过的四个位置
    pub fn positions(&self) -> [Position; BOARD_SIZE] {
        std::array::from_fn(|i| {
            let i = i as u8;
            let last = BOARD_SIZE as u8 - 1;
            match *self {
                Line::Row(row) => Position::new_unchecked(row, i),
                Line::Column(col) => Position::new_unchecked(i, col),
                Line::Diagonal => Position::new_unchecked(i, i),
                Line::AntiDiagonal => Position::new_unchecked(i, last - i),
            }
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {}", row),
            Line::Column(col) => write!(f, "column {}", col),
            Line::Diagonal => f.write_str("diagonal"),
            Line::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

/// 棋盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// 4x4 棋盘，索引为 row * 4 + col
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// 获取指定位置的格子
    pub fn get(&self, pos: Position) -> Cell {
        if pos.is_valid() {
            self.cells[pos.to_index()]
        } else {
            Cell::Empty
        }
    }

    /// 设置指定位置的格子
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if pos.is_valid() {
            self.cells[pos.to_index()] = cell;
        }
    }

    /// 移动棋子（不检查规则），返回被移动的格子内容
    pub fn move_stone(&mut self, from: Position, to: Position) -> Cell {
        let stone = self.get(from);
        self.set(from, Cell::Empty);
        self.set(to, stone);
        stone
    }

    /// 将一圈格子沿列表方向移动一步：每格取前一格的值，首格取末格的值
    pub fn rotate_ring(&mut self, ring: &[Position]) {
        let Some(&last) = ring.last() else {
            return;
        };

        let carried = self.get(last);
        for i in (1..ring.len()).rev() {
            let previous = self.get(ring[i - 1]);
            self.set(ring[i], previous);
        }
        self.set(ring[0], carried);
    }

    /// 同时旋转外圈和内圈
    pub fn rotate_rings(&mut self) {
        self.rotate_ring(&OUTER_RING);
        self.rotate_ring(&INNER_RING);
    }

    /// 查找第一条四子相同的连线，返回连线和棋子颜色
    pub fn find_line(&self) -> Option<(Line, Player)> {
        Line::all().into_iter().find_map(|line| {
            let [first, rest @ ..] = line.positions();
            let owner = self.get(first).player()?;
            rest.iter()
                .all(|&pos| self.get(pos) == owner.stone())
                .then_some((line, owner))
        })
    }

    /// 棋盘是否已满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// 统计某种格子的数量
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// 获取正交相邻的空格（上、下、左、右顺序）
    pub fn empty_neighbours(&self, pos: Position) -> Vec<Position> {
        ORTHOGONAL_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&to| self.get(to).is_empty())
            .collect()
    }

    /// 按行优先遍历所有格子
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(move |pos| (pos, self.get(pos)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            let line: Vec<String> = (0..BOARD_SIZE as u8)
                .map(|col| {
                    self.get(Position::new_unchecked(row, col))
                        .to_notation_char()
                        .unwrap_or('.')
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new_unchecked(row, col)
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.count(Cell::Empty), CELL_COUNT);
        assert!(!board.is_full());
        assert!(board.find_line().is_none());
    }

    #[test]
    fn test_iter_row_major() {
        let mut board = Board::empty();
        board.set(pos(0, 1), Cell::Black);
        board.set(pos(3, 2), Cell::White);

        let cells: Vec<(Position, Cell)> = board.iter().collect();
        assert_eq!(cells.len(), CELL_COUNT);
        assert_eq!(cells[0], (pos(0, 0), Cell::Empty));
        assert_eq!(cells[1], (pos(0, 1), Cell::Black));
        assert_eq!(cells[4].0, pos(1, 0));
        assert_eq!(cells[14], (pos(3, 2), Cell::White));
    }

    #[test]
    fn test_move_stone() {
        let mut board = Board::empty();
        board.set(pos(1, 1), Cell::White);

        let moved = board.move_stone(pos(1, 1), pos(1, 2));
        assert_eq!(moved, Cell::White);
        assert!(board.get(pos(1, 1)).is_empty());
        assert_eq!(board.get(pos(1, 2)), Cell::White);
    }

    #[test]
    fn test_rotate_outer_ring_one_step() {
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(0, 1), Cell::White);

        board.rotate_ring(&OUTER_RING);

        // (0,0) 的值移到 (1,0)，末格 (0,1) 的值移到首格 (0,0)
        assert_eq!(board.get(pos(1, 0)), Cell::Black);
        assert_eq!(board.get(pos(0, 0)), Cell::White);
        assert!(board.get(pos(0, 1)).is_empty());
        assert_eq!(board.count(Cell::Empty), CELL_COUNT - 2);
    }

    #[test]
    fn test_rotate_inner_ring_one_step() {
        let mut board = Board::empty();
        board.set(pos(1, 1), Cell::Black);
        board.set(pos(1, 2), Cell::White);

        board.rotate_ring(&INNER_RING);

        assert_eq!(board.get(pos(2, 1)), Cell::Black);
        assert_eq!(board.get(pos(1, 1)), Cell::White);
        assert!(board.get(pos(1, 2)).is_empty());
    }

    #[test]
    fn test_rotate_rings_do_not_mix() {
        let mut board = Board::empty();
        board.set(pos(0, 3), Cell::Black);
        board.set(pos(2, 2), Cell::White);

        board.rotate_rings();

        assert_eq!(board.get(pos(0, 2)), Cell::Black);
        assert_eq!(board.get(pos(1, 2)), Cell::White);
        assert_eq!(board.count(Cell::Black), 1);
        assert_eq!(board.count(Cell::White), 1);
    }

    #[test]
    fn test_ring_cycle_closure() {
        let mut board = Board::empty();
        for (i, &p) in OUTER_RING.iter().enumerate() {
            board.set(p, if i % 3 == 0 { Cell::Black } else { Cell::White });
        }
        board.set(pos(0, 0), Cell::Empty);
        board.set(pos(1, 1), Cell::Black);
        board.set(pos(2, 1), Cell::White);
        let original = board;

        // 外圈转 12 次回到原样
        for i in 0..OUTER_RING.len() {
            board.rotate_ring(&OUTER_RING);
            if i < OUTER_RING.len() - 1 {
                assert_ne!(board, original);
            }
        }
        assert_eq!(board, original);

        // 内圈转 4 次回到原样
        for _ in 0..INNER_RING.len() {
            board.rotate_ring(&INNER_RING);
        }
        assert_eq!(board, original);

        // 整体转 12 次（内圈转了 3 个整周）回到原样
        for _ in 0..12 {
            board.rotate_rings();
        }
        assert_eq!(board, original);
    }

    #[test]
    fn test_find_line_row() {
        let mut board = Board::empty();
        for col in 0..4 {
            board.set(pos(0, col), Cell::Black);
        }
        assert_eq!(board.find_line(), Some((Line::Row(0), Player::Black)));
    }

    #[test]
    fn test_find_line_column() {
        let mut board = Board::empty();
        for row in 0..4 {
            board.set(pos(row, 2), Cell::White);
        }
        assert_eq!(board.find_line(), Some((Line::Column(2), Player::White)));
    }

    #[test]
    fn test_find_line_diagonals() {
        let mut board = Board::empty();
        for i in 0..4 {
            board.set(pos(i, i), Cell::White);
        }
        assert_eq!(board.find_line(), Some((Line::Diagonal, Player::White)));

        let mut board = Board::empty();
        for i in 0..4 {
            board.set(pos(i, 3 - i), Cell::Black);
        }
        assert_eq!(board.find_line(), Some((Line::AntiDiagonal, Player::Black)));
    }

    #[test]
    fn test_find_line_mixed() {
        let mut board = Board::empty();
        board.set(pos(2, 0), Cell::Black);
        board.set(pos(2, 1), Cell::Black);
        board.set(pos(2, 2), Cell::White);
        board.set(pos(2, 3), Cell::Black);
        assert!(board.find_line().is_none());

        // 三子加空格也不算
        board.set(pos(2, 2), Cell::Empty);
        assert!(board.find_line().is_none());
    }

    #[test]
    fn test_find_line_scan_order() {
        // 行和列同时成线时先报告行
        let mut board = Board::empty();
        for i in 0..4 {
            board.set(pos(1, i), Cell::White);
            board.set(pos(i, 2), Cell::White);
        }
        assert_eq!(board.find_line(), Some((Line::Row(1), Player::White)));

        // 列和副对角线同时成线时先报告列
        let mut board = Board::empty();
        for i in 0..4 {
            board.set(pos(i, 1), Cell::Black);
            board.set(pos(i, 3 - i), Cell::Black);
        }
        assert_eq!(board.find_line(), Some((Line::Column(1), Player::Black)));
    }

    #[test]
    fn test_empty_neighbours() {
        let mut board = Board::empty();
        board.set(pos(1, 1), Cell::Black);
        board.set(pos(0, 1), Cell::White);

        // 上方被占，剩下、左、右
        assert_eq!(
            board.empty_neighbours(pos(1, 1)),
            vec![pos(2, 1), pos(1, 0), pos(1, 2)]
        );

        // 角落只有两个方向
        assert_eq!(board.empty_neighbours(pos(3, 3)), vec![pos(2, 3), pos(3, 2)]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::empty();
        for (i, p) in Position::all().enumerate() {
            board.set(p, if i % 2 == 0 { Cell::Black } else { Cell::White });
        }
        assert!(board.is_full());

        board.set(pos(3, 3), Cell::Empty);
        assert!(!board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(3, 3), Cell::White);
        assert_eq!(board.to_string(), "B . . .\n. . . .\n. . . .\n. . . W\n");
    }

    #[test]
    fn test_line_positions() {
        assert_eq!(
            Line::AntiDiagonal.positions(),
            [pos(0, 3), pos(1, 2), pos(2, 1), pos(3, 0)]
        );
        assert_eq!(
            Line::Column(1).positions(),
            [pos(0, 1), pos(1, 1), pos(2, 1), pos(3, 1)]
        );
    }
}
