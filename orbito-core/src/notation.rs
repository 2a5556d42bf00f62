//! 局面表示法
//!
//! 格式：`<棋盘> <走子方> <阶段>`
//!
//! - 棋盘：4 行以 `/` 分隔，自上而下；`B` 黑子，`W` 白子，数字 1-4 表示连续空格
//! - 走子方：`b` 或 `w`，省略时为黑方
//! - 阶段：`drop`、`rotate` 或 `move`，省略时为 `drop`
//!
//! 示例：`B2W/4/1WB1/4 w move`

use crate::board::Board;
use crate::cell::{Cell, Player, Position};
use crate::constants::BOARD_SIZE;
use crate::engine::{GameEngine, Phase};
use crate::error::{OrbitoError, Result};

/// 开局局面
pub const INITIAL_NOTATION: &str = "4/4/4/4 b drop";

/// 局面表示法处理
pub struct Notation;

impl Notation {
    /// 解析局面表示法
    pub fn parse(notation: &str) -> Result<(Board, Player, Phase)> {
        let parts: Vec<&str> = notation.split_whitespace().collect();
        if parts.is_empty() {
            return Err(invalid("Empty notation string"));
        }
        if parts.len() > 3 {
            return Err(invalid(format!("Expected at most 3 fields, got {}", parts.len())));
        }

        let board = Self::parse_board(parts[0])?;

        let player = match parts.get(1) {
            Some(field) => {
                let mut chars = field.chars();
                match (chars.next().and_then(Player::from_notation_char), chars.next()) {
                    (Some(player), None) => player,
                    _ => return Err(invalid(format!("Invalid player: {}", field))),
                }
            }
            None => Player::Black,
        };

        let phase = match parts.get(2) {
            Some(field) => Phase::from_notation(&field.to_ascii_lowercase())
                .ok_or_else(|| invalid(format!("Invalid phase: {}", field)))?,
            None => Phase::AwaitingDrop,
        };

        Ok((board, player, phase))
    }

    /// 解析棋盘部分
    pub fn parse_board(board_str: &str) -> Result<Board> {
        let mut board = Board::empty();
        let ranks: Vec<&str> = board_str.split('/').collect();

        if ranks.len() != BOARD_SIZE {
            return Err(invalid(format!(
                "Expected {} ranks, got {}",
                BOARD_SIZE,
                ranks.len()
            )));
        }

        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;

            for c in rank.chars() {
                if col >= BOARD_SIZE {
                    return Err(invalid(format!("Rank {} has too many columns", row)));
                }

                if let Some(empty_count) = c.to_digit(10).filter(|n| (1..=4).contains(n)) {
                    col += empty_count as usize;
                } else if let Some(cell) = Cell::from_notation_char(c) {
                    board.set(Position::new_unchecked(row as u8, col as u8), cell);
                    col += 1;
                } else {
                    return Err(invalid(format!("Invalid cell character: {}", c)));
                }
            }

            if col != BOARD_SIZE {
                return Err(invalid(format!(
                    "Rank {} has {} columns, expected {}",
                    row, col, BOARD_SIZE
                )));
            }
        }

        Ok(board)
    }

    /// 将引擎当前局面转换为表示法（不含选中状态）
    pub fn to_string(engine: &GameEngine) -> String {
        format!(
            "{} {} {}",
            Self::board_to_string(engine.board()),
            engine.current_player().to_notation_char(),
            engine.phase().to_notation()
        )
    }

    /// 将棋盘转换为表示法棋盘部分
    pub fn board_to_string(board: &Board) -> String {
        let mut ranks = Vec::with_capacity(BOARD_SIZE);

        for row in 0..BOARD_SIZE as u8 {
            let mut rank = String::new();
            let mut empty_count = 0;

            for col in 0..BOARD_SIZE as u8 {
                match board.get(Position::new_unchecked(row, col)).to_notation_char() {
                    Some(c) => {
                        if empty_count > 0 {
                            rank.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        rank.push(c);
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                rank.push_str(&empty_count.to_string());
            }

            ranks.push(rank);
        }

        ranks.join("/")
    }
}

fn invalid(reason: impl Into<String>) -> OrbitoError {
    OrbitoError::InvalidNotation {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSet;

    #[test]
    fn test_parse_initial() {
        let (board, player, phase) = Notation::parse(INITIAL_NOTATION).unwrap();
        assert_eq!(board, Board::empty());
        assert_eq!(player, Player::Black);
        assert_eq!(phase, Phase::AwaitingDrop);
    }

    #[test]
    fn test_parse_custom() {
        let (board, player, phase) = Notation::parse("B2W/4/1WB1/4 w move").unwrap();

        assert_eq!(player, Player::White);
        assert_eq!(phase, Phase::AwaitingMove);
        assert_eq!(board.get(Position::new_unchecked(0, 0)), Cell::Black);
        assert_eq!(board.get(Position::new_unchecked(0, 3)), Cell::White);
        assert_eq!(board.get(Position::new_unchecked(2, 1)), Cell::White);
        assert_eq!(board.get(Position::new_unchecked(2, 2)), Cell::Black);
        assert_eq!(board.count(Cell::Empty), 12);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let (_, player, phase) = Notation::parse("4/4/2B1/4").unwrap();
        assert_eq!(player, Player::Black);
        assert_eq!(phase, Phase::AwaitingDrop);

        let (_, player, phase) = Notation::parse("4/4/2B1/4 w").unwrap();
        assert_eq!(player, Player::White);
        assert_eq!(phase, Phase::AwaitingDrop);
    }

    #[test]
    fn test_to_string() {
        let engine = GameEngine::new();
        assert_eq!(Notation::to_string(&engine), INITIAL_NOTATION);

        let notation = "W1BW/4/B3/2WW w rotate";
        let engine = GameEngine::from_notation(notation, RuleSet::default()).unwrap();
        assert_eq!(Notation::to_string(&engine), notation);
    }

    #[test]
    fn test_invalid_notation() {
        // 行数不对
        assert!(Notation::parse("4/4/4").is_err());
        // 列数不对
        assert!(Notation::parse("5/4/4/4").is_err());
        assert!(Notation::parse("BBBBB/4/4/4").is_err());
        assert!(Notation::parse("3/4/4/4").is_err());
        // 无效字符
        assert!(Notation::parse("X3/4/4/4").is_err());
        // 无效走子方和阶段
        assert!(Notation::parse("4/4/4/4 r").is_err());
        assert!(Notation::parse("4/4/4/4 bw").is_err());
        assert!(Notation::parse("4/4/4/4 b jump").is_err());
        // 多余字段
        assert!(Notation::parse("4/4/4/4 b drop 1").is_err());
        assert!(Notation::parse("   ").is_err());
    }

    #[test]
    fn test_invalid_reason() {
        let err = Notation::parse("4/4/4").unwrap_err();
        assert_eq!(
            err,
            OrbitoError::InvalidNotation {
                reason: "Expected 4 ranks, got 3".to_string()
            }
        );
    }
}
