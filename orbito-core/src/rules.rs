//! 规则开关
//!
//! 默认值对应经典玩法：移动对方棋子、旋转方获胜、分出结果后不停止。
//! 这几条是否应当调整还没有定论，做成开关后由设置决定。

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Player};

/// 移子阶段可以拿起哪一方的棋子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SelectionRule {
    /// 只能移动对方的棋子
    #[default]
    OpponentStone,
    /// 只能移动自己的棋子
    OwnStone,
}

impl SelectionRule {
    /// 当前玩家能否拿起该格的棋子
    pub fn allows(&self, cell: Cell, mover: Player) -> bool {
        match cell.player() {
            None => false,
            Some(owner) => match self {
                SelectionRule::OpponentStone => owner != mover,
                SelectionRule::OwnStone => owner == mover,
            },
        }
    }
}

/// 旋转后成线时判谁获胜
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WinnerRule {
    /// 执行旋转的玩家获胜，不论连线颜色
    #[default]
    RotatingPlayer,
    /// 连线棋子的颜色获胜
    LineColour,
}

impl WinnerRule {
    /// 根据规则决定胜者
    pub fn winner(&self, rotating: Player, line_owner: Player) -> Player {
        match self {
            WinnerRule::RotatingPlayer => rotating,
            WinnerRule::LineColour => line_owner,
        }
    }
}

/// 规则集
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// 移子规则
    pub selection: SelectionRule,
    /// 胜者判定
    pub winner: WinnerRule,
    /// 分出胜负或和棋后是否停止接受操作
    pub halt_on_outcome: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = RuleSet::default();
        assert_eq!(rules.selection, SelectionRule::OpponentStone);
        assert_eq!(rules.winner, WinnerRule::RotatingPlayer);
        assert!(!rules.halt_on_outcome);
    }

    #[test]
    fn test_selection_rule() {
        let rule = SelectionRule::OpponentStone;
        assert!(rule.allows(Cell::White, Player::Black));
        assert!(!rule.allows(Cell::Black, Player::Black));
        assert!(!rule.allows(Cell::Empty, Player::Black));

        let rule = SelectionRule::OwnStone;
        assert!(rule.allows(Cell::Black, Player::Black));
        assert!(!rule.allows(Cell::White, Player::Black));
        assert!(!rule.allows(Cell::Empty, Player::White));
    }

    #[test]
    fn test_winner_rule() {
        assert_eq!(
            WinnerRule::RotatingPlayer.winner(Player::Black, Player::White),
            Player::Black
        );
        assert_eq!(
            WinnerRule::LineColour.winner(Player::Black, Player::White),
            Player::White
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: RuleSet = serde_json::from_str(r#"{ "winner": "LineColour" }"#).unwrap();
        assert_eq!(rules.winner, WinnerRule::LineColour);
        assert_eq!(rules.selection, SelectionRule::OpponentStone);
        assert!(!rules.halt_on_outcome);
    }
}
