//! 阶段状态机
//!
//! ```text
//! AwaitingDrop --drop--> AwaitingRotate --rotate--> AwaitingMove --move_to--> AwaitingDrop
//!                                                 ^--select_for_move--(保持 AwaitingMove)
//! ```
//!
//! 不合法的操作（阶段不对、格子被占、不相邻等）一律静默忽略并返回 `Ok(false)`，
//! 调用方可以在每次点击时直接调用，无需事先校验。只有越界坐标返回错误。

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{Board, Line};
use crate::cell::{Cell, Player, Position};
use crate::error::Result;
use crate::notation::Notation;
use crate::rules::RuleSet;

/// 行动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// 等待落子
    #[default]
    AwaitingDrop,
    /// 等待旋转
    AwaitingRotate,
    /// 等待移子（移动一枚棋子到相邻空格）
    AwaitingMove,
}

impl Phase {
    /// 显示名称
    pub fn name(&self) -> &'static str {
        match self {
            Phase::AwaitingDrop => "Drop",
            Phase::AwaitingRotate => "Rotate",
            Phase::AwaitingMove => "Move",
        }
    }

    /// 表示法中的名称
    pub fn to_notation(&self) -> &'static str {
        match self {
            Phase::AwaitingDrop => "drop",
            Phase::AwaitingRotate => "rotate",
            Phase::AwaitingMove => "move",
        }
    }

    /// 从表示法名称解析
    pub fn from_notation(s: &str) -> Option<Phase> {
        match s {
            "drop" => Some(Phase::AwaitingDrop),
            "rotate" => Some(Phase::AwaitingRotate),
            "move" => Some(Phase::AwaitingMove),
            _ => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 最近一次旋转后的对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// 未分胜负
    #[default]
    None,
    /// 获胜
    Win(Player),
    /// 和棋（棋盘已满且无人成线）
    Draw,
}

impl Outcome {
    /// 是否已分出结果
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::None)
    }
}

/// 规则引擎
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    /// 移子阶段已拿起的棋子
    selection: Option<Position>,
    /// 已拿起棋子的可选目标
    highlighted: Vec<Position>,
    outcome: Outcome,
    winning_line: Option<Line>,
    rules: RuleSet,
}

impl GameEngine {
    /// 创建新对局（默认规则）
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    /// 使用指定规则创建新对局
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::from_position(Board::empty(), Player::Black, Phase::AwaitingDrop, rules)
    }

    /// 从指定局面创建（无选中棋子、无结果）
    pub fn from_position(board: Board, current_player: Player, phase: Phase, rules: RuleSet) -> Self {
        Self {
            board,
            current_player,
            phase,
            selection: None,
            highlighted: Vec::new(),
            outcome: Outcome::None,
            winning_line: None,
            rules,
        }
    }

    /// 从局面表示法创建
    pub fn from_notation(notation: &str, rules: RuleSet) -> Result<Self> {
        let (board, current_player, phase) = Notation::parse(notation)?;
        Ok(Self::from_position(board, current_player, phase, rules))
    }

    /// 重置为开局状态，保留规则
    pub fn reset(&mut self) {
        *self = Self::with_rules(self.rules);
        debug!("game reset");
    }

    /// 落子
    pub fn drop_stone(&mut self, row: usize, col: usize) -> Result<bool> {
        let pos = Position::try_new(row, col)?;

        if self.is_halted() || self.phase != Phase::AwaitingDrop || !self.board.get(pos).is_empty() {
            trace!(%pos, phase = %self.phase, "drop ignored");
            return Ok(false);
        }

        self.board.set(pos, self.current_player.stone());
        self.phase = Phase::AwaitingRotate;
        debug!(player = %self.current_player, %pos, "stone dropped");
        Ok(true)
    }

    /// 拿起一枚棋子准备移动
    pub fn select_for_move(&mut self, row: usize, col: usize) -> Result<bool> {
        let pos = Position::try_new(row, col)?;

        if self.is_halted()
            || self.phase != Phase::AwaitingMove
            || self.selection.is_some()
            || !self.rules.selection.allows(self.board.get(pos), self.current_player)
        {
            trace!(%pos, phase = %self.phase, "selection ignored");
            return Ok(false);
        }

        self.selection = Some(pos);
        self.highlighted = self.board.empty_neighbours(pos);
        debug!(
            player = %self.current_player,
            %pos,
            targets = self.highlighted.len(),
            "stone selected"
        );
        Ok(true)
    }

    /// 将已拿起的棋子移到相邻空格
    pub fn move_to(&mut self, row: usize, col: usize) -> Result<bool> {
        let to = Position::try_new(row, col)?;

        let from = match self.selection {
            Some(from) if !self.is_halted() && self.phase == Phase::AwaitingMove => from,
            _ => {
                trace!(%to, phase = %self.phase, "move ignored");
                return Ok(false);
            }
        };

        if !self.board.get(to).is_empty() || !from.is_adjacent(to) {
            trace!(%from, %to, "move target rejected");
            return Ok(false);
        }

        self.board.move_stone(from, to);
        self.selection = None;
        self.highlighted.clear();
        self.phase = Phase::AwaitingDrop;
        debug!(player = %self.current_player, %from, %to, "stone moved");
        Ok(true)
    }

    /// 旋转棋盘，判定结果，然后交换走子方
    pub fn rotate(&mut self) -> bool {
        if self.is_halted() || self.phase != Phase::AwaitingRotate {
            trace!(phase = %self.phase, "rotate ignored");
            return false;
        }

        self.board.rotate_rings();

        let line = self.board.find_line();
        self.winning_line = line.map(|(line, _)| line);
        self.outcome = match line {
            Some((_, owner)) => Outcome::Win(self.rules.winner.winner(self.current_player, owner)),
            None if self.check_draw() => Outcome::Draw,
            None => Outcome::None,
        };

        match self.outcome {
            Outcome::Win(winner) => debug!(%winner, line = ?self.winning_line, "line completed"),
            Outcome::Draw => debug!("board full, draw"),
            Outcome::None => {}
        }

        self.phase = Phase::AwaitingMove;
        // 默认规则下分出结果后仍然交换走子方，对局继续
        if !self.is_halted() {
            self.current_player = self.current_player.opponent();
        }
        debug!(next = %self.current_player, "board rotated");
        true
    }

    /// 最近一次旋转判定的胜者
    ///
    /// 归属在旋转时确定，不随之后的换人改变。
    pub fn check_win(&self) -> Option<Player> {
        match self.outcome {
            Outcome::Win(winner) => Some(winner),
            Outcome::Draw | Outcome::None => None,
        }
    }

    /// 棋盘是否已无空格
    pub fn check_draw(&self) -> bool {
        self.board.is_full()
    }

    /// 获取格子内容
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell> {
        Position::try_new(row, col).map(|pos| self.board.get(pos))
    }

    /// 棋盘
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 当前走子方
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// 当前阶段
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 已拿起的棋子
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// 可选目标格
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    /// 最近一次旋转的结果
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// 最近一次旋转形成的连线
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// 规则
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    fn is_halted(&self) -> bool {
        self.rules.halt_on_outcome && self.outcome.is_decided()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
