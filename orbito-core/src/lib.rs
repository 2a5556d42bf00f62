//! Orbito 规则引擎
//!
//! 包含:
//! - 棋子、棋盘、位置等核心数据结构
//! - 阶段状态机（落子 → 旋转 → 移子）
//! - 棋盘旋转与胜负/和棋判定
//! - 局面表示法（用于测试与终端加载局面）

mod board;
mod cell;
mod constants;
mod engine;
mod error;
mod notation;
mod rules;

pub use board::{Board, Line};
pub use cell::{Cell, Player, Position};
pub use constants::*;
pub use engine::{GameEngine, Outcome, Phase};
pub use error::{OrbitoError, Result};
pub use notation::{Notation, INITIAL_NOTATION};
pub use rules::{RuleSet, SelectionRule, WinnerRule};
