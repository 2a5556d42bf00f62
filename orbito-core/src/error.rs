//! 错误类型定义

use thiserror::Error;

/// 规则引擎错误
///
/// 不合法的玩家操作（阶段不对、格子被占等）不是错误，引擎直接忽略；
/// 这里只包含调用方传入了无法解释的数据的情况。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrbitoError {
    /// 坐标超出棋盘
    #[error("Invalid position: ({row}, {col})")]
    InvalidPosition { row: usize, col: usize },

    /// 无效的局面表示
    #[error("Invalid notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 引擎操作结果类型
pub type Result<T> = std::result::Result<T, OrbitoError>;
