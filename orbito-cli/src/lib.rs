//! Orbito 终端
//!
//! 包含:
//! - 命令解析
//! - 棋盘文本渲染
//! - 交互循环
//! - 设置加载与保存

pub mod command;
pub mod render;
pub mod settings;
pub mod shell;

pub use command::{Command, CommandError};
pub use render::BoardRenderer;
pub use settings::{LoadStatus, LogLevel, Settings, StoneSymbols};
pub use shell::Shell;
