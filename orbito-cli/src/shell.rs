//! 交互循环
//!
//! 逐行读取命令，调用引擎，每条对局命令之后重新输出棋盘。
//! 不合法的操作由引擎静默忽略，这里只负责显示结果。

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use orbito_core::{GameEngine, Notation, OrbitoError, Phase};
use tracing::{debug, info};

use crate::command::{Command, HELP};
use crate::render::BoardRenderer;
use crate::settings::Settings;

/// 终端会话
pub struct Shell<R, W> {
    engine: GameEngine,
    settings: Settings,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// 以设置中的规则开始新对局
    pub fn new(settings: Settings, input: R, output: W) -> Self {
        Self {
            engine: GameEngine::with_rules(settings.rules),
            settings,
            input,
            output,
        }
    }

    /// 引擎
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// 运行到 `quit` 或输入结束
    pub fn run(&mut self) -> Result<()> {
        self.render(None)?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("读取输入失败")?;
            if read == 0 {
                debug!("input closed");
                break;
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match trimmed.parse::<Command>() {
                Ok(command) => {
                    if !self.execute(command)? {
                        break;
                    }
                }
                Err(e) => writeln!(self.output, "error: {}", e)?,
            }
        }

        self.output.flush().context("刷新输出失败")?;
        info!("session ended");
        Ok(())
    }

    /// 执行一条命令，返回是否继续会话
    pub fn execute(&mut self, command: Command) -> Result<bool> {
        debug!(?command, "executing");
        let is_rotate = matches!(command, Command::Rotate);

        let applied = match command {
            Command::Drop { row, col } => self.engine.drop_stone(row, col),
            Command::Select { row, col } => self.engine.select_for_move(row, col),
            Command::Move { row, col } => self.engine.move_to(row, col),
            Command::Click { row, col } => self.click(row, col),
            Command::Rotate => Ok(self.engine.rotate()),
            Command::Reset => {
                self.engine.reset();
                Ok(true)
            }
            Command::Load(notation) => {
                GameEngine::from_notation(&notation, self.settings.rules).map(|engine| {
                    self.engine = engine;
                    true
                })
            }
            Command::Show => {
                writeln!(self.output, "{}", Notation::to_string(&self.engine))?;
                return Ok(true);
            }
            Command::Help => {
                writeln!(self.output, "{}", HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        };

        match applied {
            Ok(applied) => {
                let announcement = if applied && is_rotate {
                    BoardRenderer::announcement(
                        self.engine.outcome(),
                        self.engine.winning_line(),
                    )
                } else {
                    None
                };
                self.render(announcement)?;
            }
            Err(e) => writeln!(self.output, "error: {}", e)?,
        }
        Ok(true)
    }

    /// 按当前阶段解释一次格子点击
    fn click(&mut self, row: usize, col: usize) -> Result<bool, OrbitoError> {
        match self.engine.phase() {
            Phase::AwaitingDrop => self.engine.drop_stone(row, col),
            Phase::AwaitingMove if self.engine.selection().is_none() => {
                self.engine.select_for_move(row, col)
            }
            Phase::AwaitingMove => self.engine.move_to(row, col),
            // 旋转只能通过 rotate 命令
            Phase::AwaitingRotate => Ok(false),
        }
    }

    fn render(&mut self, announcement: Option<String>) -> Result<()> {
        let renderer = BoardRenderer::new(&self.settings);
        write!(self.output, "{}", renderer.board(&self.engine))?;
        if let Some(text) = announcement {
            writeln!(self.output, "{}", text)?;
        }
        write!(self.output, "{}", renderer.status(&self.engine))?;
        Ok(())
    }
}
