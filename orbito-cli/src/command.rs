//! 命令解析

use std::str::FromStr;

use thiserror::Error;

/// 终端命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 落子
    Drop { row: usize, col: usize },
    /// 拿起棋子
    Select { row: usize, col: usize },
    /// 移动已拿起的棋子
    Move { row: usize, col: usize },
    /// 只给坐标，按当前阶段解释（相当于点击格子）
    Click { row: usize, col: usize },
    /// 旋转棋盘
    Rotate,
    /// 新对局
    Reset,
    /// 输出当前局面表示法
    Show,
    /// 载入局面
    Load(String),
    /// 帮助
    Help,
    /// 退出
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (type `help` for a list)")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    Arity {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

/// 帮助文本
pub const HELP: &str = "\
Commands:
  R C              act on a cell (drop, pick up or move depending on the phase)
  drop R C   (d)   drop a stone
  select R C (s)   pick up a stone to move
  move R C   (m)   move the picked-up stone to an adjacent empty cell
  rotate     (r)   rotate the board
  new | reset      start a new game
  show             print the position notation
  load NOTATION    load a position, e.g. `load B3/4/4/4 w move`
  help       (?)   show this help
  quit       (q)   exit
Rows and columns are numbered 0-3 from the top-left corner.";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        // 纯坐标
        if head.chars().all(|c| c.is_ascii_digit()) {
            let (row, col) = coordinates("R C", &words)?;
            return Ok(Command::Click { row, col });
        }

        let keyword = head.to_ascii_lowercase();
        match keyword.as_str() {
            "drop" | "d" => {
                let (row, col) = coordinates("drop", args)?;
                Ok(Command::Drop { row, col })
            }
            "select" | "s" => {
                let (row, col) = coordinates("select", args)?;
                Ok(Command::Select { row, col })
            }
            "move" | "m" => {
                let (row, col) = coordinates("move", args)?;
                Ok(Command::Move { row, col })
            }
            "rotate" | "r" => no_args("rotate", args, Command::Rotate),
            "new" | "reset" => no_args("new", args, Command::Reset),
            "show" => no_args("show", args, Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "load" => {
                if args.is_empty() {
                    return Err(CommandError::Arity {
                        command: "load",
                        expected: "a position notation",
                    });
                }
                Ok(Command::Load(args.join(" ")))
            }
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

fn no_args(command: &'static str, args: &[&str], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::Arity {
            command,
            expected: "no arguments",
        })
    }
}

fn coordinates(command: &'static str, args: &[&str]) -> Result<(usize, usize), CommandError> {
    let [row, col] = args else {
        return Err(CommandError::Arity {
            command,
            expected: "a row and a column",
        });
    };

    let parse = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| CommandError::InvalidCoordinate(s.to_string()))
    };
    Ok((parse(*row)?, parse(*col)?))
}
