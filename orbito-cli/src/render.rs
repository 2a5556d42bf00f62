//! 棋盘文本渲染

use orbito_core::{Cell, GameEngine, Line, Outcome, BOARD_SIZE};

use crate::settings::Settings;

/// 把引擎状态渲染为终端文本
pub struct BoardRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> BoardRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// 渲染棋盘
    pub fn board(&self, engine: &GameEngine) -> String {
        let symbols = &self.settings.symbols;
        let mut out = String::new();

        if self.settings.show_coordinates {
            let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
            out.push_str(&format!("  {}\n", header.join(" ")));
        }

        for (pos, cell) in engine.board().iter() {
            if pos.col == 0 {
                if self.settings.show_coordinates {
                    out.push_str(&format!("{} ", pos.row));
                }
            } else {
                out.push(' ');
            }

            let symbol = match cell {
                Cell::Black => symbols.black,
                Cell::White => symbols.white,
                Cell::Empty
                    if self.settings.show_highlights && engine.highlighted().contains(&pos) =>
                {
                    symbols.highlight
                }
                Cell::Empty => symbols.empty,
            };
            out.push(symbol);

            if usize::from(pos.col) == BOARD_SIZE - 1 {
                out.push('\n');
            }
        }

        out
    }

    /// 走子方与阶段
    pub fn status(&self, engine: &GameEngine) -> String {
        let mut out = format!(
            "{} to move\nAction: {}\n",
            engine.current_player(),
            engine.phase()
        );
        if let Some(selected) = engine.selection() {
            out.push_str(&format!("Selected: {}\n", selected));
        }
        out
    }

    /// 旋转后的结果通告，胜利时附上连线
    pub fn announcement(outcome: Outcome, line: Option<Line>) -> Option<String> {
        match (outcome, line) {
            (Outcome::Win(winner), Some(line)) => Some(format!("{} wins! ({})", winner, line)),
            (Outcome::Win(winner), None) => Some(format!("{} wins!", winner)),
            (Outcome::Draw, _) => Some("It's a draw!".to_string()),
            (Outcome::None, _) => None,
        }
    }
}
