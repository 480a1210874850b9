//! Stateless 3x3 board presentation.
use super::{Board, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareButton {
    pub index: usize,
    pub label: &'static str,
}

impl SquareButton {
    /// Forwards this square's index to the game; the game decides whether it counts.
    pub fn click(&self) -> Msg {
        Msg::SquareClicked(self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub squares: [SquareButton; 3],
}

pub fn board_rows(board: &Board) -> [BoardRow; 3] {
    std::array::from_fn(|row| BoardRow {
        squares: std::array::from_fn(|col| {
            let index = row * 3 + col;
            SquareButton {
                index,
                label: board.get(index).map_or("", |mark| mark.as_str()),
            }
        }),
    })
}
