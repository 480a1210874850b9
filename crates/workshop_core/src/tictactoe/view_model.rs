use super::{Board, Mark};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameViewModel {
    pub squares: Board,
    pub next_value: Mark,
    pub winner: Option<Mark>,
    pub status: String,
    pub moves: Vec<MoveRow>,
}

/// One entry of the time-travel list; the current entry is not selectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRow {
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}
