use super::Board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a board square (0-8, row-major).
    SquareClicked(usize),
    /// User clicked restart.
    RestartClicked,
    /// User picked an entry from the move list.
    StepSelected(usize),
    /// Replace state with previously persisted history.
    Restore {
        history: Vec<Board>,
        current_step: usize,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
