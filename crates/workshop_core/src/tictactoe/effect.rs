use super::Board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write history and step to the persistent store.
    Persist {
        history: Vec<Board>,
        current_step: usize,
    },
}
