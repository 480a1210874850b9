//! Workshop core: pure state machines and view-model helpers for the
//! tic-tac-toe and pokemon-info exercises.
pub mod pokemon;
pub mod tictactoe;
