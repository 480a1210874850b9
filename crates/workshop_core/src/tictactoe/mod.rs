//! Tic-tac-toe with persisted move history and time travel.
mod board;
mod board_view;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use board::{Board, Mark, WINNING_LINES};
pub use board_view::{board_rows, BoardRow, SquareButton};
pub use effect::Effect;
pub use msg::Msg;
pub use state::GameState;
pub use update::update;
pub use view_model::{GameViewModel, MoveRow};
