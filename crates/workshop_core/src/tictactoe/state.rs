use engine_logging::{engine_debug, engine_warn};

use super::board::status_text;
use super::view_model::{GameViewModel, MoveRow};
use super::Board;

/// Move history plus the step currently on display.
///
/// Invariants: `history[0]` is the empty board and
/// `current_step < history.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_step: usize,
    dirty: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            history: vec![Board::empty()],
            current_step: 0,
            dirty: false,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step]
    }

    pub fn view(&self) -> GameViewModel {
        let squares = *self.current_board();
        let next_value = squares.next_value();
        let winner = squares.winner();
        let status = status_text(winner, &squares, next_value);
        let moves = (0..self.history.len())
            .map(|step| MoveRow {
                step,
                label: move_label(step),
                is_current: step == self.current_step,
            })
            .collect();

        GameViewModel {
            squares,
            next_value,
            winner,
            status,
            moves,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn select_square(&mut self, index: usize) -> bool {
        let squares = *self.current_board();
        if index >= Board::CELLS || squares.winner().is_some() || squares.is_occupied(index) {
            engine_debug!(
                "select_square ignored: index={} step={}",
                index,
                self.current_step
            );
            return false;
        }

        let mark = squares.next_value();
        self.history.truncate(self.current_step + 1);
        self.history.push(squares.with_mark(index, mark));
        self.current_step = self.history.len() - 1;
        self.dirty = true;
        engine_debug!(
            "select_square: {} at {} -> step {}",
            mark,
            index,
            self.current_step
        );
        true
    }

    pub(crate) fn restart(&mut self) {
        self.history = vec![Board::empty()];
        self.current_step = 0;
        self.dirty = true;
    }

    pub(crate) fn go_to_step(&mut self, step: usize) -> bool {
        if step >= self.history.len() || step == self.current_step {
            return false;
        }
        self.current_step = step;
        self.dirty = true;
        true
    }

    pub(crate) fn restore(&mut self, history: Vec<Board>, current_step: usize) -> bool {
        if let Err(reason) = validate_history(&history, current_step) {
            engine_warn!("Ignoring persisted game: {}", reason);
            return false;
        }
        self.history = history;
        self.current_step = current_step;
        self.dirty = true;
        true
    }
}

fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{step}")
    }
}

fn validate_history(history: &[Board], current_step: usize) -> Result<(), String> {
    let first = history.first().ok_or("history is empty")?;
    if !first.is_empty() {
        return Err("first board is not empty".into());
    }
    if current_step >= history.len() {
        return Err(format!(
            "step {current_step} out of range for {} boards",
            history.len()
        ));
    }
    if let Some(step) = history
        .windows(2)
        .position(|pair| !is_next_move(&pair[0], &pair[1]))
    {
        return Err(format!("board {} is not one move after board {step}", step + 1));
    }
    Ok(())
}

/// `next` is `previous` plus one mark by the player to move, on an unfinished game.
fn is_next_move(previous: &Board, next: &Board) -> bool {
    if previous.winner().is_some() {
        return false;
    }
    let mut changed = (0..Board::CELLS).filter(|&index| previous.get(index) != next.get(index));
    match (changed.next(), changed.next()) {
        (Some(index), None) => {
            previous.get(index).is_none() && next.get(index) == Some(previous.next_value())
        }
        _ => false,
    }
}
