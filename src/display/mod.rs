//! Outbound render commands.
//!
//! The engine never touches a rendering technology directly. It emits four
//! kinds of command to a `DisplaySink`, in the order they happen:
//!
//! - `render_board`: the full board changed shape or was cleared
//! - `render_cell`: one mark was placed
//! - `set_status_text`: turn or outcome message
//! - `set_score_text`: cumulative scores changed
//!
//! `RecordingSink` captures them as `DisplayEvent`s for tests and for hosts
//! that drain events after each call.

use serde::{Deserialize, Serialize};

use crate::core::{CellValue, Mark};

/// Status shown when a game ends with a full board and no line.
pub const DRAW_TEXT: &str = "Draw!";

/// Status shown while `mark` is to move.
#[must_use]
pub fn turn_text(mark: Mark) -> String {
    format!("Player {}'s turn", mark)
}

/// Status shown when `mark` completes a line.
#[must_use]
pub fn win_text(mark: Mark) -> String {
    format!("Player {} Wins!", mark)
}

/// Receiver for render commands.
pub trait DisplaySink {
    /// Redraw the whole board.
    fn render_board(&mut self, cells: &[CellValue]);

    /// Redraw a single cell.
    fn render_cell(&mut self, index: usize, value: CellValue);

    /// Replace the turn/status line.
    fn set_status_text(&mut self, text: &str);

    /// Replace the score display.
    fn set_score_text(&mut self, x: u32, o: u32);
}

/// A render command as data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayEvent {
    RenderBoard(Vec<CellValue>),
    RenderCell { index: usize, value: CellValue },
    Status(String),
    Score { x: u32, o: u32 },
}

/// Sink that records every command in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<DisplayEvent>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    /// Remove and return all recorded events.
    pub fn take(&mut self) -> Vec<DisplayEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent status text, if any was set.
    pub fn last_status(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            DisplayEvent::Status(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DisplaySink for RecordingSink {
    fn render_board(&mut self, cells: &[CellValue]) {
        self.events.push(DisplayEvent::RenderBoard(cells.to_vec()));
    }

    fn render_cell(&mut self, index: usize, value: CellValue) {
        self.events.push(DisplayEvent::RenderCell { index, value });
    }

    fn set_status_text(&mut self, text: &str) {
        self.events.push(DisplayEvent::Status(text.to_string()));
    }

    fn set_score_text(&mut self, x: u32, o: u32) {
        self.events.push(DisplayEvent::Score { x, o });
    }
}

/// Sink that discards everything, for headless engines.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn render_board(&mut self, _cells: &[CellValue]) {}
    fn render_cell(&mut self, _index: usize, _value: CellValue) {}
    fn set_status_text(&mut self, _text: &str) {}
    fn set_score_text(&mut self, _x: u32, _o: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_texts() {
        assert_eq!(turn_text(Mark::X), "Player X's turn");
        assert_eq!(turn_text(Mark::O), "Player O's turn");
        assert_eq!(win_text(Mark::O), "Player O Wins!");
        assert_eq!(DRAW_TEXT, "Draw!");
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.render_cell(4, CellValue::X);
        sink.set_status_text("Player O's turn");
        sink.set_score_text(1, 0);

        assert_eq!(
            sink.events(),
            &[
                DisplayEvent::RenderCell { index: 4, value: CellValue::X },
                DisplayEvent::Status("Player O's turn".to_string()),
                DisplayEvent::Score { x: 1, o: 0 },
            ]
        );
        assert_eq!(sink.last_status(), Some("Player O's turn"));
    }

    #[test]
    fn test_take_drains() {
        let mut sink = RecordingSink::new();
        sink.render_board(&[CellValue::Empty; 4]);
        assert_eq!(sink.take().len(), 1);
        assert!(sink.events().is_empty());
        assert_eq!(sink.last_status(), None);
    }
}
