use crate::scoreboard::Scoreboard;
use tictactoe_engine::tictactoe::{CELL_COUNT, GameBroadcaster, GameEvent, GameMode, InvalidMove};

/// Rejections as the player sees them, with cells numbered from 1.
fn describe_invalid_move(reason: InvalidMove) -> String {
    match reason {
        InvalidMove::OutOfRange { .. } => format!("Pick a cell from 1 to {}", CELL_COUNT),
        InvalidMove::CellOccupied { index } => format!("Cell {} is already taken", index + 1),
        InvalidMove::WrongTurn { expected, .. } => format!("Wait for {} to move", expected),
        InvalidMove::GameOver => "The game is over, type r to play again".to_string(),
    }
}

/// Collects what the session reports so the runner can show it, and keeps
/// the scoreboard in step with finished games.
pub struct TerminalBroadcaster {
    mode: GameMode,
    scoreboard: Scoreboard,
    scoreboard_dirty: bool,
    messages: Vec<String>,
}

impl TerminalBroadcaster {
    pub fn new(mode: GameMode, scoreboard: Scoreboard) -> Self {
        Self {
            mode,
            scoreboard,
            scoreboard_dirty: false,
            messages: Vec::new(),
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns `true` once per scoreboard change.
    pub fn take_scoreboard_dirty(&mut self) -> bool {
        std::mem::take(&mut self.scoreboard_dirty)
    }

    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    fn broadcast(&mut self, event: GameEvent) {
        match event {
            GameEvent::GameReset { mode, difficulty } => {
                self.mode = mode;
                self.messages.push(format!(
                    "New game: {} mode, {} difficulty",
                    mode, difficulty
                ));
            }
            GameEvent::InvalidMove { reason } => {
                self.messages.push(describe_invalid_move(reason));
            }
            GameEvent::GameWon { .. } | GameEvent::GameDraw => {
                if self.scoreboard.record(self.mode, &event) {
                    self.scoreboard_dirty = true;
                }
            }
            GameEvent::MoveApplied { .. } | GameEvent::TurnChanged { .. } => {}
        }
    }
}
