use super::types::{Difficulty, GameMode, InvalidMove, Mark, WinningLine};

/// Everything a front end needs to mirror the game without reading its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied { index: usize, mark: Mark },
    GameWon { mark: Mark, line: WinningLine },
    GameDraw,
    TurnChanged { mark: Mark },
    InvalidMove { reason: InvalidMove },
    GameReset { mode: GameMode, difficulty: Difficulty },
}

pub trait GameBroadcaster {
    fn broadcast(&mut self, event: GameEvent);
}

impl GameBroadcaster for Vec<GameEvent> {
    fn broadcast(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl GameBroadcaster for () {
    fn broadcast(&mut self, _event: GameEvent) {}
}

impl<B: GameBroadcaster + ?Sized> GameBroadcaster for &mut B {
    fn broadcast(&mut self, event: GameEvent) {
        (**self).broadcast(event);
    }
}
