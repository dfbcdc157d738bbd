use crate::session_rng::SessionRng;
use crate::{log, log_debug};
use super::bot_controller::{BotInput, NoMoveAvailable, calculate_move};
use super::events::{GameBroadcaster, GameEvent};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, GameMode, InvalidMove, Mark, Outcome};

/// In computer mode the human always plays X.
pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    InvalidMove(InvalidMove),
    NoMoveAvailable(NoMoveAvailable),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidMove(e) => write!(f, "Invalid move: {}", e),
            SessionError::NoMoveAvailable(e) => write!(f, "Bot contract violated: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::InvalidMove(e) => Some(e),
            SessionError::NoMoveAvailable(e) => Some(e),
        }
    }
}

impl From<InvalidMove> for SessionError {
    fn from(e: InvalidMove) -> Self {
        SessionError::InvalidMove(e)
    }
}

impl From<NoMoveAvailable> for SessionError {
    fn from(e: NoMoveAvailable) -> Self {
        SessionError::NoMoveAvailable(e)
    }
}

/// One table: the game, who sits at it and how strong the computer plays.
///
/// Every command reports its consequences to the broadcaster. The delay
/// before a computer reply is left to the caller: check
/// [`is_computer_turn`](Self::is_computer_turn), wait, then call
/// [`play_computer_turn`](Self::play_computer_turn).
pub struct TicTacToeSession<B: GameBroadcaster> {
    game_state: TicTacToeGameState,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng, broadcaster: B) -> Self {
        log_debug!(
            "New session: mode {}, difficulty {}, seed {}",
            settings.mode,
            settings.difficulty,
            rng.seed()
        );
        Self {
            game_state: TicTacToeGameState::new(),
            settings,
            rng,
            broadcaster,
        }
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.settings.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn broadcaster_mut(&mut self) -> &mut B {
        &mut self.broadcaster
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::Computer
            && self.game_state.active_mark() == Some(COMPUTER_MARK)
    }

    /// A human places on `index`: the side to move in two player mode, X
    /// against the computer.
    pub fn submit_move(&mut self, index: usize) -> Result<(), InvalidMove> {
        let mark = match self.settings.mode {
            GameMode::TwoPlayer => self.game_state.active_mark().unwrap_or(HUMAN_MARK),
            GameMode::Computer => HUMAN_MARK,
        };
        self.apply_move(index, mark)
    }

    pub fn play_computer_turn(&mut self) -> Result<usize, SessionError> {
        if self.game_state.is_game_over() {
            return Err(InvalidMove::GameOver.into());
        }
        if !self.is_computer_turn() {
            let expected = self.game_state.active_mark().unwrap_or(HUMAN_MARK);
            return Err(InvalidMove::WrongTurn {
                expected,
                got: COMPUTER_MARK,
            }
            .into());
        }

        let input = BotInput {
            board: *self.game_state.board(),
            bot_mark: COMPUTER_MARK,
        };
        let index = calculate_move(self.settings.difficulty, &input, &mut self.rng)
            .inspect_err(|e| log!("Computer could not move: {}", e))?;

        self.apply_move(index, COMPUTER_MARK)?;
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.game_state.reset();
        self.broadcaster.broadcast(GameEvent::GameReset {
            mode: self.settings.mode,
            difficulty: self.settings.difficulty,
        });
        self.broadcaster
            .broadcast(GameEvent::TurnChanged { mark: Mark::X });
    }

    /// Switching mode always starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        log!("Mode set to {}", mode);
        self.settings.mode = mode;
        self.reset();
    }

    pub fn toggle_mode(&mut self) -> GameMode {
        let mode = self.settings.mode.toggled();
        self.set_mode(mode);
        mode
    }

    /// Changing difficulty always starts a fresh game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log!("Difficulty set to {}", difficulty);
        self.settings.difficulty = difficulty;
        self.reset();
    }

    fn apply_move(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        let events = match self.game_state.submit_move(index, mark) {
            Ok(events) => events,
            Err(reason) => {
                log_debug!("Rejected {} at {}: {}", mark, index, reason);
                self.broadcaster
                    .broadcast(GameEvent::InvalidMove { reason });
                return Err(reason);
            }
        };

        for event in events {
            self.broadcaster.broadcast(event);
        }

        match self.game_state.outcome() {
            Some(Outcome::Win { mark, line }) => {
                log!("{} wins on {:?} ({} mode)", mark, line.cells(), self.settings.mode)
            }
            Some(Outcome::Draw) => log!("Draw ({} mode)", self.settings.mode),
            None => {}
        }
        Ok(())
    }
}
