use super::board::Board;
use super::events::GameEvent;
use super::types::{InvalidMove, Mark, Outcome, WinningLine};
use super::win_detector::check_win_with_line;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove(Mark),
    GameOver(Outcome),
}

/// The authoritative game. Only [`submit_move`](Self::submit_move) and
/// [`reset`](Self::reset) change it.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingMove(Mark::X),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `None` once the game is over.
    pub fn active_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::AwaitingMove(mark) => Some(mark),
            GameStatus::GameOver(_) => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::GameOver(outcome) => Some(outcome),
            GameStatus::AwaitingMove(_) => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.outcome() {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Places `mark` at `index` and returns the resulting events in order.
    ///
    /// On error nothing changes.
    pub fn submit_move(&mut self, index: usize, mark: Mark) -> Result<Vec<GameEvent>, InvalidMove> {
        let expected = match self.status {
            GameStatus::AwaitingMove(expected) => expected,
            GameStatus::GameOver(_) => return Err(InvalidMove::GameOver),
        };

        if mark != expected {
            return Err(InvalidMove::WrongTurn { expected, got: mark });
        }

        self.board.place(index, mark)?;
        self.last_move = Some(index);

        let mut events = vec![GameEvent::MoveApplied { index, mark }];

        if let Some((winner, line)) = check_win_with_line(&self.board) {
            self.status = GameStatus::GameOver(Outcome::Win { mark: winner, line });
            events.push(GameEvent::GameWon { mark: winner, line });
        } else if self.board.is_full() {
            self.status = GameStatus::GameOver(Outcome::Draw);
            events.push(GameEvent::GameDraw);
        } else {
            let next = mark.opponent();
            self.status = GameStatus::AwaitingMove(next);
            events.push(GameEvent::TurnChanged { mark: next });
        }

        Ok(events)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::AwaitingMove(Mark::X);
        self.last_move = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::win_detector::{check_win, is_draw};

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for &index in moves {
            let mark = state.active_mark().unwrap();
            events.extend(state.submit_move(index, mark).unwrap());
        }
        events
    }

    #[test]
    fn test_new_game_awaits_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.status(), GameStatus::AwaitingMove(Mark::X));
        assert_eq!(state.board(), &Board::new());
        assert!(!state.is_game_over());
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut state = TicTacToeGameState::new();
        let events = state.submit_move(4, Mark::X).unwrap();
        assert_eq!(
            events,
            vec![
                GameEvent::MoveApplied { index: 4, mark: Mark::X },
                GameEvent::TurnChanged { mark: Mark::O },
            ]
        );
        assert_eq!(state.active_mark(), Some(Mark::O));
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_wrong_mark_is_rejected() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(
            state.submit_move(0, Mark::O),
            Err(InvalidMove::WrongTurn {
                expected: Mark::X,
                got: Mark::O
            })
        );
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_occupied_and_out_of_range_leave_state_unchanged() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[4]);
        let board_before = *state.board();

        assert_eq!(
            state.submit_move(4, Mark::O),
            Err(InvalidMove::CellOccupied { index: 4 })
        );
        assert_eq!(
            state.submit_move(12, Mark::O),
            Err(InvalidMove::OutOfRange { index: 12 })
        );
        assert_eq!(state.board(), &board_before);
        assert_eq!(state.active_mark(), Some(Mark::O));
        assert_eq!(state.last_move(), Some(4));
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = TicTacToeGameState::new();
        let events = play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameWon {
                mark: Mark::X,
                line: WinningLine([0, 1, 2])
            })
        );
        assert_eq!(
            state.outcome(),
            Some(Outcome::Win {
                mark: Mark::X,
                line: WinningLine([0, 1, 2])
            })
        );
        assert_eq!(state.winning_line(), Some(WinningLine([0, 1, 2])));
        assert_eq!(state.active_mark(), None);
    }

    #[test]
    fn test_draw_ends_game() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X
        let events = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(events.last(), Some(&GameEvent::GameDraw));
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert!(is_draw(state.board()));
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let board_before = *state.board();
        assert_eq!(state.submit_move(8, Mark::O), Err(InvalidMove::GameOver));
        assert_eq!(state.submit_move(8, Mark::X), Err(InvalidMove::GameOver));
        assert_eq!(state.board(), &board_before);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        state.reset();
        assert_eq!(state.status(), GameStatus::AwaitingMove(Mark::X));
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.last_move(), None);

        play(&mut state, &[8]);
        state.reset();
        assert_eq!(state.status(), GameStatus::AwaitingMove(Mark::X));
        assert_eq!(state.board(), &Board::new());
    }

    #[test]
    fn test_game_over_matches_board() {
        // walk every legal game and check the controller agrees with the rules
        fn walk(state: &TicTacToeGameState) {
            let board = state.board();
            let finished = check_win(board).is_some() || board.is_full();
            assert_eq!(state.is_game_over(), finished);
            if finished {
                return;
            }
            let mark = state.active_mark().unwrap();
            assert_eq!(board.count(Mark::X) - board.count(Mark::O), usize::from(mark == Mark::O));
            for index in board.empty_cells() {
                let mut next = state.clone();
                let events = next.submit_move(index, mark).unwrap();
                assert_eq!(events[0], GameEvent::MoveApplied { index, mark });
                assert_eq!(next.board().empty_cells().len() + 1, board.empty_cells().len());
                walk(&next);
            }
        }

        walk(&TicTacToeGameState::new());
    }
}
