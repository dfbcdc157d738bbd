mod board;
mod bot_controller;
mod events;
mod game_state;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, NoMoveAvailable, calculate_move, find_winning_move};
pub use events::{GameBroadcaster, GameEvent};
pub use game_state::{GameStatus, TicTacToeGameState};
pub use minimax::calculate_minimax_move;
pub use session::{
    COMPUTER_MARK, HUMAN_MARK, SessionError, TicTacToeSession, TicTacToeSessionSettings,
};
pub use types::{
    CELL_COUNT, CENTER, CORNERS, Difficulty, GameMode, InvalidMove, Mark, Outcome, WinningLine,
};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, is_draw};
