use crate::scoreboard::Scoreboard;
use tictactoe_engine::tictactoe::{
    Board, CELL_COUNT, GameMode, GameStatus, GameBroadcaster, Mark, Outcome, TicTacToeSession,
    WinningLine,
};

const ROW_SEPARATOR: &str = "---+---+---";

/// Draws the grid. Free cells show their 1-based key, the winning line is
/// bracketed.
pub fn render_board(board: &Board, winning_line: Option<WinningLine>) -> String {
    let mut rows = Vec::with_capacity(3);
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let symbol = match board.get(index) {
                    Some(mark) => mark.symbol(),
                    None => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                };
                if winning_line.is_some_and(|line| line.contains(index)) {
                    format!("[{}]", symbol)
                } else {
                    format!(" {} ", symbol)
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }
    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

pub fn status_line(status: GameStatus, mode: GameMode) -> String {
    match status {
        GameStatus::AwaitingMove(Mark::O) if mode == GameMode::Computer => {
            "Computer's turn".to_string()
        }
        GameStatus::AwaitingMove(mark) => format!("Player {}'s turn", mark),
        GameStatus::GameOver(Outcome::Win { mark, .. }) => format!("Player {} wins!", mark),
        GameStatus::GameOver(Outcome::Draw) => "It's a draw!".to_string(),
    }
}

pub fn render_session<B: GameBroadcaster>(session: &TicTacToeSession<B>) -> String {
    let state = session.game_state();
    let mut header = format!("Mode: {}", session.mode());
    if session.mode() == GameMode::Computer {
        header.push_str(&format!(" | Difficulty: {}", session.difficulty()));
    }
    format!(
        "{}\n\n{}\n\n{}",
        header,
        render_board(state.board(), state.winning_line()),
        status_line(state.status(), session.mode())
    )
}

pub fn render_scoreboard(scoreboard: &Scoreboard) -> String {
    let stats = &scoreboard.statistics;
    format!(
        "Score: X {} - O {}\n\
         Against the computer: {} played, {} won, {} lost, {} drawn\n\
         Win rate: {}% | Current streak: {} | Best streak: {}",
        scoreboard.scores.get(Mark::X),
        scoreboard.scores.get(Mark::O),
        stats.games_played,
        stats.wins,
        stats.losses,
        stats.draws,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    )
}

pub fn help_text() -> String {
    format!(
        "Commands:\n  \
         1-{}        place a mark on that cell\n  \
         r          start a new game\n  \
         m          switch between two player and computer mode\n  \
         d <level>  set difficulty (easy, medium, hard, expert)\n  \
         s          show statistics\n  \
         h          show this help\n  \
         q          quit",
        CELL_COUNT
    )
}
