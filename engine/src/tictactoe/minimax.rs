use super::board::Board;
use super::types::Mark;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

/// Optimal move for `bot_mark` by exhaustive search.
///
/// Cells are tried in ascending order and only a strictly better score
/// replaces the current pick, so ties resolve to the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.empty_cells() {
        let mut next = *board;
        if next.place(index, bot_mark).is_err() {
            continue;
        }

        let score = minimax(&next, 0, false, bot_mark);
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Score of `board` from `bot_mark`'s point of view.
///
/// `is_maximizing` says whose turn it is on `board`: the bot's when true.
/// A finished game scores `10 - depth` for a bot win and `depth - 10` for a
/// loss, so quicker wins and slower losses rank higher. Draws score 0.
pub(crate) fn minimax(board: &Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if check_win(board).is_some() {
        // whoever just moved made the line
        return if is_maximizing {
            -WIN_SCORE + depth
        } else {
            WIN_SCORE - depth
        };
    }

    if board.is_full() {
        return 0;
    }

    let mark = if is_maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };

    let scores = board.empty_cells().into_iter().filter_map(|index| {
        let mut next = *board;
        next.place(index, mark).ok()?;
        Some(minimax(&next, depth + 1, !is_maximizing, bot_mark))
    });

    let best = if is_maximizing {
        scores.max()
    } else {
        scores.min()
    };
    best.unwrap_or(0)
}
