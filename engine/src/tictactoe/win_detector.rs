use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals. Detection scans in this order.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// First completed line in enumeration order, so synthetic boards holding two
/// completed lines still get a well-defined answer.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some((mark, *line))
    })
}

pub fn is_draw(board: &Board) -> bool {
    check_win(board).is_none() && board.is_full()
}
