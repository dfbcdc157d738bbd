use crate::session_rng::SessionRng;
use crate::log_debug;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::calculate_minimax_move;
use super::types::{CENTER, CORNERS, Difficulty, Mark};
use super::win_detector::WINNING_LINES;

const EASY_SMART_MOVE_CHANCE: f64 = 0.3;

/// The bot was asked to move on a board with no empty cell.
///
/// The session never asks for a move once the game is over, so seeing this
/// means a caller broke that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMoveAvailable;

impl std::fmt::Display for NoMoveAvailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No empty cell left for the computer to play")
    }
}

impl std::error::Error for NoMoveAvailable {}

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    /// Snapshot for the side whose turn it is. `None` once the game is over.
    pub fn from_game_state(state: &TicTacToeGameState) -> Option<Self> {
        Some(Self {
            board: *state.board(),
            bot_mark: state.active_mark()?,
        })
    }
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<usize, NoMoveAvailable> {
    if input.board.is_full() {
        return Err(NoMoveAvailable);
    }

    let chosen = match difficulty {
        Difficulty::Easy => calculate_easy_move(input, rng),
        Difficulty::Medium => calculate_heuristic_move(input, false, rng),
        Difficulty::Hard => calculate_heuristic_move(input, true, rng),
        Difficulty::Expert => calculate_minimax_move(&input.board, input.bot_mark),
    };

    log_debug!(
        "{} bot as {} picked {:?} from {:?}",
        difficulty,
        input.bot_mark,
        chosen,
        input.board.empty_cells()
    );
    chosen.ok_or(NoMoveAvailable)
}

fn calculate_easy_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    if rng.random_chance(EASY_SMART_MOVE_CHANCE) {
        return calculate_heuristic_move(input, false, rng);
    }
    calculate_random_move(&input.board, rng)
}

fn calculate_heuristic_move(
    input: &BotInput,
    prefer_threat_corners: bool,
    rng: &mut SessionRng,
) -> Option<usize> {
    let board = &input.board;
    let bot_mark = input.bot_mark;

    if let Some(index) = find_winning_move(board, bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_winning_move(board, bot_mark.opponent()) {
        return Some(index);
    }

    if !board.is_occupied(CENTER) {
        return Some(CENTER);
    }

    let free_corners: Vec<usize> = CORNERS
        .into_iter()
        .filter(|&corner| !board.is_occupied(corner))
        .collect();

    if prefer_threat_corners {
        let threat_corners: Vec<usize> = free_corners
            .iter()
            .copied()
            .filter(|&corner| would_create_threat(board, corner, bot_mark))
            .collect();
        if let Some(corner) = rng.choose(&threat_corners) {
            return Some(corner);
        }
    }

    if let Some(corner) = rng.choose(&free_corners) {
        return Some(corner);
    }

    calculate_random_move(board, rng)
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&board.empty_cells())
}

/// Cell completing a line where `mark` already holds the other two.
///
/// Lines are scanned in fixed order and, within a line, cells in order, so the
/// answer is deterministic when several lines qualify.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    WINNING_LINES.iter().find_map(|line| {
        let cells = line.cells();
        let owned = cells.iter().filter(|&&i| board.get(i) == Some(mark)).count();
        if owned != 2 {
            return None;
        }
        cells.into_iter().find(|&i| !board.is_occupied(i))
    })
}

fn would_create_threat(board: &Board, index: usize, mark: Mark) -> bool {
    let mut hypothetical = *board;
    if hypothetical.place(index, mark).is_err() {
        return false;
    }
    find_winning_move(&hypothetical, mark).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    fn input(cells: [Option<Mark>; 9], bot_mark: Mark) -> BotInput {
        BotInput {
            board: Board::from_cells(cells),
            bot_mark,
        }
    }

    #[test]
    fn test_find_winning_move_completes_row() {
        let board = Board::from_cells([X, X, E, E, E, E, E, E, E]);
        assert_eq!(find_winning_move(&board, Mark::X), Some(2));
        assert_eq!(find_winning_move(&board, Mark::O), None);
    }

    #[test]
    fn test_find_winning_move_for_block() {
        let board = Board::from_cells([X, E, E, O, O, E, X, E, E]);
        assert_eq!(find_winning_move(&board, Mark::O), Some(5));
    }

    #[test]
    fn test_find_winning_move_ignores_blocked_lines() {
        let board = Board::from_cells([X, X, O, E, E, E, E, E, E]);
        assert_eq!(find_winning_move(&board, Mark::X), None);
    }

    #[test]
    fn test_find_winning_move_uses_enumeration_order() {
        // row 0,1,2 and column 0,3,6 both open for X; the row comes first
        let board = Board::from_cells([X, X, E, X, O, E, E, O, E]);
        assert_eq!(find_winning_move(&board, Mark::X), Some(2));
    }

    #[test]
    fn test_heuristics_take_the_win_before_blocking() {
        let bot = input([O, O, E, X, X, E, X, E, E], Mark::O);
        for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
            let mut rng = SessionRng::new(11);
            assert_eq!(calculate_move(difficulty, &bot, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_heuristics_block_the_opponent() {
        let bot = input([X, X, E, E, O, E, E, E, E], Mark::O);
        for difficulty in [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert] {
            let mut rng = SessionRng::new(5);
            assert_eq!(calculate_move(difficulty, &bot, &mut rng), Ok(2));
        }
    }

    #[test]
    fn test_medium_takes_free_center() {
        let bot = input([X, E, E, E, E, E, E, E, E], Mark::O);
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_move(Difficulty::Medium, &bot, &mut rng), Ok(4));
    }

    #[test]
    fn test_medium_answers_center_opening_with_corner() {
        let bot = input([E, E, E, E, X, E, E, E, E], Mark::O);
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            let chosen = calculate_move(Difficulty::Medium, &bot, &mut rng).unwrap();
            assert!(CORNERS.contains(&chosen), "seed {} chose {}", seed, chosen);
        }
    }

    #[test]
    fn test_medium_takes_free_corner_when_nothing_is_urgent() {
        let bot = input([X, O, X, X, O, O, O, X, E], Mark::X);
        let mut rng = SessionRng::new(2);
        assert_eq!(calculate_move(Difficulty::Medium, &bot, &mut rng), Ok(8));
    }

    #[test]
    fn test_medium_falls_back_to_any_free_cell() {
        // center and corners taken, nothing to win or block
        let bot = input([X, E, O, O, X, X, X, E, O], Mark::O);
        let mut seen = Vec::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let chosen = calculate_move(Difficulty::Medium, &bot, &mut rng).unwrap();
            assert!(chosen == 1 || chosen == 7);
            if !seen.contains(&chosen) {
                seen.push(chosen);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_hard_prefers_threat_corner() {
        // only corner 8 gives O two in a line with the third cell free
        let bot = input([E, E, X, X, X, O, O, E, E], Mark::O);
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            assert_eq!(calculate_move(Difficulty::Hard, &bot, &mut rng), Ok(8));
        }
    }

    #[test]
    fn test_hard_picks_among_threat_corners() {
        let bot = input([E, E, E, X, X, O, E, E, E], Mark::O);
        let mut seen = Vec::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let chosen = calculate_move(Difficulty::Hard, &bot, &mut rng).unwrap();
            assert!(chosen == 2 || chosen == 8, "seed {} chose {}", seed, chosen);
            if !seen.contains(&chosen) {
                seen.push(chosen);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_medium_ignores_threat_preference() {
        let bot = input([E, E, X, X, X, O, O, E, E], Mark::O);
        let mut seen = Vec::new();
        for seed in 0..64 {
            let mut rng = SessionRng::new(seed);
            let chosen = calculate_move(Difficulty::Medium, &bot, &mut rng).unwrap();
            assert!(chosen == 0 || chosen == 8);
            if !seen.contains(&chosen) {
                seen.push(chosen);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_easy_mixes_smart_and_random_moves() {
        let bot = input([O, O, E, X, X, E, X, E, E], Mark::O);
        let mut rng = SessionRng::new(99);
        let mut wins = 0;
        for _ in 0..300 {
            let chosen = calculate_move(Difficulty::Easy, &bot, &mut rng).unwrap();
            assert!(!bot.board.is_occupied(chosen));
            if chosen == 2 {
                wins += 1;
            }
        }
        // 30% smart plus a 1 in 4 random hit puts the rate near 47%
        assert!(wins > 90 && wins < 210, "took the win {} times", wins);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let bot = input([X, O, X, X, O, O, O, X, X], Mark::O);
        for difficulty in Difficulty::ALL {
            let mut rng = SessionRng::new(0);
            assert_eq!(calculate_move(difficulty, &bot, &mut rng), Err(NoMoveAvailable));
        }
    }

    #[test]
    fn test_moves_are_reproducible_with_same_seed() {
        let bot = input([E, E, E, E, X, E, E, E, E], Mark::O);
        let mut first = SessionRng::new(1234);
        let mut second = SessionRng::new(1234);
        for _ in 0..10 {
            assert_eq!(
                calculate_move(Difficulty::Easy, &bot, &mut first),
                calculate_move(Difficulty::Easy, &bot, &mut second)
            );
        }
    }
}
