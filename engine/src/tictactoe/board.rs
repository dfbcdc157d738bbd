use super::types::{CELL_COUNT, InvalidMove, Mark};

/// Nine cells in row-major order. `Copy`, so search explores on private copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange { index })?;
        if cell.is_some() {
            return Err(InvalidMove::CellOccupied { index });
        }
        *cell = Some(mark);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert!((0..9).all(|i| !board.is_occupied(i)));
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert!(board.is_occupied(4));
        assert_eq!(board.get(4), Some(Mark::X));
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        assert_eq!(
            board.place(0, Mark::O),
            Err(InvalidMove::CellOccupied { index: 0 })
        );
        assert_eq!(board.get(0), Some(Mark::X));
    }

    #[test]
    fn test_place_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.place(9, Mark::X),
            Err(InvalidMove::OutOfRange { index: 9 })
        );
        assert_eq!(board, Board::new());
        assert!(!board.is_occupied(9));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(i, mark).unwrap();
        }
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_copy_is_independent() {
        let board = Board::new();
        let mut copy = board;
        copy.place(3, Mark::O).unwrap();
        assert!(!board.is_occupied(3));
        assert!(copy.is_occupied(3));
    }

    #[test]
    fn test_clear() {
        let mut board = Board::from_cells([Some(Mark::X); 9]);
        board.clear();
        assert_eq!(board, Board::new());
    }
}
