//! The playfield: a fixed grid of cells, each empty or holding a color index.

use crate::tetrimino::Shape;

/// A cell value of zero means the cell is empty.
pub const EMPTY: u8 = 0;


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board
{
    cols: usize,
    cells: Vec<Vec<u8>>    // cells[row][col], row 0 at the top.
}


impl Board
{
    pub fn new(rows: usize, cols: usize) -> Self
    {
        Board { cols, cells: vec![vec![EMPTY; cols]; rows] }
    }

    pub fn rows(&self) -> usize
    {
        self.cells.len()
    }

    pub fn cols(&self) -> usize
    {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> u8
    {
        self.cells[row][col]
    }

    pub fn row(&self, row: usize) -> &[u8]
    {
        &self.cells[row]
    }

    /// (row, col, color) of every non-empty cell, top row first.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_
    {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter(|(_, color)| **color != EMPTY).map(move |(col, &color)| (row, col, color))
        })
    }

    /// True if every square of `shape`, placed with its top-left corner at column `x`, row `y`,
    /// lands inside the side walls, above the floor, and on an empty cell.
    /// Rows above the top of the board (negative) are allowed.
    pub fn is_valid_position(&self, shape: &Shape, x: i32, y: i32) -> bool
    {
        for (shape_row, shape_col) in shape.squares() {
            let col = x + shape_col as i32;
            let row = y + shape_row as i32;

            // Walls and floor.
            if col < 0 || col >= self.cols as i32 { return false; }
            if row >= self.rows() as i32 { return false; }

            // Squares already frozen in place. Nothing lives above the top.
            if row >= 0 && self.cells[row as usize][col as usize] != EMPTY { return false; }
        }

        true
    }

    /// Copies the squares of `shape` into the board. Squares above the top are dropped.
    /// Callers must have checked the position with `is_valid_position` first.
    pub fn lock_piece(&mut self, shape: &Shape, x: i32, y: i32, color: u8)
    {
        for (shape_row, shape_col) in shape.squares() {
            let col = x + shape_col as i32;
            let row = y + shape_row as i32;
            if row < 0 { continue; }

            debug_assert!(col >= 0 && (col as usize) < self.cols, "locked square outside the walls: col {}", col);
            debug_assert!((row as usize) < self.rows(), "locked square below the floor: row {}", row);

            self.cells[row as usize][col as usize] = color;
        }
    }

    /// Removes every full row, dropping the rows above into its place, and returns how many went.
    pub fn clear_full_lines(&mut self) -> u32
    {
        // A well with no columns has nothing that could fill up.
        if self.cols == 0 { return 0; }

        let mut cleared = 0;
        let mut row = self.rows();

        // Bottom to top. After a removal the same index holds the row that was above it.
        while row > 0 {
            if self.is_row_full(row - 1) {
                self.cells.remove(row - 1);
                self.cells.insert(0, vec![EMPTY; self.cols]);
                cleared += 1;
            } else {
                row -= 1;
            }
        }

        cleared
    }

    pub fn is_row_full(&self, row: usize) -> bool
    {
        self.cells[row].iter().all(|&color| color != EMPTY)
    }
}


// Position setup for tests. Play only changes the board through `lock_piece` and `clear_full_lines`.
#[doc(hidden)]
impl Board
{
    pub fn set_cell(&mut self, row: usize, col: usize, color: u8)
    {
        self.cells[row][col] = color;
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use crate::tetrimino::TetriminoKind;

    fn fill_row(board: &mut Board, row: usize, color: u8)
    {
        for col in 0..board.cols() {
            board.set_cell(row, col, color);
        }
    }

    #[test]
    fn new_board_is_empty()
    {
        let board = Board::new(20, 10);
        assert_eq!(board.rows(), 20);
        assert_eq!(board.cols(), 10);
        assert_eq!(board.filled_cells().count(), 0);
    }

    #[test]
    fn walls_and_floor_are_invalid()
    {
        let board = Board::new(20, 10);
        let bar = TetriminoKind::I.shape();

        assert!(board.is_valid_position(&bar, 0, 0));
        assert!(board.is_valid_position(&bar, 6, 19));
        assert!(!board.is_valid_position(&bar, -1, 0));
        assert!(!board.is_valid_position(&bar, 7, 0));
        assert!(!board.is_valid_position(&bar, 0, 20));
    }

    #[test]
    fn rows_above_the_top_are_allowed()
    {
        let board = Board::new(20, 10);
        let upright = TetriminoKind::I.shape().rotate();
        assert!(board.is_valid_position(&upright, 4, -3));
        assert!(board.is_valid_position(&upright, 4, -10));
    }

    #[test]
    fn empty_squares_of_a_shape_never_collide()
    {
        let mut board = Board::new(20, 10);
        board.set_cell(1, 2, 3);    // Under the T's right-hand gap when it sits at column 0.
        let tee = TetriminoKind::T.shape();
        assert!(board.is_valid_position(&tee, 0, 0));
        assert!(!board.is_valid_position(&tee, 1, 0));
    }

    #[test]
    fn validity_matches_a_brute_force_check()
    {
        let mut board = Board::new(8, 6);
        board.set_cell(5, 2, 1);
        board.set_cell(7, 0, 4);
        board.set_cell(3, 5, 2);

        for kind in TetriminoKind::ALL.iter() {
            let mut shape = kind.shape();
            for _ in 0..4 {
                for y in -4..10 {
                    for x in -4..10 {
                        let blocked = shape.squares().any(|(r, c)| {
                            let col = x + c as i32;
                            let row = y + r as i32;
                            col < 0 || col >= 6 || row >= 8
                                || (row >= 0 && board.cell(row as usize, col as usize) != EMPTY)
                        });
                        assert_eq!(board.is_valid_position(&shape, x, y), !blocked,
                                   "{:?} at ({}, {})", kind, x, y);
                    }
                }
                shape = shape.rotate();
            }
        }
    }

    #[test]
    fn lock_writes_the_color_index()
    {
        let mut board = Board::new(20, 10);
        board.lock_piece(&TetriminoKind::O.shape(), 4, 18, 5);

        let cells: Vec<_> = board.filled_cells().collect();
        assert_eq!(cells, vec![(18, 4, 5), (18, 5, 5), (19, 4, 5), (19, 5, 5)]);
    }

    #[test]
    fn lock_skips_squares_above_the_top()
    {
        let mut board = Board::new(20, 10);
        board.lock_piece(&TetriminoKind::I.shape().rotate(), 0, -2, 1);
        let cells: Vec<_> = board.filled_cells().collect();
        assert_eq!(cells, vec![(0, 0, 1), (1, 0, 1)]);
    }

    #[test]
    fn clearing_nothing_changes_nothing()
    {
        let mut board = Board::new(20, 10);
        board.set_cell(19, 0, 1);
        let before = board.clone();
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn columnless_board_clears_nothing()
    {
        let mut board = Board::new(3, 0);
        assert_eq!(board.clear_full_lines(), 0);
        assert_eq!(board.rows(), 3);
    }

    #[test]
    fn adjacent_full_rows_all_clear()
    {
        let mut board = Board::new(6, 4);
        board.set_cell(2, 1, 7);    // A marker that should sink two rows.
        fill_row(&mut board, 3, 1);
        fill_row(&mut board, 4, 2);
        board.set_cell(5, 3, 6);

        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cell(4, 1), 7);
        assert_eq!(board.cell(5, 3), 6);
        assert!(board.row(0).iter().all(|&c| c == EMPTY));
        assert!(board.row(1).iter().all(|&c| c == EMPTY));
    }

    #[test]
    fn split_full_rows_keep_the_survivors_in_order()
    {
        let mut board = Board::new(6, 3);
        board.set_cell(0, 0, 1);
        fill_row(&mut board, 1, 2);
        board.set_cell(2, 1, 3);
        fill_row(&mut board, 3, 4);
        board.set_cell(4, 2, 5);
        fill_row(&mut board, 5, 6);

        assert_eq!(board.clear_full_lines(), 3);
        assert_eq!(board.row(3), &[1, 0, 0]);
        assert_eq!(board.row(4), &[0, 3, 0]);
        assert_eq!(board.row(5), &[0, 0, 5]);
        assert!((0..board.rows()).all(|r| !board.is_row_full(r)));
    }
}
