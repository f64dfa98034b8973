//! The falling piece: its current shape, color and position in the well.

use crate::board::Board;
use crate::tetrimino::{Shape, TetriminoKind};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActivePiece
{
    pub kind: TetriminoKind,
    pub shape: Shape,    // Possibly rotated copy of the template.
    pub color: u8,
    pub x: i32,          // Column of the shape's left edge.
    pub y: i32           // Row of the shape's top edge.
}


impl ActivePiece
{
    /// A fresh piece at the top of the well, centered horizontally.
    pub fn spawn(kind: TetriminoKind, board_cols: usize) -> Self
    {
        let shape = kind.shape();
        let x = (board_cols / 2) as i32 - (shape.width() / 2) as i32;

        ActivePiece { kind, shape, color: kind.color_index(), x, y: 0 }
    }

    /// Whether the piece may stay where it is. False right after a spawn means the well is full.
    pub fn fits(&self, board: &Board) -> bool
    {
        board.is_valid_position(&self.shape, self.x, self.y)
    }

    /// Shifts the piece by (dx, dy) if the destination is free. Returns whether it moved.
    pub fn try_move(&mut self, board: &Board, dx: i32, dy: i32) -> bool
    {
        if !board.is_valid_position(&self.shape, self.x + dx, self.y + dy) { return false; }

        self.x += dx;
        self.y += dy;
        true
    }

    /// Turns the piece clockwise in place. No wall kicks: a blocked rotation is simply refused.
    pub fn try_rotate(&mut self, board: &Board) -> bool
    {
        let rotated = self.shape.rotate();
        if !board.is_valid_position(&rotated, self.x, self.y) { return false; }

        self.shape = rotated;
        true
    }

    /// Freezes the piece's squares into the board.
    pub fn lock_into(&self, board: &mut Board)
    {
        board.lock_piece(&self.shape, self.x, self.y, self.color);
    }

    /// Absolute (row, col) of each square. Rows may be negative.
    pub fn squares(&self) -> impl Iterator<Item = (i32, i32)> + '_
    {
        self.shape.squares().map(move |(row, col)| (self.y + row as i32, self.x + col as i32))
    }
}
