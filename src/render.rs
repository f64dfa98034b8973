//! Draws the well and the falling piece as colored squares.
//!
//! The renderer only reads game state. It talks to the screen through `Surface`, which the
//! binary implements on top of piston's 2D graphics.

use crate::board::EMPTY;
use crate::game::Session;

pub type Color = [f32; 4];    // R, G, B, A
pub type Rect = [f64; 4];     // x, y, width, height in pixels

pub const BACKGROUND: Color = [ 0.1, 0.1, 0.1, 1.0 ];
pub const OUTLINE: Color = [ 0.0, 0.0, 0.0, 1.0 ];

/// Square colors by color index. Index 0 is an empty cell and is never drawn.
pub const PALETTE: [Color; 8] = [ [ 0.0, 0.0, 0.0, 0.0 ],
                                  [ 1.0, 0.0, 0.0, 1.0 ],      // red
                                  [ 0.0, 1.0, 0.0, 1.0 ],      // green
                                  [ 0.0, 0.0, 1.0, 1.0 ],      // blue
                                  [ 1.0, 1.0, 0.0, 1.0 ],      // yellow
                                  [ 1.0, 0.0, 1.0, 1.0 ],      // magenta
                                  [ 0.0, 1.0, 1.0, 1.0 ],      // cyan
                                  [ 1.0, 0.647, 0.0, 1.0 ] ];  // orange


/// Something rectangles can be drawn on.
pub trait Surface
{
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, color: Color, rect: Rect);
    /// Outlines `rect` with a 1 pixel line.
    fn stroke_rect(&mut self, color: Color, rect: Rect);
}


pub fn color_of(index: u8) -> Color
{
    PALETTE.get(index as usize).copied().unwrap_or(PALETTE[0])
}


#[derive(Clone, Copy, Debug)]
pub struct Renderer
{
    block_size: f64
}


impl Renderer
{
    pub fn new(block_size: f64) -> Self
    {
        Renderer { block_size }
    }

    /// One full frame: wipe, then the well, then the falling piece on top.
    /// After a loss the piece that found no room is left out.
    pub fn draw_frame<S: Surface>(&self, session: &Session, surface: &mut S)
    {
        surface.clear(BACKGROUND);
        self.draw_board(session, surface);
        if !session.is_over() {
            self.draw_piece(session, surface);
        }
    }

    fn draw_board<S: Surface>(&self, session: &Session, surface: &mut S)
    {
        for (row, col, color) in session.board().filled_cells() {
            self.draw_block(surface, row as i32, col as i32, color);
        }
    }

    fn draw_piece<S: Surface>(&self, session: &Session, surface: &mut S)
    {
        let piece = session.piece();
        for (row, col) in piece.squares() {
            self.draw_block(surface, row, col, piece.color);
        }
    }

    /// Fills one grid square and outlines it in black.
    fn draw_block<S: Surface>(&self, surface: &mut S, row: i32, col: i32, color: u8)
    {
        if color == EMPTY { return; }

        let (x, y) = self.grid_to_pixel(row, col);
        let rect = [ x, y, self.block_size, self.block_size ];
        surface.fill_rect(color_of(color), rect);
        surface.stroke_rect(OUTLINE, rect);
    }

    /// Upper-left pixel of the square at the given grid coordinate.
    pub fn grid_to_pixel(&self, row: i32, col: i32) -> (f64, f64)
    {
        ( col as f64 * self.block_size, row as f64 * self.block_size )
    }
}
