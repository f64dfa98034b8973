/*

MIT License

Copyright (c) 2021 Ben Cantrick

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

*/

//! A no-frills falling-block puzzle: the well, the pieces, the rules and the drawing logic.
//! The window, the event loop and the music live in the binary.

pub mod board;
pub mod clock;
pub mod config;
pub mod game;
pub mod input;
pub mod piece;
pub mod render;
pub mod score;
pub mod tetrimino;

pub use crate::board::Board;
pub use crate::config::{Args, GameConfig};
pub use crate::game::{GameEvent, Phase, Session};
pub use crate::input::{action_for, Action};
pub use crate::piece::ActivePiece;
pub use crate::render::{Renderer, Surface};
pub use crate::score::Score;
pub use crate::tetrimino::{Shape, TetriminoKind};
