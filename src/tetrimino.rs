//! The seven tetrimino templates and the clockwise rotation transform.

use rand::Rng;


#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum TetriminoKind { I, T, S, Z, O, L, J }


impl TetriminoKind
{
    /// Every template, in catalog order. A kind's color index is its position here plus one.
    pub const ALL: [TetriminoKind; 7] = [ TetriminoKind::I,
                                          TetriminoKind::T,
                                          TetriminoKind::S,
                                          TetriminoKind::Z,
                                          TetriminoKind::O,
                                          TetriminoKind::L,
                                          TetriminoKind::J ];

    pub fn index(self) -> usize
    {
        match self
        {
            TetriminoKind::I => 0,
            TetriminoKind::T => 1,
            TetriminoKind::S => 2,
            TetriminoKind::Z => 3,
            TetriminoKind::O => 4,
            TetriminoKind::L => 5,
            TetriminoKind::J => 6
        }
    }

    pub fn color_index(self) -> u8
    {
        self.index() as u8 + 1
    }

    /// Picks a template uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self
    {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Builds a fresh copy of this kind's template matrix.
    pub fn shape(self) -> Shape
    {
        let rows: &[&[u8]] = match self
        {
            TetriminoKind::I => &[ &[ 1, 1, 1, 1 ] ],

            TetriminoKind::T => &[ &[ 1, 1, 1 ],
                                   &[ 0, 1, 0 ] ],

            TetriminoKind::S => &[ &[ 1, 1, 0 ],
                                   &[ 0, 1, 1 ] ],

            TetriminoKind::Z => &[ &[ 0, 1, 1 ],
                                   &[ 1, 1, 0 ] ],

            TetriminoKind::O => &[ &[ 1, 1 ],
                                   &[ 1, 1 ] ],

            TetriminoKind::L => &[ &[ 1, 1, 1 ],
                                   &[ 1, 0, 0 ] ],

            TetriminoKind::J => &[ &[ 1, 1, 1 ],
                                   &[ 0, 0, 1 ] ]
        };

        Shape::from_rows(rows)
    }
}


/// A rectangular matrix of occupied/empty squares. Rows are listed top to bottom.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Shape
{
    cells: Vec<Vec<bool>>
}


impl Shape
{
    /// Builds a shape from rows of 0/1 values. All rows must have the same length.
    pub fn from_rows(rows: &[&[u8]]) -> Self
    {
        let width = rows.first().map_or(0, |row| row.len());
        debug_assert!(rows.iter().all(|row| row.len() == width), "ragged shape");

        Shape { cells: rows.iter()
                           .map(|row| row.iter().map(|&square| square != 0).collect())
                           .collect() }
    }

    pub fn height(&self) -> usize
    {
        self.cells.len()
    }

    pub fn width(&self) -> usize
    {
        self.cells.first().map_or(0, |row| row.len())
    }

    /// (row, col) of every occupied square, top row first.
    pub fn squares(&self) -> impl Iterator<Item = (usize, usize)> + '_
    {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter().enumerate().filter(|(_, filled)| **filled).map(move |(col, _)| (row, col))
        })
    }

    /// Returns this shape turned 90 degrees clockwise. Transpose, then reverse each row.
    pub fn rotate(&self) -> Shape
    {
        let height = self.height();
        let mut rotated = vec![vec![false; height]; self.width()];

        // First row becomes last column, and so on.
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &filled) in line.iter().enumerate() {
                rotated[col][(height - 1) - row] = filled;
            }
        }

        Shape { cells: rotated }
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn four_rotations_return_to_the_template()
    {
        for kind in TetriminoKind::ALL.iter() {
            let shape = kind.shape();
            let spun = shape.rotate().rotate().rotate().rotate();
            assert_eq!(spun, shape, "{:?} did not come back after four turns", kind);
        }
    }

    #[test]
    fn square_is_a_fixed_point()
    {
        let square = TetriminoKind::O.shape();
        assert_eq!(square.rotate(), square);
    }

    #[test]
    fn rotating_t_points_it_left()
    {
        // ###      .#
        // .#   ->  ##
        //          .#
        let rotated = TetriminoKind::T.shape().rotate();
        let expected = Shape::from_rows(&[ &[ 0, 1 ],
                                           &[ 1, 1 ],
                                           &[ 0, 1 ] ]);
        assert_eq!(rotated, expected);
    }

    #[test]
    fn rotating_i_makes_it_vertical()
    {
        let rotated = TetriminoKind::I.shape().rotate();
        assert_eq!(rotated.width(), 1);
        assert_eq!(rotated.height(), 4);
        assert_eq!(rotated.squares().count(), 4);
    }

    #[test]
    fn rotate_leaves_the_input_alone()
    {
        let shape = TetriminoKind::L.shape();
        let _ = shape.rotate();
        assert_eq!(shape, TetriminoKind::L.shape());
    }

    #[test]
    fn every_template_has_four_squares()
    {
        for kind in TetriminoKind::ALL.iter() {
            assert_eq!(kind.shape().squares().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn color_index_follows_catalog_order()
    {
        let colors: Vec<u8> = TetriminoKind::ALL.iter().map(|k| k.color_index()).collect();
        assert_eq!(colors, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn random_pick_eventually_covers_every_kind()
    {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[TetriminoKind::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
