//! Points for cleared lines. Flat rate, no multi-line bonus.

pub const POINTS_PER_LINE: u32 = 100;


#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Score
{
    points: u32,
    lines: u32
}


impl Score
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Credits `lines` cleared rows and returns the points they earned.
    pub fn add_lines(&mut self, lines: u32) -> u32
    {
        let earned = lines * POINTS_PER_LINE;
        self.points += earned;
        self.lines += lines;
        earned
    }

    pub fn value(&self) -> u32
    {
        self.points
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32
    {
        self.lines
    }

    pub fn reset(&mut self)
    {
        *self = Self::default();
    }

    /// The text shown to the player.
    pub fn label(&self) -> String
    {
        format!("Score: {}", self.points)
    }
}
