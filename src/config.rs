//! Command-line options, and the validated settings the game runs with.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::clock::DEFAULT_DROP_INTERVAL_MS;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_BLOCK_SIZE: f64 = 30.0;


/// Falling-block puzzle. Arrow keys move and rotate, M toggles the music, Enter restarts after a loss.
#[derive(Debug, Parser)]
#[command(name = "rustris", version)]
pub struct Args
{
    /// Rows in the well.
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "ROWS")]
    pub rows: usize,

    /// Columns in the well.
    #[arg(long, default_value_t = DEFAULT_COLS, value_name = "COLS")]
    pub cols: usize,

    /// Size of one square, in pixels.
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE, value_name = "PX")]
    pub block_size: f64,

    /// Time between gravity drops.
    #[arg(long, default_value_t = DEFAULT_DROP_INTERVAL_MS, value_name = "MS")]
    pub drop_interval_ms: f64,

    /// Seed for the piece sequence. Random if not set.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Background track to loop while playing.
    #[arg(long, value_name = "FILE")]
    pub music: Option<PathBuf>,

    /// Music volume, 0.0 to 1.0.
    #[arg(long, default_value_t = 0.1)]
    pub volume: f32,

    /// Update events per second sent by the window's event loop.
    #[arg(long, default_value_t = 60)]
    pub ups: u64,
}


/// Settings for one game session. Dimensions stay fixed for the whole session.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig
{
    pub rows: usize,
    pub cols: usize,
    pub block_size: f64,
    pub drop_interval_ms: f64,
    pub seed: Option<u64>
}


impl Default for GameConfig
{
    fn default() -> Self
    {
        GameConfig { rows: DEFAULT_ROWS,
                     cols: DEFAULT_COLS,
                     block_size: DEFAULT_BLOCK_SIZE,
                     drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
                     seed: None }
    }
}


impl GameConfig
{
    /// Window size in pixels: exactly the well, nothing else.
    pub fn window_size(&self) -> [f64; 2]
    {
        [ self.cols as f64 * self.block_size, self.rows as f64 * self.block_size ]
    }
}


impl Args
{
    /// Checks the options and builds the session settings from them.
    pub fn game_config(&self) -> Result<GameConfig>
    {
        if self.rows < 4 { bail!("--rows must be at least 4, got {}", self.rows); }
        if self.cols < 4 { bail!("--cols must be at least 4, got {}", self.cols); }
        if !(self.block_size > 0.0) { bail!("--block-size must be positive, got {}", self.block_size); }
        if !(self.drop_interval_ms > 0.0) { bail!("--drop-interval-ms must be positive, got {}", self.drop_interval_ms); }
        if !(0.0..=1.0).contains(&self.volume) { bail!("--volume must be between 0 and 1, got {}", self.volume); }
        if self.ups == 0 { bail!("--ups must be positive"); }

        Ok(GameConfig { rows: self.rows,
                        cols: self.cols,
                        block_size: self.block_size,
                        drop_interval_ms: self.drop_interval_ms,
                        seed: self.seed })
    }
}


#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn defaults_match_the_classic_well()
    {
        let args = Args::try_parse_from(["rustris"]).unwrap();
        let config = args.game_config().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.window_size(), [300.0, 600.0]);
        assert_eq!(args.volume, 0.1);
        assert!(args.music.is_none());
    }

    #[test]
    fn options_are_carried_through()
    {
        let args = Args::try_parse_from(["rustris", "--rows", "12", "--cols", "6",
                                         "--drop-interval-ms", "250", "--seed", "9"]).unwrap();
        let config = args.game_config().unwrap();
        assert_eq!((config.rows, config.cols), (12, 6));
        assert_eq!(config.drop_interval_ms, 250.0);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn bad_values_are_rejected()
    {
        for bad in [ &["rustris", "--cols", "2"][..],
                     &["rustris", "--rows", "0"][..],
                     &["rustris", "--block-size", "0"][..],
                     &["rustris", "--drop-interval-ms", "0"][..],
                     &["rustris", "--volume", "1.5"][..],
                     &["rustris", "--ups", "0"][..] ].iter() {
            let args = Args::try_parse_from(bad.iter()).unwrap();
            assert!(args.game_config().is_err(), "{:?} should be rejected", bad);
        }
    }
}
