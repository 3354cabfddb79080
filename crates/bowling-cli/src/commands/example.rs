//! Example command: score the sample game.

use anyhow::Result;
use bowling_core::parse_rolls;
use tracing::info;

use super::ScoreOptions;
use super::score::print_scorecard;

/// An unfinished game ending on a strike
pub const SAMPLE_GAME: &str = "2 6 X X X X 3 / 3 4 1 3 X";

pub fn run(options: &ScoreOptions) -> Result<()> {
    if options.json {
        info!("Sample game: {}", SAMPLE_GAME);
    } else {
        println!("Sample game: {}", SAMPLE_GAME);
    }
    let rolls = parse_rolls(SAMPLE_GAME)?;
    print_scorecard(&rolls, options)
}
