//! Score command implementation.

use anyhow::{Context, Result};
use bowling_core::{
    Roll, Scorecard, format_scorecard_console, format_scorecard_json, parse_rolls,
    score_game_strict,
};
use tracing::info;

use super::ScoreOptions;

/// Run the score command
pub fn run(rolls: &[String], options: &ScoreOptions) -> Result<()> {
    let input = rolls.join(" ");
    let rolls = parse_rolls(&input).with_context(|| format!("Failed to parse rolls: {}", input))?;
    print_scorecard(&rolls, options)
}

/// Score rolls and print the scorecard
pub fn print_scorecard(rolls: &[Roll], options: &ScoreOptions) -> Result<()> {
    let card = if options.strict {
        score_game_strict(rolls, options.lookahead)?
    } else {
        Scorecard::from_rolls(rolls, options.lookahead)
    };

    info!(
        frames = card.frames.len(),
        total = card.total,
        complete = card.complete,
        "Scored game"
    );

    if options.json {
        println!("{}", format_scorecard_json(&card)?);
    } else {
        print!("{}", format_scorecard_console(&card));
    }

    Ok(())
}
