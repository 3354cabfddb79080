//! Console scorecard with colored marks

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::roll::Roll;
use crate::scorecard::{ScoredFrame, Scorecard};

const CELL_WIDTH: usize = 6;
const LABEL_WIDTH: usize = 8;

/// Format a scorecard as a boxed, colored table.
///
/// ```text
/// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
///   FRAME   1     2     3     4
///   ROLLS   2 6   X     3 /   4
///   SCORE   8     28    42    ?
/// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
///   TOTAL : 42 (in progress)
/// ```
pub fn format_scorecard_console(card: &Scorecard) -> String {
    let mut output = String::new();

    let border_width = (LABEL_WIDTH + CELL_WIDTH * card.frames.len()).max(50);
    let border = "━".repeat(border_width);

    let mut numbers = format!("{:<LABEL_WIDTH$}", "  FRAME");
    let mut rolls = format!("{:<LABEL_WIDTH$}", "  ROLLS");
    let mut totals = format!("{:<LABEL_WIDTH$}", "  SCORE");

    for frame in &card.frames {
        let number = format!("{:<CELL_WIDTH$}", frame.number);
        if frame.fill_balls {
            let _ = write!(numbers, "{}", number.dimmed());
        } else {
            numbers.push_str(&number);
        }
        rolls.push_str(&format_rolls(frame));
        totals.push_str(&format_total(frame));
    }

    let status = if card.is_perfect() {
        "(perfect game)".yellow().bold().to_string()
    } else if card.complete {
        "(final)".green().to_string()
    } else {
        "(in progress)".dimmed().to_string()
    };

    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "{}", numbers.trim_end());
    let _ = writeln!(output, "{}", rolls.trim_end());
    let _ = writeln!(output, "{}", totals.trim_end());
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(output, "  TOTAL : {} {}", card.total.bold(), status);

    output
}

/// Rolls of a frame padded to one cell, marks colored
fn format_rolls(frame: &ScoredFrame) -> String {
    let mut cell = String::new();
    let mut width = 0;

    for (i, roll) in frame.rolls.iter().enumerate() {
        if i > 0 {
            cell.push(' ');
            width += 1;
        }
        let _ = write!(cell, "{}", format_colored_roll(roll));
        width += 1;
    }

    cell.push_str(&" ".repeat(CELL_WIDTH.saturating_sub(width)));
    cell
}

fn format_colored_roll(roll: &Roll) -> String {
    match roll {
        Roll::Strike => roll.red().bold().to_string(),
        Roll::Spare => roll.yellow().to_string(),
        Roll::Pins(0) => Roll::GUTTER_SYMBOL.dimmed().to_string(),
        Roll::Pins(_) => roll.to_string(),
    }
}

fn format_total(frame: &ScoredFrame) -> String {
    match frame.running_total {
        Some(total) => format!("{:<CELL_WIDTH$}", total),
        None if frame.fill_balls => " ".repeat(CELL_WIDTH),
        None => format!("{:<CELL_WIDTH$}", "?").dimmed().to_string(),
    }
}
