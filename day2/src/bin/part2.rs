use day2::total_score_outcomes;
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let total = total_score_outcomes(stdin_lines())?;

    println!("{total}");

    Ok(())
}
