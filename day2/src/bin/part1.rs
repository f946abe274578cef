use day2::total_score_moves;
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let total = total_score_moves(stdin_lines())?;

    println!("{total}");

    Ok(())
}
