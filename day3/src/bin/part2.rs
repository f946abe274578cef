use day3::badge_priority_sum;
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let total = badge_priority_sum(stdin_lines())?;

    println!("{total}");

    Ok(())
}
