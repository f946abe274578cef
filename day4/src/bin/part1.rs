use day4::num_fully_contained;
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let total = num_fully_contained(stdin_lines())?;

    println!("{total}");

    Ok(())
}
