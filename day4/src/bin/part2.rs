use day4::num_overlapping;
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let total = num_overlapping(stdin_lines())?;

    println!("{total}");

    Ok(())
}
