use day1::{calorie_totals, max_total, top_k_sum};
use util::stdin_lines;

use anyhow::Result;

fn main() -> Result<()> {
    let totals = calorie_totals(stdin_lines())?;

    println!("Part 1:\t{}", max_total(&totals)?);
    println!("Part 2:\t{}", top_k_sum(&totals, 3));

    Ok(())
}
