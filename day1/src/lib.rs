use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use util::group_by_blank;

pub fn calorie_totals(input: impl Iterator<Item = impl Into<String>>) -> Result<Vec<i64>> {
    group_by_blank(input)
        .into_iter()
        .map(|group| {
            group
                .iter()
                .map(|line| {
                    line.parse::<i64>()
                        .with_context(|| format!("not a calorie count: {line:?}"))
                })
                .sum()
        })
        .collect()
}

pub fn max_total(totals: &[i64]) -> Result<i64> {
    totals
        .iter()
        .max()
        .copied()
        .ok_or(anyhow!("no elves in input"))
}

/// Sum of the `k` largest totals; sums everything if fewer than `k` exist.
pub fn top_k_sum(totals: &[i64], k: usize) -> i64 {
    totals
        .iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(k)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> String {
        r"1000
2000
3000

4000

5000
6000

7000
8000
9000

10000"
            .to_string()
    }

    #[test]
    fn totals_ok() {
        let totals = calorie_totals(test_input().lines());

        assert!(totals.is_ok());

        assert_eq!(totals.unwrap(), vec![6000, 4000, 11000, 24000, 10000]);
    }

    #[test]
    fn max_total_ok() {
        let totals = calorie_totals(test_input().lines()).unwrap();

        let max = max_total(&totals);

        assert!(max.is_ok());

        assert_eq!(max.unwrap(), 24000);
    }

    #[test]
    fn top_three_sum_ok() {
        let totals = calorie_totals(test_input().lines()).unwrap();

        assert_eq!(top_k_sum(&totals, 3), 45000);
    }

    #[test]
    fn trailing_group_is_counted() {
        let totals = calorie_totals("1\n2\n\n3\n\n4\n5\n6".lines()).unwrap();

        assert_eq!(totals, vec![3, 3, 15]);
        assert_eq!(max_total(&totals).unwrap(), 15);
        assert_eq!(top_k_sum(&totals, 3), 21);
    }

    #[test]
    fn short_input_sums_all() {
        assert_eq!(top_k_sum(&[5, 7], 3), 12);
    }

    #[test]
    fn bad_number_fails() {
        assert!(calorie_totals("100\nlembas\n200".lines()).is_err());
    }

    #[test]
    fn empty_input_has_no_max() {
        assert!(max_total(&[]).is_err());
    }
}
