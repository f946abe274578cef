use std::num::ParseIntError;
use std::str::FromStr;

use anyhow::Result;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssignmentParseError {
    #[error("expected two ranges separated by a comma, got {0:?}")]
    MissingComma(String),
    #[error("expected a range like 2-4, got {0:?}")]
    BadRange(String),
    #[error("not a section number: {text:?}")]
    BadSection {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Closed range of section ids. The input guarantees `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    start: i32,
    end: i32,
}

impl Sections {
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl FromStr for Sections {
    type Err = AssignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| AssignmentParseError::BadRange(s.to_string()))?;

        let parse_section = |text: &str| {
            text.parse()
                .map_err(|source| AssignmentParseError::BadSection {
                    text: text.to_string(),
                    source,
                })
        };

        Ok(Self {
            start: parse_section(start)?,
            end: parse_section(end)?,
        })
    }
}

fn parse_pair(line: &str) -> Result<(Sections, Sections), AssignmentParseError> {
    let (first, second) = line
        .split_once(',')
        .ok_or_else(|| AssignmentParseError::MissingComma(line.to_string()))?;

    Ok((first.parse()?, second.parse()?))
}

fn count_pairs<F>(input: impl Iterator<Item = impl Into<String>>, matches: F) -> Result<usize>
where
    F: Fn(&Sections, &Sections) -> bool,
{
    let mut count = 0;
    for line in input {
        let line: String = line.into();
        let (first, second) = parse_pair(&line)?;

        if matches(&first, &second) {
            count += 1;
        }
    }

    Ok(count)
}

pub fn num_fully_contained(input: impl Iterator<Item = impl Into<String>>) -> Result<usize> {
    count_pairs(input, |first, second| {
        first.contains(second) || second.contains(first)
    })
}

pub fn num_overlapping(input: impl Iterator<Item = impl Into<String>>) -> Result<usize> {
    count_pairs(input, Sections::overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn test_input() -> String {
        r"2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8"
            .to_string()
    }

    #[test]
    fn num_fully_contained_ok() {
        let total = num_fully_contained(test_input().lines());

        assert!(total.is_ok());

        assert_eq!(total.unwrap(), 2);
    }

    #[test]
    fn num_overlapping_ok() {
        let total = num_overlapping(test_input().lines());

        assert!(total.is_ok());

        assert_eq!(total.unwrap(), 4);
    }

    #[rstest]
    #[case("2-8,3-7", true, true)]
    #[case("5-7,7-9", false, true)]
    #[case("2-4,6-8", false, false)]
    #[case("6-6,4-6", true, true)]
    fn containment_vs_overlap(
        #[case] line: &str,
        #[case] contained: bool,
        #[case] overlapping: bool,
    ) {
        assert_eq!(num_fully_contained(line.lines()).unwrap(), contained as usize);
        assert_eq!(num_overlapping(line.lines()).unwrap(), overlapping as usize);
    }

    #[rstest]
    #[case("2-4 6-8")]
    #[case("2:4,6-8")]
    #[case("2-x,6-8")]
    #[case("2-4,6-8,9-10")]
    fn malformed_lines_fail(#[case] line: &str) {
        assert!(num_overlapping(line.lines()).is_err());
    }
}
