use anyhow::{anyhow, Result};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized code {0:?}")]
pub struct UnknownCodeError(String);

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl TryFrom<&str> for Shape {
    type Error = UnknownCodeError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        match code {
            "A" | "X" => Ok(Self::Rock),
            "B" | "Y" => Ok(Self::Paper),
            "C" | "Z" => Ok(Self::Scissors),
            _ => Err(UnknownCodeError(code.to_string())),
        }
    }
}

impl TryFrom<&str> for Outcome {
    type Error = UnknownCodeError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        match code {
            "X" => Ok(Self::Loss),
            "Y" => Ok(Self::Draw),
            "Z" => Ok(Self::Win),
            _ => Err(UnknownCodeError(code.to_string())),
        }
    }
}

impl Shape {
    fn value(self) -> i32 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The shape this one wins against.
    fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }

    /// The shape this one loses against.
    fn beaten_by(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    fn against(self, opponent: Self) -> Outcome {
        if self == opponent {
            Outcome::Draw
        } else if self.beats() == opponent {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    fn for_outcome(opponent: Self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Draw => opponent,
            Outcome::Loss => opponent.beats(),
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

impl Outcome {
    fn value(self) -> i32 {
        match self {
            Self::Loss => 0,
            Self::Draw => 3,
            Self::Win => 6,
        }
    }
}

fn round_score(us: Shape, opponent: Shape) -> i32 {
    us.value() + us.against(opponent).value()
}

fn split_round(line: &str) -> Result<(&str, &str)> {
    line.split_once(' ')
        .ok_or(anyhow!("expected two codes separated by a space: {line:?}"))
}

pub fn total_score_moves(input: impl Iterator<Item = impl Into<String>>) -> Result<i32> {
    input
        .map(|line| {
            let line: String = line.into();
            let (opponent, us) = split_round(&line)?;

            Ok(round_score(Shape::try_from(us)?, Shape::try_from(opponent)?))
        })
        .sum()
}

pub fn total_score_outcomes(input: impl Iterator<Item = impl Into<String>>) -> Result<i32> {
    input
        .map(|line| {
            let line: String = line.into();
            let (opponent, outcome) = split_round(&line)?;

            let opponent = Shape::try_from(opponent)?;
            let us = Shape::for_outcome(opponent, Outcome::try_from(outcome)?);

            Ok(round_score(us, opponent))
        })
        .sum()
}
