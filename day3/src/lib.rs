use std::collections::BTreeSet;

use anyhow::{anyhow, Result};
use thiserror::Error;
use util::group_by_fixed_size;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ItemError {
    #[error("{0:?} is not an item type")]
    NotAnItem(char),
    #[error("no item type common to the whole group")]
    NoCommonItem,
    #[error("{0} item types common to the group, expected exactly one")]
    AmbiguousCommonItem(usize),
}

pub fn priority(item: char) -> Result<i32, ItemError> {
    match item {
        'a'..='z' => Ok(1 + item as i32 - 'a' as i32),
        'A'..='Z' => Ok(27 + item as i32 - 'A' as i32),
        _ => Err(ItemError::NotAnItem(item)),
    }
}

fn common_item(sets: &[BTreeSet<char>]) -> Result<char, ItemError> {
    let (first, rest) = sets.split_first().ok_or(ItemError::NoCommonItem)?;

    let common = rest.iter().fold(first.clone(), |acc, set| {
        acc.intersection(set).copied().collect()
    });

    let mut items = common.iter();
    match (items.next(), items.next()) {
        (Some(&item), None) => Ok(item),
        (None, _) => Err(ItemError::NoCommonItem),
        _ => Err(ItemError::AmbiguousCommonItem(common.len())),
    }
}

fn item_set(line: &str) -> BTreeSet<char> {
    line.chars().collect()
}

/// Priority of the one item found in both compartments, summed over lines.
/// The puzzle input guarantees the compartments share exactly one item type.
pub fn compartment_priority_sum(input: impl Iterator<Item = impl Into<String>>) -> Result<i32> {
    input
        .map(|line| {
            let line: String = line.into();
            let items: Vec<char> = line.chars().collect();
            if items.len() % 2 != 0 {
                return Err(anyhow!("odd number of items in rucksack {line:?}"));
            }

            let (left, right) = items.split_at(items.len() / 2);
            let item = common_item(&[
                left.iter().copied().collect(),
                right.iter().copied().collect(),
            ])?;

            Ok(priority(item)?)
        })
        .sum()
}

/// Priority of the badge item shared by each group of three rucksacks.
pub fn badge_priority_sum(input: impl Iterator<Item = impl Into<String>>) -> Result<i32> {
    group_by_fixed_size(input, 3)?
        .iter()
        .map(|group| {
            let sets: Vec<_> = group.iter().map(|line| item_set(line)).collect();

            Ok(priority(common_item(&sets)?)?)
        })
        .sum()
}
