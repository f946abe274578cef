use std::io::{self, BufRead};
use std::mem;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("number of lines ({n_lines}) is not a multiple of the group size ({size})")]
pub struct RaggedGroupsError {
    pub n_lines: usize,
    pub size: usize,
}

/// Decision taken by a grouping predicate on the next line.
pub enum Boundary {
    /// The line belongs to the current group.
    Extend,
    /// The line opens a new group.
    StartNew,
    /// The line separates two groups and belongs to neither.
    Separator,
}

pub fn stdin_lines() -> impl Iterator<Item = String> {
    io::stdin().lock().lines().filter_map(|s| s.ok())
}

/// Chunks a line sequence into groups, asking `boundary` where the cuts go.
/// Empty groups are never emitted; a trailing unterminated group is.
pub fn group_lines<F>(
    input: impl Iterator<Item = impl Into<String>>,
    mut boundary: F,
) -> Vec<Vec<String>>
where
    F: FnMut(&[String], &str) -> Boundary,
{
    let mut groups = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in input {
        let line: String = line.into();
        match boundary(&current, &line) {
            Boundary::Extend => current.push(line),
            Boundary::StartNew => {
                if !current.is_empty() {
                    groups.push(mem::take(&mut current));
                }
                current.push(line);
            }
            Boundary::Separator => {
                if !current.is_empty() {
                    groups.push(mem::take(&mut current));
                }
            }
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

pub fn group_by_blank(input: impl Iterator<Item = impl Into<String>>) -> Vec<Vec<String>> {
    group_lines(input, |_, line| {
        if line.is_empty() {
            Boundary::Separator
        } else {
            Boundary::Extend
        }
    })
}

pub fn group_by_fixed_size(
    input: impl Iterator<Item = impl Into<String>>,
    size: usize,
) -> Result<Vec<Vec<String>>, RaggedGroupsError> {
    let groups = group_lines(input, |current, _| {
        if current.len() == size {
            Boundary::StartNew
        } else {
            Boundary::Extend
        }
    });

    match groups.last() {
        Some(last) if last.len() != size => Err(RaggedGroupsError {
            n_lines: (groups.len() - 1) * size + last.len(),
            size,
        }),
        _ => Ok(groups),
    }
}
