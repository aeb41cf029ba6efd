//! Task-code, range, and preset parsing for the command-line surface.

use std::str::FromStr;

use thiserror::Error;

use crate::worksheet::{Group, Task};

/// Number of tasks on the worksheet.
pub const TASK_COUNT: usize = 5;

/// Built-in preset codes, name to task code.
pub const PRESETS: [(&str, &str); 2] = [("sample", "CHDBA"), ("all", "_____")];

/// Errors raised while validating user selection input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A task-code character outside `A`-`H` and `_`.
    #[error("invalid character {found:?} in task code (expected A-H or _)")]
    InvalidCodeCharacter {
        /// The offending character.
        found: char,
    },
    /// A task code that is neither one nor five characters long.
    #[error("invalid task code length {found} (expected 1 or 5)")]
    InvalidCodeLength {
        /// The observed length.
        found: usize,
    },
    /// A task range outside `1 <= n <= m <= 5` or with malformed syntax.
    #[error("invalid task range {input:?} (expected 1 <= n <= m <= {TASK_COUNT})")]
    InvalidRange {
        /// The raw range argument.
        input: String,
    },
    /// A preset name with no table entry.
    #[error("preset {name:?} not found")]
    UnknownPreset {
        /// The requested name.
        name: String,
    },
}

/// Per-task group selector parsed from one code character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelector {
    /// A single group letter.
    One(Group),
    /// `_`: every group in table order.
    All,
}

impl GroupSelector {
    /// Groups selected, in table order.
    #[must_use]
    pub fn groups(self) -> Vec<Group> {
        match self {
            Self::One(group) => vec![group],
            Self::All => Group::ALL.to_vec(),
        }
    }
}

/// Validated task code: one selector per worksheet task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCode {
    slots: [GroupSelector; TASK_COUNT],
}

impl TaskCode {
    /// Selector for the 1-based task `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `1..=5`.
    #[must_use]
    pub fn selector(&self, index: usize) -> GroupSelector {
        self.slots[index - 1]
    }
}

impl FromStr for TaskCode {
    type Err = SelectionError;

    /// Accepts five characters over `{A..H, _}`, or a single character that
    /// repeats across all five tasks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed = Vec::with_capacity(TASK_COUNT);
        for c in s.chars() {
            let selector = if c == '_' {
                GroupSelector::All
            } else {
                Group::from_letter(c)
                    .map(GroupSelector::One)
                    .ok_or(SelectionError::InvalidCodeCharacter { found: c })?
            };
            parsed.push(selector);
        }

        if parsed.len() == 1 {
            return Ok(Self {
                slots: [parsed[0]; TASK_COUNT],
            });
        }
        if parsed.len() != TASK_COUNT {
            return Err(SelectionError::InvalidCodeLength {
                found: parsed.len(),
            });
        }
        let mut slots = [GroupSelector::All; TASK_COUNT];
        slots.copy_from_slice(&parsed);
        Ok(Self { slots })
    }
}

/// 1-based inclusive task range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRange {
    start: usize,
    end: usize,
}

impl TaskRange {
    /// The full worksheet, tasks 1 through 5.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            start: 1,
            end: TASK_COUNT,
        }
    }

    /// Iterates the selected 1-based task indices.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }

    /// Iterates the selected tasks in worksheet order.
    pub fn tasks(self) -> impl Iterator<Item = Task> {
        self.indices().filter_map(Task::from_index)
    }
}

impl FromStr for TaskRange {
    type Err = SelectionError;

    /// Accepts `n` for a single task or `n-m` for an inclusive range, with
    /// `1 <= n <= m <= 5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SelectionError::InvalidRange {
            input: s.to_string(),
        };

        let (start, end) = match s.split_once('-') {
            Some((a, b)) => (
                a.parse::<usize>().map_err(|_| invalid())?,
                b.parse::<usize>().map_err(|_| invalid())?,
            ),
            None => {
                let n = s.parse::<usize>().map_err(|_| invalid())?;
                (n, n)
            }
        };

        if start < 1 || start > end || end > TASK_COUNT {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

/// Looks up a named preset and parses its code.
///
/// # Errors
///
/// Returns [`SelectionError::UnknownPreset`] for names missing from
/// [`PRESETS`], and propagates code-parsing errors for malformed entries.
pub fn preset(name: &str) -> Result<TaskCode, SelectionError> {
    let (_, code) = PRESETS
        .iter()
        .copied()
        .find(|(candidate, _)| *candidate == name)
        .ok_or_else(|| SelectionError::UnknownPreset {
            name: name.to_string(),
        })?;
    code.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_letter_code_maps_each_task() {
        let code: TaskCode = "FCDGA".parse().expect("valid code");
        assert_eq!(code.selector(1), GroupSelector::One(Group::F));
        assert_eq!(code.selector(3), GroupSelector::One(Group::D));
        assert_eq!(code.selector(5), GroupSelector::One(Group::A));
    }

    #[test]
    fn single_letter_repeats_across_tasks() {
        let code: TaskCode = "C".parse().expect("valid code");
        for index in 1..=TASK_COUNT {
            assert_eq!(code.selector(index), GroupSelector::One(Group::C));
        }
    }

    #[test]
    fn underscore_selects_every_group() {
        let code: TaskCode = "_AAAA".parse().expect("valid code");
        assert_eq!(code.selector(1).groups(), Group::ALL.to_vec());
        assert_eq!(code.selector(2).groups(), vec![Group::A]);
    }

    #[test]
    fn bad_character_is_rejected_before_length() {
        assert_eq!(
            "XY".parse::<TaskCode>(),
            Err(SelectionError::InvalidCodeCharacter { found: 'X' })
        );
    }

    #[test]
    fn bad_lengths_are_rejected() {
        assert_eq!(
            "AB".parse::<TaskCode>(),
            Err(SelectionError::InvalidCodeLength { found: 2 })
        );
        assert_eq!(
            "ABCDEF".parse::<TaskCode>(),
            Err(SelectionError::InvalidCodeLength { found: 6 })
        );
        assert!(matches!(
            "".parse::<TaskCode>(),
            Err(SelectionError::InvalidCodeLength { found: 0 })
        ));
    }

    #[test]
    fn range_accepts_single_index_and_span() {
        let single: TaskRange = "3".parse().expect("valid range");
        assert_eq!(single.indices().collect::<Vec<_>>(), vec![3]);

        let span: TaskRange = "1-3".parse().expect("valid range");
        assert_eq!(span.indices().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn range_rejects_malformed_and_out_of_bounds_input() {
        for raw in ["0", "6", "3-2", "1-6", "a-b", "2-", "-3", ""] {
            assert!(raw.parse::<TaskRange>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn full_range_covers_all_tasks() {
        assert_eq!(TaskRange::full().tasks().count(), TASK_COUNT);
    }

    #[test]
    fn presets_resolve_and_unknown_names_fail() {
        assert!(preset("sample").is_ok());
        let everything = preset("all").expect("valid preset");
        assert_eq!(everything.selector(1), GroupSelector::All);
        assert_eq!(
            preset("me"),
            Err(SelectionError::UnknownPreset {
                name: "me".to_string()
            })
        );
    }
}
