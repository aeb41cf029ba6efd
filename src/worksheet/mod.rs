//! The five worksheet problems, parameter groups, and dispatch.

/// Two-source resistive ladder (series/parallel and delta-wye reduction).
pub mod ladder;
/// AC mesh analysis with complex impedances.
pub mod mesh;
/// DC nodal analysis via conductance stamping.
pub mod nodal;
/// Per-group parameter tables.
pub mod tables;
/// Thevenin equivalent of a resistive bridge.
pub mod thevenin;
/// RL step response in closed form.
pub mod transient;

use std::fmt;

use crate::linalg::SolveError;

/// Parameter group letter on the assignment sheet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Group A.
    A,
    /// Group B.
    B,
    /// Group C.
    C,
    /// Group D.
    D,
    /// Group E.
    E,
    /// Group F.
    F,
    /// Group G.
    G,
    /// Group H.
    H,
}

impl Group {
    /// All groups in table order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];

    /// Parses a single table letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'H' => Some(Self::H),
            _ => None,
        }
    }

    /// The group's table letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the five worksheet problems.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Resistive ladder reduction.
    Ladder,
    /// Thevenin equivalent.
    Thevenin,
    /// DC nodal analysis.
    Nodal,
    /// AC mesh analysis.
    Mesh,
    /// RL step response.
    Transient,
}

impl Task {
    /// All tasks in worksheet order.
    pub const ALL: [Self; 5] = [
        Self::Ladder,
        Self::Thevenin,
        Self::Nodal,
        Self::Mesh,
        Self::Transient,
    ];

    /// 1-based position on the worksheet.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Ladder => 1,
            Self::Thevenin => 2,
            Self::Nodal => 3,
            Self::Mesh => 4,
            Self::Transient => 5,
        }
    }

    /// Task at a 1-based worksheet position.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            1 => Some(Self::Ladder),
            2 => Some(Self::Thevenin),
            3 => Some(Self::Nodal),
            4 => Some(Self::Mesh),
            5 => Some(Self::Transient),
            _ => None,
        }
    }
}

/// Result of evaluating one task for one parameter group.
#[derive(Debug, Clone)]
pub struct TaskReport {
    /// One-line formatted reading.
    pub reading: String,
    /// Intermediate quantities for verbose output.
    pub trace: Vec<String>,
}

/// Evaluates `task` against the parameters of `group`.
///
/// # Errors
///
/// Propagates [`SolveError`] from the nodal and mesh linear solves; the
/// built-in tables keep both systems non-singular.
pub fn evaluate(task: Task, group: Group) -> Result<TaskReport, SolveError> {
    let report = match task {
        Task::Ladder => {
            let s = ladder::solve(&tables::ladder(group));
            TaskReport {
                reading: s.reading(),
                trace: s.trace(),
            }
        }
        Task::Thevenin => {
            let s = thevenin::solve(&tables::thevenin(group));
            TaskReport {
                reading: s.reading(),
                trace: s.trace(),
            }
        }
        Task::Nodal => {
            let s = nodal::solve(&tables::nodal(group))?;
            TaskReport {
                reading: s.reading(),
                trace: s.trace(),
            }
        }
        Task::Mesh => {
            let s = mesh::solve(&tables::mesh(group))?;
            TaskReport {
                reading: s.reading(),
                trace: s.trace(),
            }
        }
        Task::Transient => {
            let s = transient::solve(&tables::transient(group));
            TaskReport {
                reading: s.reading(),
                trace: s.trace(),
            }
        }
    };
    Ok(report)
}
