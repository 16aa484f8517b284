//! The diff engine.
//!
//! Two payloads are compared position by position. Payload strings are
//! compared as UTF-8 bytes, and the length check uses the same unit as the
//! run offsets.

/// A maximal contiguous span where two equal-length inputs disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffRun {
    /// Position of the first disagreeing unit.
    pub offset: usize,
    /// Number of consecutive disagreeing units. Always positive.
    pub length: usize,
}

impl DiffRun {
    /// Creates a run.
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Returns the position one past the last disagreeing unit.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Returns true if `position` lies inside this run.
    #[must_use]
    pub const fn contains(&self, position: usize) -> bool {
        position >= self.offset && position < self.end()
    }
}

/// Classification of two payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffResult {
    /// The payloads are identical.
    Equal,
    /// The payloads differ in length. Contents are not compared.
    LengthMismatch,
    /// Same length, different content. Runs are ordered by offset,
    /// non-overlapping, and never empty.
    SameLengthWithDiffs(Vec<DiffRun>),
}

impl DiffResult {
    /// Returns true for [`DiffResult::Equal`].
    #[must_use]
    pub fn is_equal(&self) -> bool {
        matches!(self, DiffResult::Equal)
    }

    /// Returns the difference runs; empty unless same length with diffs.
    #[must_use]
    pub fn runs(&self) -> &[DiffRun] {
        match self {
            DiffResult::SameLengthWithDiffs(runs) => runs,
            _ => &[],
        }
    }

    /// Returns the total number of differing units.
    #[must_use]
    pub fn differing_units(&self) -> usize {
        self.runs().iter().map(|r| r.length).sum()
    }
}

/// Diffs two payload strings byte by byte.
#[must_use]
pub fn diff(left: &str, right: &str) -> DiffResult {
    diff_slices(left.as_bytes(), right.as_bytes())
}

/// Diffs two sequences element by element.
#[must_use]
pub fn diff_slices<T: PartialEq>(left: &[T], right: &[T]) -> DiffResult {
    if left.len() != right.len() {
        return DiffResult::LengthMismatch;
    }
    if left == right {
        return DiffResult::Equal;
    }

    let mut scanner = RunScanner::default();
    for (position, (l, r)) in left.iter().zip(right).enumerate() {
        scanner.step(position, l != r);
    }
    DiffResult::SameLengthWithDiffs(scanner.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Outside,
    Inside { offset: usize, length: usize },
}

#[derive(Debug)]
struct RunScanner {
    state: ScanState,
    runs: Vec<DiffRun>,
}

impl Default for RunScanner {
    fn default() -> Self {
        Self {
            state: ScanState::Outside,
            runs: Vec::new(),
        }
    }
}

impl RunScanner {
    /// One transition per position.
    fn step(&mut self, position: usize, differs: bool) {
        self.state = match (self.state, differs) {
            (ScanState::Outside, false) => ScanState::Outside,
            (ScanState::Outside, true) => ScanState::Inside {
                offset: position,
                length: 1,
            },
            (ScanState::Inside { offset, length }, true) => ScanState::Inside {
                offset,
                length: length + 1,
            },
            (ScanState::Inside { offset, length }, false) => {
                self.runs.push(DiffRun::new(offset, length));
                ScanState::Outside
            }
        };
    }

    /// Closes a run still open at the end of the input.
    fn finish(mut self) -> Vec<DiffRun> {
        if let ScanState::Inside { offset, length } = self.state {
            self.runs.push(DiffRun::new(offset, length));
        }
        self.runs
    }
}
