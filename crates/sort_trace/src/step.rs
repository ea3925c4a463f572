use std::ops::Index;
use std::slice;

use crate::stats::Counts;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StepKind {
    Compare,
    Swap,
    Pick,
    Shift,
    Insert,
    SelectPivot,
    MovePivot,
    Partitioned,
    Tally,
    Accumulate,
    Place,
    SortBucket,
    CopyBack,
    Complete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    pub array: Vec<u64>,
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub counts: Counts,
    pub count_table: Option<Vec<usize>>,
    pub explanation: String,
}

impl Step {
    pub fn new(
        kind: StepKind,
        array: &[u64],
        primary: Option<usize>,
        secondary: Option<usize>,
        counts: Counts,
        explanation: String,
    ) -> Self {
        Self {
            kind,
            array: array.to_vec(),
            primary,
            secondary,
            counts,
            count_table: None,
            explanation,
        }
    }

    pub fn complete(array: &[u64], counts: Counts, explanation: String) -> Self {
        Self::new(StepKind::Complete, array, None, None, counts, explanation)
    }

    pub fn with_count_table(mut self, table: &[usize]) -> Self {
        self.count_table = Some(table.to_vec());
        self
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == StepKind::Complete
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BucketStep {
    pub kind: StepKind,
    pub buckets: Vec<Vec<f64>>,
    pub counts: Counts,
    pub explanation: String,
}

impl BucketStep {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == StepKind::Complete
    }
}

// Bounds are inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionStep {
    pub kind: StepKind,
    pub array: Vec<u64>,
    pub pivot: Option<usize>,
    pub comparing: Option<usize>,
    pub left_bound: Option<usize>,
    pub right_bound: Option<usize>,
    pub left_partition: Option<Vec<u64>>,
    pub right_partition: Option<Vec<u64>>,
    pub counts: Counts,
    pub explanation: String,
}

impl PartitionStep {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind == StepKind::Complete
    }
}

pub trait StepSink<S> {
    fn emit(&mut self, step: S);
}

impl<S, F: FnMut(S)> StepSink<S> for F {
    #[inline]
    fn emit(&mut self, step: S) {
        self(step)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Default for Trace<S> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<S> Trace<S> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&S> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.steps.iter()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}

impl<S> StepSink<S> for Trace<S> {
    #[inline]
    fn emit(&mut self, step: S) {
        self.steps.push(step);
    }
}

impl<S> Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(kind: StepKind) -> Step {
        Step::new(kind, &[3, 1], Some(0), Some(1), Counts::default(), String::new())
    }

    #[test]
    fn closure_is_a_push_sink() {
        let mut seen = Vec::new();
        let mut sink = |s: Step| seen.push(s.kind);
        sink.emit(step(StepKind::Compare));
        sink.emit(step(StepKind::Swap));
        assert_eq!(seen, vec![StepKind::Compare, StepKind::Swap]);
    }

    #[test]
    fn trace_records_in_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        trace.emit(step(StepKind::Compare));
        trace.emit(Step::complete(&[1, 3], Counts::default(), String::new()));

        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].kind, StepKind::Compare);
        assert!(trace.last().is_some_and(Step::is_terminal));
        assert!(trace.get(2).is_none());
        assert_eq!(trace.iter().count(), 2);

        trace.clear();
        assert!(trace.first().is_none());
    }

    #[test]
    fn count_table_is_optional() {
        let plain = step(StepKind::Tally);
        assert!(plain.count_table.is_none());
        let with_table = plain.with_count_table(&[0, 2, 1]);
        assert_eq!(with_table.count_table.as_deref(), Some(&[0, 2, 1][..]));
    }
}
