//! Longest-pair search over a project's assignments.
//!
//! Records are compared as a sliding window of adjacent pairs `(i, i + 1)`.
//! Each pair is classified into an [`IntervalRelation`]; the relation decides
//! which two dates bound the span. Relations are tested in [`IntervalRelation::ORDER`]
//! and when several hold at once the last one in that order wins.

use chrono::NaiveDate;

use crate::domain::model::{AssignmentRecord, ProjectGroups, ProjectSpan, SpanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<&AssignmentRecord> for DateInterval {
    fn from(record: &AssignmentRecord) -> Self {
        Self {
            start: record.start_date(),
            end: record.end_date(),
        }
    }
}

/// How the first interval `a` sits relative to the second interval `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalRelation {
    /// One ends strictly before the other starts.
    Disjoint,
    /// One ends on the day the other starts.
    Touching,
    /// `a` starts and ends earlier, and the two overlap.
    LeftShifted,
    /// `a` starts and ends later, and the two overlap.
    RightShifted,
    /// `a` starts earlier and ends later.
    Contains,
    Identical,
    SharedStartEndsBefore,
    SharedEndStartsBefore,
    /// `a` starts later and ends earlier.
    Inside,
    SharedEndStartsAfter,
    SharedStartEndsAfter,
}

impl IntervalRelation {
    pub const ORDER: [IntervalRelation; 11] = [
        IntervalRelation::Disjoint,
        IntervalRelation::Touching,
        IntervalRelation::LeftShifted,
        IntervalRelation::RightShifted,
        IntervalRelation::Contains,
        IntervalRelation::Identical,
        IntervalRelation::SharedStartEndsBefore,
        IntervalRelation::SharedEndStartsBefore,
        IntervalRelation::Inside,
        IntervalRelation::SharedEndStartsAfter,
        IntervalRelation::SharedStartEndsAfter,
    ];

    pub fn holds(self, a: &DateInterval, b: &DateInterval) -> bool {
        use IntervalRelation::*;
        match self {
            Disjoint => a.end < b.start || b.end < a.start,
            Touching => a.end == b.start || b.end == a.start,
            LeftShifted => a.start < b.start && a.end < b.end && a.end > b.start,
            RightShifted => a.start > b.start && a.end > b.end && a.start < b.end,
            Contains => a.start < b.start && a.end > b.end,
            Identical => a.start == b.start && a.end == b.end,
            SharedStartEndsBefore => a.start == b.start && a.end < b.end,
            SharedEndStartsBefore => a.start < b.start && a.end == b.end,
            Inside => a.start > b.start && a.end < b.end,
            SharedEndStartsAfter => a.start > b.start && a.end == b.end,
            SharedStartEndsAfter => a.start == b.start && a.end > b.end,
        }
    }

    /// The `(from, to)` dates the span is measured between.
    pub fn bounds(self, a: &DateInterval, b: &DateInterval) -> (NaiveDate, NaiveDate) {
        use IntervalRelation::*;
        match self {
            Disjoint | Touching | RightShifted | Contains => (a.start, b.end),
            LeftShifted => (b.start, a.end),
            Identical | SharedStartEndsBefore => (a.start, a.end),
            SharedEndStartsBefore => (b.start, b.end),
            Inside | SharedEndStartsAfter | SharedStartEndsAfter => (a.start, b.end),
        }
    }

    /// Whole days from `from` to `to`; negative when `to` precedes `from`.
    pub fn span_days(self, a: &DateInterval, b: &DateInterval) -> i64 {
        let (from, to) = self.bounds(a, b);
        (to - from).num_days()
    }
}

/// Last relation in [`IntervalRelation::ORDER`] that holds for `(a, b)`.
pub fn classify(a: &DateInterval, b: &DateInterval) -> Option<IntervalRelation> {
    IntervalRelation::ORDER
        .iter()
        .rev()
        .copied()
        .find(|relation| relation.holds(a, b))
}

/// Span in days for one adjacent pair, or `None` when both records are the same employee.
pub fn pair_span_days(first: &AssignmentRecord, second: &AssignmentRecord) -> Option<i64> {
    if first.employee_id() == second.employee_id() {
        return None;
    }
    let a = DateInterval::from(first);
    let b = DateInterval::from(second);
    classify(&a, &b).map(|relation| relation.span_days(&a, &b))
}

/// Scans every adjacent pair and keeps the first strictly-largest span.
pub fn longest_pair(records: &[AssignmentRecord]) -> SpanResult {
    let mut result = SpanResult::default();

    for pair in records.windows(2) {
        let (first, second) = (&pair[0], &pair[1]);
        let Some(days) = pair_span_days(first, second) else {
            continue;
        };

        tracing::trace!(
            "pair {} / {} on project {}: {} days",
            first.employee_id(),
            second.employee_id(),
            first.project_id(),
            days
        );

        if days > result.max_days {
            result = SpanResult {
                employee_id_a: first.employee_id(),
                employee_id_b: second.employee_id(),
                max_days: days,
            };
        }
    }

    result
}

/// [`longest_pair`] for every project, ascending by project id.
pub fn longest_pairs(groups: &ProjectGroups) -> Vec<ProjectSpan> {
    groups
        .iter()
        .map(|(project_id, records)| ProjectSpan {
            project_id,
            span: longest_pair(records),
        })
        .collect()
}
