use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::utils::error::{PairError, Result};

/// One line of work: an employee assigned to a project between two dates (inclusive).
///
/// Deserialization goes through [`AssignmentRecord::new`], so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAssignment")]
pub struct AssignmentRecord {
    employee_id: i32,
    project_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl AssignmentRecord {
    pub fn new(
        employee_id: i32,
        project_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self> {
        if start_date > end_date {
            return Err(PairError::InvalidInterval {
                employee_id,
                project_id,
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            employee_id,
            project_id,
            start_date,
            end_date,
        })
    }

    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    pub fn project_id(&self) -> i32 {
        self.project_id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }
}

#[derive(Deserialize)]
struct RawAssignment {
    employee_id: i32,
    project_id: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawAssignment> for AssignmentRecord {
    type Error = PairError;

    fn try_from(raw: RawAssignment) -> Result<Self> {
        Self::new(raw.employee_id, raw.project_id, raw.start_date, raw.end_date)
    }
}

/// Records bucketed by project id. Buckets keep input order; keys iterate ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectGroups {
    buckets: BTreeMap<i32, Vec<AssignmentRecord>>,
}

impl ProjectGroups {
    pub(crate) fn push(&mut self, record: AssignmentRecord) {
        self.buckets
            .entry(record.project_id())
            .or_default()
            .push(record);
    }

    pub fn get(&self, project_id: i32) -> Option<&[AssignmentRecord]> {
        self.buckets.get(&project_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[AssignmentRecord])> {
        self.buckets
            .iter()
            .map(|(project_id, records)| (*project_id, records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Longest span found for one project.
///
/// Employee ids stay at the `0` sentinel and `max_days` at `0` when no adjacent
/// pair produced a positive span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpanResult {
    pub employee_id_a: i32,
    pub employee_id_b: i32,
    pub max_days: i64,
}

impl SpanResult {
    pub const DAYS_PER_YEAR: i64 = 365;
    pub const DAYS_PER_WEEK: i64 = 7;

    /// Whole 365-day years.
    pub fn years(&self) -> i64 {
        self.max_days / Self::DAYS_PER_YEAR
    }

    /// Whole weeks left after the years.
    pub fn weeks(&self) -> i64 {
        (self.max_days % Self::DAYS_PER_YEAR) / Self::DAYS_PER_WEEK
    }

    /// Days left after the years and weeks.
    pub fn days(&self) -> i64 {
        (self.max_days % Self::DAYS_PER_YEAR) % Self::DAYS_PER_WEEK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpan {
    pub project_id: i32,
    pub span: SpanResult,
}

/// Everything the formatter needs: the grouping and one span per project, ascending by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectReport {
    pub groups: ProjectGroups,
    pub spans: Vec<ProjectSpan>,
}
