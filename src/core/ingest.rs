//! Turns raw input text into [`AssignmentRecord`]s.
//!
//! Every line is split on the literal `", "` and all tokens are concatenated
//! into one stream, which is then consumed four tokens at a time:
//! `EmpID, ProjectID, DateFrom, DateTo`. Records may therefore span lines.

use chrono::NaiveDate;

use crate::domain::model::AssignmentRecord;
use crate::domain::ports::Clock;
use crate::utils::error::{PairError, Result};

pub const FIELD_SEPARATOR: &str = ", ";
pub const FIELDS_PER_RECORD: usize = 4;
pub const OPEN_END_DATE: &str = "NULL";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Splits every non-blank line on [`FIELD_SEPARATOR`] and flattens the result.
///
/// Empty tokens at the end of a line are dropped, so a line ending in `", "`
/// simply continues its record on the next line.
pub fn tokenize(input: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for line in input.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        while fields.last().is_some_and(|field| field.is_empty()) {
            fields.pop();
        }
        tokens.extend(fields);
    }
    tokens
}

pub fn parse_records<C: Clock + ?Sized>(input: &str, clock: &C) -> Result<Vec<AssignmentRecord>> {
    let tokens = tokenize(input);
    records_from_tokens(&tokens, clock)
}

pub fn records_from_tokens<C: Clock + ?Sized>(
    tokens: &[&str],
    clock: &C,
) -> Result<Vec<AssignmentRecord>> {
    if tokens.len() % FIELDS_PER_RECORD != 0 {
        return Err(PairError::format(format!(
            "expected a multiple of {} fields, found {} (trailing fields: {:?})",
            FIELDS_PER_RECORD,
            tokens.len(),
            &tokens[tokens.len() - tokens.len() % FIELDS_PER_RECORD..]
        )));
    }

    // Resolved once so every open-ended record in a run shares the same date.
    let mut today: Option<NaiveDate> = None;

    tokens
        .chunks_exact(FIELDS_PER_RECORD)
        .map(|fields| {
            let employee_id = parse_id(fields[0])?;
            let project_id = parse_id(fields[1])?;
            let start_date = parse_date(fields[2])?;
            let end_date = if fields[3] == OPEN_END_DATE {
                *today.get_or_insert_with(|| clock.today())
            } else {
                parse_date(fields[3])?
            };
            AssignmentRecord::new(employee_id, project_id, start_date, end_date)
        })
        .collect()
}

fn parse_id(token: &str) -> Result<i32> {
    token.parse().map_err(|source| PairError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}

/// Strict `YYYY-MM-DD`: chrono alone would also take one-digit months and days.
fn parse_date(token: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| PairError::InvalidDate {
        token: token.to_string(),
        reason,
    };

    let bytes = token.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }

    NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}
