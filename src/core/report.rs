use crate::domain::model::{ProjectGroups, ProjectReport, ProjectSpan, SpanResult};

pub const SECTION_SEPARATOR: &str =
    "----------------------------------------------------------------";

/// Who worked on which project and when.
pub fn render_employees(groups: &ProjectGroups) -> String {
    let mut out = String::new();
    for (project_id, records) in groups.iter() {
        out.push_str(&format!("Employees working on Project [{}]:\n", project_id));
        for record in records {
            out.push_str(&format!(
                "Employee ID: {}, Start Date: {}, Finish Date: {}\n",
                record.employee_id(),
                record.start_date(),
                record.end_date()
            ));
        }
    }
    out
}

pub fn render_span(span: &SpanResult) -> String {
    format!(
        "The employees that have worked together for the longest period on this project are:\n\
         Employees [{}] and [{}] have spent [{}] days working on this project together!\n\
         That is exactly [{} years, {} weeks, and {} days]!\n",
        span.employee_id_a,
        span.employee_id_b,
        span.max_days,
        span.years(),
        span.weeks(),
        span.days()
    )
}

pub fn render_longest_pairs(spans: &[ProjectSpan]) -> String {
    spans
        .iter()
        .map(|entry| {
            format!(
                "\nProject ID: [{}]\n{}",
                entry.project_id,
                render_span(&entry.span)
            )
        })
        .collect()
}

/// Full console output: employee listing, separator, longest pairs.
pub fn render_report(report: &ProjectReport) -> String {
    format!(
        "{}\n{}\n{}\n",
        render_employees(&report.groups),
        SECTION_SEPARATOR,
        render_longest_pairs(&report.spans)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grouping::group_by_project;
    use crate::domain::model::AssignmentRecord;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_render_employees() {
        let groups = group_by_project(vec![
            AssignmentRecord::new(143, 12, date("2013-11-01"), date("2014-01-05")).unwrap(),
            AssignmentRecord::new(218, 10, date("2012-05-16"), date("2013-04-27")).unwrap(),
        ]);

        assert_eq!(
            render_employees(&groups),
            "Employees working on Project [10]:\n\
             Employee ID: 218, Start Date: 2012-05-16, Finish Date: 2013-04-27\n\
             Employees working on Project [12]:\n\
             Employee ID: 143, Start Date: 2013-11-01, Finish Date: 2014-01-05\n"
        );
    }

    #[test]
    fn test_render_span_decomposes_days() {
        let text = render_span(&SpanResult {
            employee_id_a: 1,
            employee_id_b: 2,
            max_days: 400,
        });
        assert!(text.contains("Employees [1] and [2] have spent [400] days"));
        assert!(text.ends_with("That is exactly [1 years, 5 weeks, and 0 days]!\n"));
    }

    #[test]
    fn test_render_sentinel_span() {
        let text = render_longest_pairs(&[ProjectSpan {
            project_id: 7,
            span: SpanResult::default(),
        }]);
        assert!(text.starts_with("\nProject ID: [7]\n"));
        assert!(text.contains("Employees [0] and [0] have spent [0] days"));
    }

    #[test]
    fn test_render_report_layout() {
        let report = ProjectReport {
            groups: ProjectGroups::default(),
            spans: Vec::new(),
        };
        assert_eq!(render_report(&report), format!("\n{}\n\n", SECTION_SEPARATOR));
    }
}
