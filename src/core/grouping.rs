use crate::domain::model::{AssignmentRecord, ProjectGroups};

pub fn group_by_project<I>(records: I) -> ProjectGroups
where
    I: IntoIterator<Item = AssignmentRecord>,
{
    let mut groups = ProjectGroups::default();
    for record in records {
        groups.push(record);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(employee_id: i32, project_id: i32, day: u32) -> AssignmentRecord {
        let start = NaiveDate::from_ymd_opt(2020, 1, day).unwrap();
        AssignmentRecord::new(employee_id, project_id, start, start).unwrap()
    }

    #[test]
    fn test_buckets_preserve_input_order() {
        let records = vec![
            record(1, 20, 5),
            record(2, 10, 1),
            record(3, 20, 2),
            record(4, 10, 9),
            record(5, 20, 1),
        ];
        let groups = group_by_project(records.clone());

        let ids: Vec<i32> = groups
            .get(20)
            .unwrap()
            .iter()
            .map(|r| r.employee_id())
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);

        for (project_id, bucket) in groups.iter() {
            let expected: Vec<AssignmentRecord> = records
                .iter()
                .copied()
                .filter(|r| r.project_id() == project_id)
                .collect();
            assert_eq!(bucket, expected.as_slice());
        }
    }

    #[test]
    fn test_no_records_lost_or_duplicated() {
        let records: Vec<_> = (1..=9).map(|i| record(i, i % 3, i as u32)).collect();
        let groups = group_by_project(records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.record_count(), 9);
    }

    #[test]
    fn test_project_ids_ascend() {
        let groups = group_by_project(vec![record(1, 30, 1), record(2, 5, 1), record(3, 12, 1)]);
        let ids: Vec<i32> = groups.iter().map(|(project_id, _)| project_id).collect();
        assert_eq!(ids, vec![5, 12, 30]);
    }

    #[test]
    fn test_empty_input() {
        let groups = group_by_project(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(groups.get(1), None);
    }
}
