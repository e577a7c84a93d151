//! Per-day record policy and date-scoped queries shared by every dated entity

use crate::domain::date::{day_distance, window_dates};
use crate::domain::id::generate_id;
use chrono::NaiveDate;

/// How many records of one kind may exist for a single calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePolicy {
    /// Singleton per date: inserting again replaces the record and keeps its id
    OnePerDay,
    /// Any number of records per date: inserting always appends
    ManyPerDay,
}

/// A record that lives on a calendar date
pub trait DatedRecord {
    const POLICY: DatePolicy;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    fn date(&self) -> NaiveDate;
}

/// Insert a record according to its kind's date policy.
///
/// Returns the id the record is stored under: the existing id when a
/// one-per-day record replaces an earlier one, a freshly generated id otherwise.
pub fn insert_record<T: DatedRecord>(records: &mut Vec<T>, mut record: T) -> String {
    if T::POLICY == DatePolicy::OnePerDay {
        if let Some(existing) = records.iter_mut().find(|r| r.date() == record.date()) {
            let id = existing.id().to_string();
            record.set_id(id.clone());
            *existing = record;
            return id;
        }
    }

    let id = generate_id();
    record.set_id(id.clone());
    records.push(record);
    id
}

/// Records whose absolute day distance from `today` is at most `days`,
/// sorted ascending by date. Future-dated records within the distance count.
pub fn recent_records<T: DatedRecord + Clone>(records: &[T], today: NaiveDate, days: u32) -> Vec<T> {
    let mut recent: Vec<T> = records
        .iter()
        .filter(|r| day_distance(today, r.date()) <= days as i64)
        .cloned()
        .collect();
    recent.sort_by_key(|r| r.date());
    recent
}

/// One calendar day of a day-window query
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot<'a, T> {
    pub date: NaiveDate,
    pub record: Option<&'a T>,
}

/// Left-join stored records onto every date of the `days`-long window ending
/// at `today`. Missing days are kept as empty slots, oldest first.
pub fn day_window<T: DatedRecord>(records: &[T], today: NaiveDate, days: u32) -> Vec<DaySlot<'_, T>> {
    window_dates(today, days)
        .into_iter()
        .map(|date| DaySlot {
            date,
            record: records.iter().find(|r| r.date() == date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Daily {
        id: String,
        date: NaiveDate,
        value: u32,
    }

    impl DatedRecord for Daily {
        const POLICY: DatePolicy = DatePolicy::OnePerDay;

        fn id(&self) -> &str {
            &self.id
        }

        fn set_id(&mut self, id: String) {
            self.id = id;
        }

        fn date(&self) -> NaiveDate {
            self.date
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Many(Daily);

    impl DatedRecord for Many {
        const POLICY: DatePolicy = DatePolicy::ManyPerDay;

        fn id(&self) -> &str {
            &self.0.id
        }

        fn set_id(&mut self, id: String) {
            self.0.id = id;
        }

        fn date(&self) -> NaiveDate {
            self.0.date
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn daily(id: &str, d: u32, value: u32) -> Daily {
        Daily {
            id: id.to_string(),
            date: date(d),
            value,
        }
    }

    #[test]
    fn test_one_per_day_replaces_and_keeps_id() {
        let mut records = Vec::new();
        let first = insert_record(&mut records, daily("a", 1, 1));
        assert_eq!(insert_record(&mut records, daily("b", 1, 2)), first);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, first);
        assert_eq!(records[0].value, 2);
    }

    #[test]
    fn test_many_per_day_appends() {
        let mut records = Vec::new();
        insert_record(&mut records, Many(daily("a", 1, 1)));
        let second = insert_record(&mut records, Many(daily("b", 1, 2)));

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].0.id, second);
    }

    #[test]
    fn test_appending_the_same_record_twice_gives_distinct_ids() {
        let mut records = Vec::new();
        let record = Many(daily("shared", 1, 1));
        let a = insert_record(&mut records, record.clone());
        let b = insert_record(&mut records, record);

        assert_ne!(a, b);
        assert_eq!(records[0].0.id, a);
        assert_eq!(records[1].0.id, b);
    }

    #[test]
    fn test_recent_records_filters_and_sorts() {
        let records = vec![
            daily("late", 10, 0),
            daily("old", 1, 0),
            daily("early", 8, 0),
            daily("future", 12, 0),
        ];

        let recent = recent_records(&records, date(10), 2);
        let ids: Vec<&str> = recent.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late", "future"]);
    }

    #[test]
    fn test_day_window_keeps_gaps_in_order() {
        let records = vec![daily("x", 5, 7), daily("y", 3, 9)];
        let window = day_window(&records, date(5), 4);

        assert_eq!(window.len(), 4);
        assert_eq!(window[0].date, date(2));
        assert!(window[0].record.is_none());
        assert_eq!(window[1].record.map(|r| r.value), Some(9));
        assert!(window[2].record.is_none());
        assert_eq!(window[3].record.map(|r| r.id.as_str()), Some("x"));
    }
}
