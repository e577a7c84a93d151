//! Weight log

use super::WellnessState;
use crate::domain::id::generate_id;
use crate::domain::record::{insert_record, recent_records, DatePolicy, DatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub id: String,
    pub date: NaiveDate,
    /// Kilograms
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        WeightEntry {
            id: generate_id(),
            date,
            weight,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl DatedRecord for WeightEntry {
    const POLICY: DatePolicy = DatePolicy::ManyPerDay;

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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightEntryPatch {
    pub date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub note: Option<String>,
}

impl WellnessState {
    pub fn add_weight_entry(&mut self, entry: WeightEntry) -> String {
        insert_record(&mut self.weight_entries, entry)
    }

    pub fn update_weight_entry(&mut self, id: &str, patch: WeightEntryPatch) -> bool {
        let Some(entry) = self.weight_entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if let Some(date) = patch.date {
            entry.date = date;
        }
        if let Some(weight) = patch.weight {
            entry.weight = weight;
        }
        if let Some(note) = patch.note {
            entry.note = Some(note);
        }
        true
    }

    pub fn delete_weight_entry(&mut self, id: &str) -> bool {
        let before = self.weight_entries.len();
        self.weight_entries.retain(|e| e.id != id);
        self.weight_entries.len() != before
    }

    /// Entries within `days` of today (either direction), oldest first
    pub fn recent_weight_entries(&self, today: NaiveDate, days: u32) -> Vec<WeightEntry> {
        recent_records(&self.weight_entries, today, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    #[test]
    fn test_same_day_entries_are_kept() {
        let mut state = WellnessState::empty();
        let a = state.add_weight_entry(WeightEntry::new(today(), 70.2));
        let b = state.add_weight_entry(WeightEntry::new(today(), 69.8));

        assert_ne!(a, b);
        assert_eq!(state.weight_entries.len(), 2);
    }

    #[test]
    fn test_update_weight_entry() {
        let mut state = WellnessState::empty();
        let id = state.add_weight_entry(WeightEntry::new(today(), 70.0).with_note("morning"));

        assert!(state.update_weight_entry(
            &id,
            WeightEntryPatch {
                weight: Some(71.5),
                ..Default::default()
            }
        ));
        let entry = &state.weight_entries[0];
        assert_eq!(entry.weight, 71.5);
        assert_eq!(entry.note.as_deref(), Some("morning"));

        assert!(!state.update_weight_entry("missing", WeightEntryPatch::default()));
    }

    #[test]
    fn test_delete_weight_entry() {
        let mut state = WellnessState::empty();
        let id = state.add_weight_entry(WeightEntry::new(today(), 70.0));
        assert!(!state.delete_weight_entry("missing"));
        assert!(state.delete_weight_entry(&id));
        assert!(state.weight_entries.is_empty());
    }

    #[test]
    fn test_recent_weight_entries_sorted_ascending() {
        let mut state = WellnessState::empty();
        state.add_weight_entry(WeightEntry::new(today(), 70.0));
        state.add_weight_entry(WeightEntry::new(today() - Duration::days(20), 72.0));
        state.add_weight_entry(WeightEntry::new(today() - Duration::days(45), 75.0));
        state.add_weight_entry(WeightEntry::new(today() - Duration::days(5), 71.0));

        let recent = state.recent_weight_entries(today(), 30);
        let weights: Vec<f64> = recent.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![72.0, 71.0, 70.0]);
    }
}
