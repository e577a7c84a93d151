//! Sleep log

use super::WellnessState;
use crate::domain::date::TimeOfDay;
use crate::domain::id::generate_id;
use crate::domain::record::{insert_record, recent_records, DatePolicy, DatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Hours between bed and wake time, rounded to one decimal place.
///
/// A wake time earlier than the bed time is taken to fall on the next day.
/// Equal times give 0.0, which callers must reject.
pub fn hours_slept(bed_time: TimeOfDay, wake_time: TimeOfDay) -> f64 {
    let mut minutes = wake_time.minutes_from_midnight() - bed_time.minutes_from_midnight();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    (minutes as f64 / 60.0 * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepEntry {
    pub id: String,
    pub date: NaiveDate,
    pub hours_slept: f64,
    pub bed_time: TimeOfDay,
    pub wake_time: TimeOfDay,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SleepEntry {
    /// Build an entry with hours computed from the bed and wake times
    pub fn new(date: NaiveDate, bed_time: TimeOfDay, wake_time: TimeOfDay) -> Self {
        SleepEntry {
            id: generate_id(),
            date,
            hours_slept: hours_slept(bed_time, wake_time),
            bed_time,
            wake_time,
            quality: None,
            notes: None,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl DatedRecord for SleepEntry {
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

/// Fields to merge into an existing sleep entry; `None` leaves a field as is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SleepEntryPatch {
    pub date: Option<NaiveDate>,
    pub hours_slept: Option<f64>,
    pub bed_time: Option<TimeOfDay>,
    pub wake_time: Option<TimeOfDay>,
    pub quality: Option<u8>,
    pub notes: Option<String>,
}

impl SleepEntryPatch {
    fn apply(self, entry: &mut SleepEntry) {
        if let Some(date) = self.date {
            entry.date = date;
        }
        if let Some(hours) = self.hours_slept {
            entry.hours_slept = hours;
        }
        if let Some(bed) = self.bed_time {
            entry.bed_time = bed;
        }
        if let Some(wake) = self.wake_time {
            entry.wake_time = wake;
        }
        if let Some(quality) = self.quality {
            entry.quality = Some(quality);
        }
        if let Some(notes) = self.notes {
            entry.notes = Some(notes);
        }
    }
}

impl WellnessState {
    /// Record sleep for a night. An entry already on that date is replaced
    /// and keeps its id.
    pub fn add_sleep_entry(&mut self, entry: SleepEntry) -> String {
        insert_record(&mut self.sleep_entries, entry)
    }

    /// Merge fields into the entry with `id`. Returns false if there is none.
    ///
    /// Moving an entry onto a date that already holds one replaces that
    /// entry; a date never holds more than one night.
    pub fn update_sleep_entry(&mut self, id: &str, patch: SleepEntryPatch) -> bool {
        let Some(entry) = self.sleep_entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        patch.apply(entry);
        let date = entry.date;
        self.sleep_entries.retain(|e| e.id == id || e.date != date);
        true
    }

    pub fn sleep_entry(&self, id: &str) -> Option<&SleepEntry> {
        self.sleep_entries.iter().find(|e| e.id == id)
    }

    /// Entries within `days` of today (either direction), oldest first
    pub fn recent_sleep_entries(&self, today: NaiveDate, days: u32) -> Vec<SleepEntry> {
        recent_records(&self.sleep_entries, today, days)
    }
}
