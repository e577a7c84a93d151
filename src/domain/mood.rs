//! Mood entries and the mood store

use crate::domain::id::generate_id;
use crate::domain::record::{day_window, insert_record, DatePolicy, DatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Activity labels offered when logging a mood
pub const DEFAULT_ACTIVITY_TAGS: [&str; 14] = [
    "Exercise",
    "Work",
    "Family",
    "Friends",
    "Sleep",
    "Meditation",
    "Reading",
    "Travel",
    "Outdoors",
    "Food",
    "Creative",
    "Learning",
    "Self-care",
    "Resting",
];

/// The five symbolic mood levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Great,
    Good,
    Neutral,
    Down,
    Sad,
}

impl MoodType {
    pub const ALL: [MoodType; 5] = [
        MoodType::Great,
        MoodType::Good,
        MoodType::Neutral,
        MoodType::Down,
        MoodType::Sad,
    ];

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodType::Great => "😁",
            MoodType::Good => "🙂",
            MoodType::Neutral => "😐",
            MoodType::Down => "🙁",
            MoodType::Sad => "😔",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodType::Great => "Great",
            MoodType::Good => "Good",
            MoodType::Neutral => "Neutral",
            MoodType::Down => "Down",
            MoodType::Sad => "Sad",
        }
    }

    /// Value plotted on the 0-10 trend chart
    pub fn chart_value(&self) -> u8 {
        match self {
            MoodType::Great => 10,
            MoodType::Good => 8,
            MoodType::Neutral => 6,
            MoodType::Down => 4,
            MoodType::Sad => 2,
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

impl FromStr for MoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MoodType::ALL
            .into_iter()
            .find(|m| m.label().eq_ignore_ascii_case(trimmed) || m.emoji() == trimmed)
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Valid moods: great, good, neutral, down, sad",
                    s
                )
            })
    }
}

/// Label for the 1-10 fine-tuned mood level
pub fn mood_level_label(level: u8) -> &'static str {
    match level {
        0..=3 => "Not good",
        4..=7 => "Neutral",
        _ => "Amazing",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: MoodType,
    pub mood_level: u8,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: MoodType, mood_level: u8) -> Self {
        MoodEntry {
            id: generate_id(),
            date,
            mood,
            mood_level,
            note: String::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl DatedRecord for MoodEntry {
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

/// Fixed-length windows offered by the mood trend view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoodRange {
    #[default]
    Week,
    Month,
}

impl MoodRange {
    pub fn days(&self) -> u32 {
        match self {
            MoodRange::Week => 7,
            MoodRange::Month => 30,
        }
    }
}

impl fmt::Display for MoodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoodRange::Week => f.write_str("week"),
            MoodRange::Month => f.write_str("month"),
        }
    }
}

impl FromStr for MoodRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(MoodRange::Week),
            "month" => Ok(MoodRange::Month),
            _ => Err(format!("Invalid range: '{}'. Valid ranges: week, month", s)),
        }
    }
}

/// One day of the mood trend; `None` marks a day without an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    pub date: NaiveDate,
    pub mood: Option<MoodType>,
    pub value: Option<u8>,
}

/// Full history of mood entries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodState {
    #[serde(default)]
    pub mood_entries: Vec<MoodEntry>,
}

impl MoodState {
    /// Record a mood for its date. A second entry for the same date replaces
    /// the first and keeps the first entry's id.
    pub fn add_mood_entry(&mut self, entry: MoodEntry) -> String {
        insert_record(&mut self.mood_entries, entry)
    }

    pub fn todays_mood_entry(&self, today: NaiveDate) -> Option<&MoodEntry> {
        self.mood_entries.iter().find(|e| e.date == today)
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.mood_entries
    }

    /// Every day of the range ending at `today`, oldest first, gaps kept
    pub fn chart(&self, today: NaiveDate, range: MoodRange) -> Vec<MoodPoint> {
        day_window(&self.mood_entries, today, range.days())
            .into_iter()
            .map(|slot| MoodPoint {
                date: slot.date,
                mood: slot.record.map(|e| e.mood),
                value: slot.record.map(|e| e.mood.chart_value()),
            })
            .collect()
    }
}
