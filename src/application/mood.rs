//! Mood tracking use cases

use crate::application::store::Store;
use crate::domain::{MoodEntry, MoodPoint, MoodRange, MoodState};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Service over the persisted mood store
pub struct MoodService {
    store: Store<MoodState>,
    today: NaiveDate,
}

impl MoodService {
    /// Open the mood store, treating `today` as the current calendar day
    pub fn open(repository: FileSystemRepository, today: NaiveDate) -> Result<Self> {
        Ok(MoodService {
            store: Store::open(repository, today)?,
            today,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Record a mood; replaces the entry already logged for that date
    pub fn log_mood(&mut self, entry: MoodEntry) -> Result<String> {
        self.store
            .commit("add_mood_entry", |state| state.add_mood_entry(entry))
    }

    pub fn todays_entry(&self) -> Option<&MoodEntry> {
        self.store.state().todays_mood_entry(self.today)
    }

    pub fn entries(&self) -> &[MoodEntry] {
        self.store.state().entries()
    }

    pub fn chart(&self, range: MoodRange) -> Vec<MoodPoint> {
        self.store.state().chart(self.today, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MoodType;
    use crate::infrastructure::StateRepository;
    use chrono::Duration;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()
    }

    fn open_service(temp: &TempDir) -> MoodService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        if !repo.is_initialized() {
            repo.initialize().unwrap();
        }
        MoodService::open(repo, today()).unwrap()
    }

    #[test]
    fn test_log_mood_twice_keeps_single_entry_across_reopen() {
        let temp = TempDir::new().unwrap();
        let mut first = open_service(&temp);
        let id = first
            .log_mood(MoodEntry::new(today(), MoodType::Sad, 2))
            .unwrap();

        let mut second = open_service(&temp);
        let again = second
            .log_mood(MoodEntry::new(today(), MoodType::Good, 8).with_note("better"))
            .unwrap();
        assert_eq!(id, again);

        let reopened = open_service(&temp);
        assert_eq!(reopened.entries().len(), 1);
        let entry = reopened.todays_entry().unwrap();
        assert_eq!(entry.mood, MoodType::Good);
        assert_eq!(entry.note, "better");
    }

    #[test]
    fn test_chart_uses_service_today() {
        let temp = TempDir::new().unwrap();
        let mut service = open_service(&temp);
        service
            .log_mood(MoodEntry::new(today() - Duration::days(1), MoodType::Neutral, 5))
            .unwrap();

        let chart = service.chart(MoodRange::Week);
        assert_eq!(chart.last().unwrap().date, today());
        assert_eq!(chart.last().unwrap().value, None);
        assert_eq!(chart[5].value, Some(6));
    }
}
