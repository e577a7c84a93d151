//! Water intake

use super::WellnessState;
use crate::domain::id::{generate_id, TEMP_ID};
use crate::domain::record::{insert_record, DatePolicy, DatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WATER_GOAL: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntake {
    pub id: String,
    pub date: NaiveDate,
    pub cups: u32,
    /// Goal snapshot taken when the record was created or last re-targeted
    pub goal: u32,
}

impl WaterIntake {
    /// Share of the goal reached, clamped to 100 even when cups exceed the goal
    pub fn percent_complete(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (self.cups as f64 / self.goal as f64 * 100.0).min(100.0)
    }

    pub fn goal_reached(&self) -> bool {
        self.goal > 0 && self.cups >= self.goal
    }

    /// True for the synthesized zero-state view
    pub fn is_transient(&self) -> bool {
        self.id == TEMP_ID
    }
}

impl DatedRecord for WaterIntake {
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

impl WellnessState {
    fn water_for_mut(&mut self, date: NaiveDate) -> Option<&mut WaterIntake> {
        self.water_intake.iter_mut().find(|w| w.date == date)
    }

    /// Add one cup to today's record, creating it on first use
    pub fn add_water_cup(&mut self, today: NaiveDate) {
        if let Some(record) = self.water_for_mut(today) {
            record.cups += 1;
            return;
        }

        let record = WaterIntake {
            id: generate_id(),
            date: today,
            cups: 1,
            goal: self.water_goal,
        };
        insert_record(&mut self.water_intake, record);
    }

    /// Remove one cup from today's record; never below zero, never creates
    pub fn remove_water_cup(&mut self, today: NaiveDate) {
        if let Some(record) = self.water_for_mut(today) {
            record.cups = record.cups.saturating_sub(1);
        }
    }

    /// Change the default goal. Today's existing record is re-targeted;
    /// earlier days keep their snapshot.
    pub fn set_water_goal(&mut self, goal: u32, today: NaiveDate) {
        self.water_goal = goal;
        if let Some(record) = self.water_for_mut(today) {
            record.goal = goal;
        }
    }

    /// Drop today's record entirely
    pub fn reset_water_intake(&mut self, today: NaiveDate) {
        self.water_intake.retain(|w| w.date != today);
    }

    /// Today's record, or a zero-state view that is not stored
    pub fn today_water_intake(&self, today: NaiveDate) -> WaterIntake {
        self.water_intake
            .iter()
            .find(|w| w.date == today)
            .cloned()
            .unwrap_or_else(|| WaterIntake {
                id: TEMP_ID.to_string(),
                date: today,
                cups: 0,
                goal: self.water_goal,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    #[test]
    fn test_today_water_intake_zero_state_is_not_stored() {
        let state = WellnessState::empty();
        let view = state.today_water_intake(today());

        assert_eq!(view.cups, 0);
        assert_eq!(view.goal, DEFAULT_WATER_GOAL);
        assert_eq!(view.id, TEMP_ID);
        assert!(view.is_transient());
        assert!(state.water_intake.is_empty());
    }

    #[test]
    fn test_add_water_cup_n_times() {
        let mut state = WellnessState::empty();
        for _ in 0..5 {
            state.add_water_cup(today());
        }

        let view = state.today_water_intake(today());
        assert_eq!(view.cups, 5);
        assert!(!view.is_transient());
        assert_eq!(state.water_intake.len(), 1);
    }

    #[test]
    fn test_remove_water_cup_floors_at_zero() {
        let mut state = WellnessState::empty();
        state.add_water_cup(today());
        for _ in 0..4 {
            state.remove_water_cup(today());
        }
        assert_eq!(state.today_water_intake(today()).cups, 0);
    }

    #[test]
    fn test_remove_water_cup_on_missing_day_is_noop() {
        let mut state = WellnessState::empty();
        state.remove_water_cup(today());
        assert!(state.water_intake.is_empty());
    }

    #[test]
    fn test_set_water_goal_updates_today_only() {
        let mut state = WellnessState::empty();
        let yesterday = today() - Duration::days(1);
        state.add_water_cup(yesterday);
        state.add_water_cup(today());

        state.set_water_goal(10, today());

        assert_eq!(state.water_goal, 10);
        assert_eq!(state.today_water_intake(today()).goal, 10);
        assert_eq!(state.today_water_intake(yesterday).goal, DEFAULT_WATER_GOAL);
    }

    #[test]
    fn test_set_water_goal_without_record_only_changes_default() {
        let mut state = WellnessState::empty();
        state.set_water_goal(6, today());

        assert!(state.water_intake.is_empty());
        assert_eq!(state.today_water_intake(today()).goal, 6);
    }

    #[test]
    fn test_percent_complete_clamps_at_100() {
        let mut state = WellnessState::empty();
        state.set_water_goal(8, today());
        for _ in 0..8 {
            state.add_water_cup(today());
        }
        assert_eq!(state.today_water_intake(today()).percent_complete(), 100.0);

        state.add_water_cup(today());
        let view = state.today_water_intake(today());
        assert_eq!(view.cups, 9);
        assert_eq!(view.percent_complete(), 100.0);
        assert!(view.goal_reached());
    }

    #[test]
    fn test_percent_complete_partial() {
        let intake = WaterIntake {
            id: "x".to_string(),
            date: today(),
            cups: 2,
            goal: 8,
        };
        assert_eq!(intake.percent_complete(), 25.0);
        assert!(!intake.goal_reached());
    }

    #[test]
    fn test_reset_water_intake_removes_today() {
        let mut state = WellnessState::empty();
        state.add_water_cup(today() - Duration::days(1));
        state.add_water_cup(today());
        state.reset_water_intake(today());

        assert_eq!(state.water_intake.len(), 1);
        assert!(state.today_water_intake(today()).is_transient());
    }
}
