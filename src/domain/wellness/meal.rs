//! Meal log

use super::WellnessState;
use crate::domain::date::TimeOfDay;
use crate::domain::id::generate_id;
use crate::domain::record::{insert_record, DatePolicy, DatedRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        f.write_str(name)
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            "snack" => Ok(MealType::Snack),
            _ => Err(format!(
                "Invalid meal type: '{}'. Valid types: breakfast, lunch, dinner, snack",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: String,
    pub date: NaiveDate,
    pub name: String,
    pub calories: f64,
    pub time: TimeOfDay,
    #[serde(rename = "type")]
    pub meal_type: MealType,
}

impl Meal {
    pub fn new(
        date: NaiveDate,
        name: impl Into<String>,
        calories: f64,
        time: TimeOfDay,
        meal_type: MealType,
    ) -> Self {
        Meal {
            id: generate_id(),
            date,
            name: name.into(),
            calories,
            time,
            meal_type,
        }
    }
}

impl DatedRecord for Meal {
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

impl WellnessState {
    pub fn add_meal(&mut self, meal: Meal) -> String {
        insert_record(&mut self.meals, meal)
    }

    /// Remove a meal by id. Returns false when no meal had that id.
    pub fn delete_meal(&mut self, id: &str) -> bool {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        self.meals.len() != before
    }

    pub fn today_meals(&self, today: NaiveDate) -> Vec<&Meal> {
        self.meals.iter().filter(|m| m.date == today).collect()
    }

    pub fn today_calories(&self, today: NaiveDate) -> f64 {
        self.today_meals(today).iter().map(|m| m.calories).sum()
    }
}
