//! Output formatting utilities

use crate::domain::mood::mood_level_label;
use crate::domain::session::format_clock;
use crate::domain::wellness::{Meal, SleepEntry, StretchRoutine, WaterIntake, WeightEntry, WorkoutRoutine};
use crate::domain::{format_date, MoodEntry, MoodPoint};

const BAR_WIDTH: usize = 20;

fn bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Today's water progress
pub fn format_water(water: &WaterIntake) -> String {
    let mut output = format!(
        "Water {}: {}/{} cups ({:.0}%)\n{}",
        format_date(water.date),
        water.cups,
        water.goal,
        water.percent_complete(),
        bar(water.percent_complete())
    );
    if water.is_transient() {
        output.push_str("\nNo water logged yet today");
    } else if water.goal_reached() {
        output.push_str("\nDaily goal reached!");
    }
    output
}

/// Today's meals with their calorie total
pub fn format_meal_list(meals: &[&Meal], total_calories: f64) -> String {
    if meals.is_empty() {
        return "No meals logged today".to_string();
    }

    let mut output = String::new();
    for meal in meals {
        output.push_str(&format!(
            "{}  {}  {:<9}  {:>6} kcal  {}\n",
            meal.id, meal.time, meal.meal_type, meal.calories, meal.name
        ));
    }
    output.push_str(&format!("Total: {} kcal", total_calories));
    output
}

/// Sleep entries oldest first, with the latest called out
pub fn format_sleep_table(entries: &[SleepEntry]) -> String {
    let Some(latest) = entries.last() else {
        return "No sleep entries found".to_string();
    };

    let mut output = format!(
        "Last night: {} hours ({} - {})\n\n",
        latest.hours_slept, latest.bed_time, latest.wake_time
    );
    for entry in entries {
        let quality = entry
            .quality
            .map(|q| format!("{}/5", q))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{}  {}  {:>4}h  {} - {}  {}",
            entry.id,
            format_date(entry.date),
            entry.hours_slept,
            entry.bed_time,
            entry.wake_time,
            quality
        ));
        if let Some(notes) = &entry.notes {
            output.push_str(&format!("  {}", notes));
        }
        output.push('\n');
    }
    output
}

/// Weight entries newest first
pub fn format_weight_table(entries: &[WeightEntry]) -> String {
    if entries.is_empty() {
        return "No weight entries found".to_string();
    }

    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let mut output = String::new();
    for entry in &sorted {
        output.push_str(&format!(
            "{}  {}  {:>6.1} kg",
            entry.id,
            format_date(entry.date),
            entry.weight
        ));
        if let Some(note) = &entry.note {
            output.push_str(&format!("  {}", note));
        }
        output.push('\n');
    }
    output
}

pub fn format_mood_entry(entry: &MoodEntry) -> String {
    let mut output = format!(
        "{} {} {} - {} ({}/10)",
        format_date(entry.date),
        entry.mood.emoji(),
        entry.mood.label(),
        mood_level_label(entry.mood_level),
        entry.mood_level
    );
    if !entry.tags.is_empty() {
        let tags: Vec<&str> = entry.tags.iter().map(String::as_str).collect();
        output.push_str(&format!("\n  Activities: {}", tags.join(", ")));
    }
    if !entry.note.is_empty() {
        output.push_str(&format!("\n  Note: {}", entry.note));
    }
    output
}

pub fn format_mood_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No mood entries found".to_string();
    }
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    sorted
        .into_iter()
        .map(format_mood_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per day; days without an entry stay in place, blank
pub fn format_mood_chart(points: &[MoodPoint]) -> String {
    let mut output = String::new();
    for point in points {
        let day = point.date.format("%a %m-%d");
        match (point.mood, point.value) {
            (Some(mood), Some(value)) => output.push_str(&format!(
                "{}  {:<10} {} {}\n",
                day,
                "*".repeat(value as usize),
                mood.emoji(),
                mood.label()
            )),
            _ => output.push_str(&format!("{}  {:<10} -\n", day, "")),
        }
    }
    output
}

pub fn format_workout(routine: &WorkoutRoutine) -> String {
    let mut output = format!(
        "{} ({})  {}/{} done {}\n",
        routine.name,
        routine.id,
        routine.completed_count(),
        routine.exercises.len(),
        bar(routine.progress_percent())
    );
    let mut exercises: Vec<_> = routine.exercises.iter().collect();
    exercises.sort_by_key(|e| e.order);
    for exercise in exercises {
        let mark = if exercise.completed { "x" } else { " " };
        let sets = match (exercise.sets, exercise.reps) {
            (Some(sets), Some(reps)) => format!("  {}x{}", sets, reps),
            _ => String::new(),
        };
        output.push_str(&format!(
            "  [{}] {}  {:<16} {}{}\n",
            mark,
            exercise.id,
            exercise.name,
            format_clock(exercise.duration),
            sets
        ));
    }
    if routine.completed {
        output.push_str("Workout complete!\n");
    }
    output
}

pub fn format_stretch_routine(routine: &StretchRoutine) -> String {
    let mut output = format!(
        "{} ({})  total {}\n",
        routine.name,
        routine.id,
        format_clock(routine.total_duration())
    );
    for exercise in routine.sorted_exercises() {
        output.push_str(&format!(
            "  {}. {}  {:<22} {}\n",
            exercise.order + 1,
            exercise.id,
            exercise.name,
            format_clock(exercise.duration)
        ));
        if let Some(description) = &exercise.description {
            output.push_str(&format!("       {}\n", description));
        }
    }
    output
}
