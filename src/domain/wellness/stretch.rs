//! Stretch routines

use super::WellnessState;
use crate::domain::id::generate_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StretchExercise {
    pub id: String,
    pub name: String,
    /// Seconds
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: usize,
}

impl StretchExercise {
    pub fn new(name: impl Into<String>, duration: u32, order: usize) -> Self {
        StretchExercise {
            id: generate_id(),
            name: name.into(),
            duration,
            image_url: None,
            description: None,
            order,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StretchRoutine {
    pub id: String,
    pub name: String,
    pub exercises: Vec<StretchExercise>,
}

impl StretchRoutine {
    pub fn new(name: impl Into<String>, exercises: Vec<StretchExercise>) -> Self {
        StretchRoutine {
            id: generate_id(),
            name: name.into(),
            exercises,
        }
    }

    /// The starter routine seeded into a fresh store
    pub fn morning_stretch() -> Self {
        StretchRoutine::new(
            "Morning Stretch",
            vec![
                StretchExercise::new("Neck Stretch", 20, 0)
                    .with_description("Gently tilt your head to each side"),
                StretchExercise::new("Shoulder Rolls", 15, 1)
                    .with_description("Roll your shoulders forward and backward"),
                StretchExercise::new("Standing Side Stretch", 30, 2)
                    .with_description("Raise your arms and lean to each side"),
                StretchExercise::new("Hamstring Stretch", 25, 3)
                    .with_description("Bend forward at your hips"),
            ],
        )
    }

    /// Exercises in their persisted display order
    pub fn sorted_exercises(&self) -> Vec<StretchExercise> {
        let mut exercises = self.exercises.clone();
        exercises.sort_by_key(|e| e.order);
        exercises
    }

    pub fn total_duration(&self) -> u32 {
        self.exercises.iter().map(|e| e.duration).sum()
    }
}

/// Move `dragged_id` to the position of `target_id` and renumber every
/// exercise `0..n`. Returns `None` when either id is missing.
///
/// This is the caller-side half of a reorder; the store only accepts the
/// finished list through [`WellnessState::update_stretch_exercise_order`].
pub fn reorder_exercises(
    exercises: &[StretchExercise],
    dragged_id: &str,
    target_id: &str,
) -> Option<Vec<StretchExercise>> {
    let mut reordered = exercises.to_vec();
    let from = reordered.iter().position(|e| e.id == dragged_id)?;
    let to = reordered.iter().position(|e| e.id == target_id)?;

    let dragged = reordered.remove(from);
    reordered.insert(to, dragged);

    for (index, exercise) in reordered.iter_mut().enumerate() {
        exercise.order = index;
    }
    Some(reordered)
}

impl WellnessState {
    pub fn add_stretch_routine(&mut self, mut routine: StretchRoutine) -> String {
        let id = generate_id();
        routine.id = id.clone();
        self.stretch_routines.push(routine);
        id
    }

    /// Replace a routine's exercise list wholesale. The list is stored as
    /// given; it is expected to be reordered and renumbered already.
    pub fn update_stretch_exercise_order(
        &mut self,
        routine_id: &str,
        exercises: Vec<StretchExercise>,
    ) -> bool {
        match self.stretch_routines.iter_mut().find(|r| r.id == routine_id) {
            Some(routine) => {
                routine.exercises = exercises;
                true
            }
            None => false,
        }
    }

    pub fn set_active_stretch_routine(&mut self, id: Option<String>) {
        self.active_stretch_routine_id = id;
    }

    /// The explicit selection if set, otherwise the first routine
    pub fn current_stretch_routine(&self) -> Option<&StretchRoutine> {
        match &self.active_stretch_routine_id {
            Some(id) => self.stretch_routines.iter().find(|r| &r.id == id),
            None => self.stretch_routines.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_then_store_gives_dense_order() {
        let mut state = WellnessState::empty();
        let routine = StretchRoutine::morning_stretch();
        let names: Vec<String> = routine.exercises.iter().map(|e| e.name.clone()).collect();
        let last = routine.exercises[3].id.clone();
        let first = routine.exercises[0].id.clone();
        let id = state.add_stretch_routine(routine);

        let current = state.current_stretch_routine().unwrap().sorted_exercises();
        let reordered = reorder_exercises(&current, &last, &first).unwrap();
        assert!(state.update_stretch_exercise_order(&id, reordered));

        let stored = &state.stretch_routines[0].exercises;
        let orders: Vec<usize> = stored.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);

        let stored_names: Vec<&str> = stored.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            stored_names,
            vec![
                names[3].as_str(),
                names[0].as_str(),
                names[1].as_str(),
                names[2].as_str()
            ]
        );
    }

    #[test]
    fn test_reorder_forward() {
        let exercises = vec![
            StretchExercise::new("a", 10, 0),
            StretchExercise::new("b", 10, 1),
            StretchExercise::new("c", 10, 2),
        ];
        let reordered = reorder_exercises(&exercises, &exercises[0].id, &exercises[2].id).unwrap();
        let names: Vec<&str> = reordered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert!(reordered.iter().enumerate().all(|(i, e)| e.order == i));
    }

    #[test]
    fn test_reorder_unknown_id() {
        let exercises = vec![StretchExercise::new("a", 10, 0)];
        assert!(reorder_exercises(&exercises, "missing", &exercises[0].id).is_none());
    }

    #[test]
    fn test_update_order_unknown_routine() {
        let mut state = WellnessState::empty();
        assert!(!state.update_stretch_exercise_order("nope", Vec::new()));
    }

    #[test]
    fn test_current_stretch_routine_defaults_to_first() {
        let mut state = WellnessState::empty();
        assert!(state.current_stretch_routine().is_none());

        let first = state.add_stretch_routine(StretchRoutine::morning_stretch());
        let second = state.add_stretch_routine(StretchRoutine::new("Evening", Vec::new()));
        assert_eq!(state.current_stretch_routine().unwrap().id, first);

        state.set_active_stretch_routine(Some(second.clone()));
        assert_eq!(state.current_stretch_routine().unwrap().id, second);
    }

    #[test]
    fn test_sorted_exercises_and_total() {
        let routine = StretchRoutine::new(
            "Mixed",
            vec![
                StretchExercise::new("second", 15, 1),
                StretchExercise::new("first", 20, 0),
            ],
        );
        let sorted = routine.sorted_exercises();
        assert_eq!(sorted[0].name, "first");
        assert_eq!(routine.total_duration(), 35);
    }
}
