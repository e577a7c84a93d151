//! Domain layer - Wellness records, derived metrics and guided sessions

pub mod coach;
pub mod date;
pub mod id;
pub mod mood;
pub mod record;
pub mod session;
pub mod wellness;

pub use date::{format_date, parse_date, TimeOfDay};
pub use mood::{MoodEntry, MoodPoint, MoodRange, MoodState, MoodType};
pub use record::{DatePolicy, DatedRecord, DaySlot};
pub use wellness::WellnessState;
