//! Input checks run before any store operation

use crate::domain::wellness::{Exercise, StretchExercise};
use crate::domain::{parse_date, TimeOfDay};
use crate::error::{Result, ValidationError};
use chrono::NaiveDate;

/// Reject a blank value
pub fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field).into());
    }
    Ok(trimmed)
}

/// Parse a finite decimal number
pub fn number(field: &'static str, value: &str) -> Result<f64> {
    let value = required(field, value)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        }
        .into()),
    }
}

/// Parse a whole number within `min..=max`
pub fn whole_in_range(field: &'static str, value: &str, min: u32, max: u32) -> Result<u32> {
    let n = number(field, value)?;
    if n.fract() != 0.0 {
        return Err(ValidationError::NotNumeric {
            field,
            value: value.trim().to_string(),
        }
        .into());
    }
    in_range(field, n, min as f64, max as f64)?;
    Ok(n as u32)
}

pub fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        }
        .into());
    }
    Ok(value)
}

pub fn time(value: &str) -> Result<TimeOfDay> {
    Ok(value.trim().parse::<TimeOfDay>()?)
}

pub fn date(value: &str) -> Result<NaiveDate> {
    parse_date(value.trim())
}

fn bad_exercise(input: &str, expected: &str) -> ValidationError {
    ValidationError::InvalidChoice(format!(
        "Invalid exercise '{}'. Expected {}",
        input, expected
    ))
}

/// Parse `NAME:SECONDS` or `NAME:SECONDS:SETS:REPS`
pub fn workout_exercise(input: &str, order: usize) -> Result<Exercise> {
    const EXPECTED: &str = "NAME:SECONDS or NAME:SECONDS:SETS:REPS";
    let parts: Vec<&str> = input.split(':').collect();
    let (name, seconds, sets) = match parts.as_slice() {
        [name, seconds] => (*name, *seconds, None),
        [name, seconds, sets, reps] => (*name, *seconds, Some((*sets, *reps))),
        _ => return Err(bad_exercise(input, EXPECTED).into()),
    };

    let name = required("exercise name", name)?;
    let duration = whole_in_range("duration", seconds, 1, 3600)?;
    let exercise = Exercise::new(name, duration, order);
    match sets {
        Some((sets, reps)) => Ok(exercise.with_sets(
            whole_in_range("sets", sets, 1, 100)?,
            whole_in_range("reps", reps, 1, 1000)?,
        )),
        None => Ok(exercise),
    }
}

/// Parse `NAME:SECONDS`
pub fn stretch_exercise(input: &str, order: usize) -> Result<StretchExercise> {
    let Some((name, seconds)) = input.rsplit_once(':') else {
        return Err(bad_exercise(input, "NAME:SECONDS").into());
    };
    let name = required("exercise name", name)?;
    let duration = whole_in_range("duration", seconds, 1, 3600)?;
    Ok(StretchExercise::new(name, duration, order))
}
