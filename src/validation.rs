//! Student field validation
//!
//! Runs before any store call and turns a raw [`StudentPayload`] into either
//! validated values or the full list of field errors found.

use thiserror::Error;

use crate::models::{NewStudent, Scholarship, StudentPatch, StudentPayload};

// == Public Constants ==
/// Maximum allowed name length in characters
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum accepted age
pub const MAX_AGE: i32 = 200;

/// Maximum merit scholarship amount
pub const MAX_MERIT: f64 = 5000.0;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Student validation failed: {}", render(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if `field` was rejected.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates a payload for create or full update.
///
/// `name`, `age` and `major` are required; missing scholarship amounts
/// default to zero.
pub fn validate_new(payload: StudentPayload) -> Result<NewStudent, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required(&mut errors, "name", payload.name, check_name);
    let age = required(&mut errors, "age", payload.age, check_age);
    let major = required(&mut errors, "major", payload.major, check_major);
    let merit = optional(&mut errors, "merit", payload.merit, check_merit);
    let other = optional(&mut errors, "other", payload.other, check_other);

    match (name, age, major) {
        (Some(name), Some(age), Some(major)) if errors.is_empty() => Ok(NewStudent {
            name,
            age,
            major,
            scholarship: Scholarship {
                merit: merit.unwrap_or_default(),
                other: other.unwrap_or_default(),
            },
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validates only the fields present in a partial update.
pub fn validate_patch(payload: StudentPayload) -> Result<StudentPatch, ValidationErrors> {
    let mut errors = Vec::new();

    let patch = StudentPatch {
        name: optional(&mut errors, "name", payload.name, check_name),
        age: optional(&mut errors, "age", payload.age, check_age),
        major: optional(&mut errors, "major", payload.major, check_major),
        merit: optional(&mut errors, "merit", payload.merit, check_merit),
        other: optional(&mut errors, "other", payload.other, check_other),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors(errors))
    }
}

fn required<T, U>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<T>,
    check: fn(T) -> Result<U, String>,
) -> Option<U> {
    match value {
        Some(value) => optional(errors, field, Some(value), check),
        None => {
            errors.push(FieldError {
                field,
                message: "is required".to_string(),
            });
            None
        }
    }
}

fn optional<T, U>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<T>,
    check: fn(T) -> Result<U, String>,
) -> Option<U> {
    match check(value?) {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(FieldError { field, message });
            None
        }
    }
}

fn check_name(name: String) -> Result<String, String> {
    if name.trim().is_empty() {
        return Err("must not be blank".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!("must be at most {} characters", MAX_NAME_LENGTH));
    }
    Ok(name)
}

fn check_age(age: i64) -> Result<i32, String> {
    i32::try_from(age)
        .ok()
        .filter(|age| (0..=MAX_AGE).contains(age))
        .ok_or_else(|| format!("must be between 0 and {}", MAX_AGE))
}

fn check_major(major: String) -> Result<String, String> {
    if major.trim().is_empty() {
        return Err("must not be blank".to_string());
    }
    Ok(major)
}

fn check_merit(merit: f64) -> Result<f64, String> {
    if merit.is_finite() && (0.0..=MAX_MERIT).contains(&merit) {
        Ok(merit)
    } else {
        Err(format!("must be between 0 and {}", MAX_MERIT))
    }
}

fn check_other(other: f64) -> Result<f64, String> {
    if other.is_finite() && other >= 0.0 {
        Ok(other)
    } else {
        Err("must not be negative".to_string())
    }
}
