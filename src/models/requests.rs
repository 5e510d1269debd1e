//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use crate::models::{NewStudent, StudentPatch};
use crate::validation::{self, ValidationErrors};

/// Request body shared by POST, PUT and PATCH on `/students`.
///
/// Every field is optional at the wire level; which ones are required depends
/// on the operation and is decided by validation, not by deserialization.
/// Numbers may arrive as JSON numbers or as form text; blank text counts as
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub age: Option<i64>,
    pub major: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub merit: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub other: Option<f64>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<T> {
        Number(T),
        Text(String),
    }

    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(value)) => Ok(Some(value)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}"))),
    }
}

impl StudentPayload {
    /// Validates the payload for create or full update.
    pub fn into_new_student(self) -> Result<NewStudent, ValidationErrors> {
        validation::validate_new(self)
    }

    /// Validates only the supplied fields for a partial update.
    pub fn into_patch(self) -> Result<StudentPatch, ValidationErrors> {
        validation::validate_patch(self)
    }
}
