//! Student record types
//!
//! `Student` is the shape every endpoint returns. The store layer owns identity
//! assignment; callers only ever see the hex-encoded identifier.

use serde::{Deserialize, Serialize, Serializer};

/// Nested scholarship amounts of a student.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scholarship {
    /// Merit-based amount
    #[serde(serialize_with = "serialize_amount")]
    pub merit: f64,
    /// Any other amount
    #[serde(serialize_with = "serialize_amount")]
    pub other: f64,
}

/// A persisted student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identifier (24-character hex)
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub age: i32,
    pub major: String,
    pub scholarship: Scholarship,
}

/// Validated values for a new record or a full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub name: String,
    pub age: i32,
    pub major: String,
    pub scholarship: Scholarship,
}

impl NewStudent {
    /// Attaches a store-assigned identifier.
    pub fn into_student(self, id: impl Into<String>) -> Student {
        Student {
            id: id.into(),
            name: self.name,
            age: self.age,
            major: self.major,
            scholarship: self.scholarship,
        }
    }
}

/// Validated subset of fields for a partial update.
///
/// Scholarship amounts are addressed independently so that setting `merit`
/// leaves `other` untouched and vice versa.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub merit: Option<f64>,
    pub other: Option<f64>,
}

impl StudentPatch {
    /// Returns true if the patch sets no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.major.is_none()
            && self.merit.is_none()
            && self.other.is_none()
    }

    /// Writes the supplied fields onto `student`.
    pub fn apply_to(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name = name.clone();
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(major) = &self.major {
            student.major = major.clone();
        }
        if let Some(merit) = self.merit {
            student.scholarship.merit = merit;
        }
        if let Some(other) = self.other {
            student.scholarship.other = other;
        }
    }
}

/// Outcome of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn deleted(count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count: count,
        }
    }
}

// Whole amounts are written as integers so `100` round-trips as `100`, not `100.0`.
fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const I64_BOUND: f64 = 9_007_199_254_740_992.0; // 2^53

    if value.fract() == 0.0 && value.abs() < I64_BOUND {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
