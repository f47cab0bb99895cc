//! Student record model, payload coercion and validation
//!
//! Creation payloads arrive loosely typed (numeric fields may be JSON
//! numbers or numeric strings), so `age` and `year` are captured as raw
//! values and coerced here. Validation order and message texts are part of
//! the API contract.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

/// A persisted student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub age: Option<i64>,
    pub course: String,
    pub year: i64,
    pub gender: String,
}

/// Incoming creation payload, before coercion and validation
#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub year: Option<Value>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl CreateStudent {
    /// Coerce and validate the payload into a stored record.
    ///
    /// Checks run in a fixed order: required fields, age positivity, year
    /// range, gender. The first failure wins and its message is returned
    /// verbatim to the client.
    pub fn into_student(self, id: String) -> Result<Student, ApiError> {
        let name = trimmed(self.name);
        let course = trimmed(self.course);
        let gender = trimmed(self.gender);

        let year = coerce_number(self.year.as_ref()).and_then(integral);
        let year = match year {
            Some(y) if !name.is_empty() && !course.is_empty() => y,
            _ => {
                return Err(ApiError::Validation(
                    "name, course and year are required".to_string(),
                ))
            }
        };

        let age = coerce_age(self.age.as_ref())?;

        if !(1..=5).contains(&year) {
            return Err(ApiError::Validation(
                "year must be between 1 and 5".to_string(),
            ));
        }

        if gender.is_empty() {
            return Err(ApiError::Validation("gender is required".to_string()));
        }

        Ok(Student {
            id,
            name,
            age,
            course,
            year,
            gender,
        })
    }
}

/// Generate a record id: `S` + last 8 digits of unix-epoch milliseconds +
/// a zero-padded 3-digit random value. Uniqueness is probabilistic.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(8)..];
    let pad = Uuid::new_v4().as_u128() % 1000;
    format!("S{}{:03}", tail, pad)
}

fn trimmed(field: Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_string()
}

/// Coerce a raw JSON value to a number: numbers pass through, numeric
/// strings parse, everything else is rejected.
fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}

/// Coerce the optional age field. Absent, null, and blank-string inputs all
/// mean "no age"; anything else must resolve to a positive integer.
fn coerce_age(value: Option<&Value>) -> Result<Option<i64>, ApiError> {
    let value = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(v) => v,
    };

    match coerce_number(Some(value)).and_then(integral) {
        Some(age) if age > 0 => Ok(Some(age)),
        _ => Err(ApiError::Validation(
            "age must be a positive number".to_string(),
        )),
    }
}
