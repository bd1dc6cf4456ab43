use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::{MemberPayload, NewMember, NewWorkoutSession, WorkoutSessionPayload};

pub const MIN_MEMBER_AGE: i64 = 13;

/// Field name mapped to the list of violation messages for that field.
///
/// BTreeMap keeps the serialized order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

// JSON null counts as "not provided" for every field
fn provided(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn optional_string(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Value>,
) -> Option<String> {
    match provided(value) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(field, format!("{field} must be a string"));
            None
        }
        None => None,
    }
}

fn optional_integer(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&Value>,
) -> Option<i64> {
    match provided(value) {
        Some(Value::Number(n)) if n.as_i64().is_some() => n.as_i64(),
        Some(_) => {
            errors.add(field, format!("{field} must be an integer"));
            None
        }
        None => None,
    }
}

/// Validate a raw member payload into a record ready to persist.
pub fn validate_member(payload: &MemberPayload) -> Result<NewMember, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = match provided(payload.name.as_ref()) {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        Some(Value::String(_)) => {
            errors.add("name", "name must not be empty");
            String::new()
        }
        Some(_) => {
            errors.add("name", "name must be a string");
            String::new()
        }
        None => {
            errors.add("name", "name is required");
            String::new()
        }
    };

    let age = match provided(payload.age.as_ref()) {
        Some(Value::Number(n)) if n.as_i64().is_some() => {
            let age = n.as_i64().unwrap();
            if age < MIN_MEMBER_AGE {
                errors.add("age", format!("age must be at least {MIN_MEMBER_AGE}"));
            }
            age
        }
        Some(_) => {
            errors.add("age", "age must be an integer");
            0
        }
        None => {
            errors.add("age", "age is required");
            0
        }
    };

    let email = optional_string(&mut errors, "email", payload.email.as_ref());
    let phone = optional_string(&mut errors, "phone", payload.phone.as_ref());

    errors.into_result(NewMember {
        name,
        age,
        email,
        phone,
    })
}

/// Validate a raw workout session payload into a record ready to persist.
pub fn validate_workout_session(
    payload: &WorkoutSessionPayload,
) -> Result<NewWorkoutSession, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let session_date = match provided(payload.session_date.as_ref()) {
        Some(raw) => match raw.as_str().and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        {
            Some(date) => date,
            None => {
                errors.add(
                    "session_date",
                    "session_date is not a valid date (expected YYYY-MM-DD)",
                );
                NaiveDate::default()
            }
        },
        None => {
            errors.add("session_date", "session_date is required");
            NaiveDate::default()
        }
    };

    let member_id = optional_integer(&mut errors, "member_id", payload.member_id.as_ref());
    let session_time = optional_string(&mut errors, "session_time", payload.session_time.as_ref());
    let activity = optional_string(&mut errors, "activity", payload.activity.as_ref());
    let duration_minutes = optional_integer(
        &mut errors,
        "duration_minutes",
        payload.duration_minutes.as_ref(),
    );
    let calories_burned = optional_integer(
        &mut errors,
        "calories_burned",
        payload.calories_burned.as_ref(),
    );

    errors.into_result(NewWorkoutSession {
        member_id,
        session_date,
        session_time,
        activity,
        duration_minutes,
        calories_burned,
    })
}
