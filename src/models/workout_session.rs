use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A scheduled or logged activity, optionally linked to a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct WorkoutSession {
    pub session_id: i64,
    pub member_id: Option<i64>,
    pub session_date: NaiveDate,
    pub session_time: Option<String>,
    pub activity: Option<String>,
    pub duration_minutes: Option<i64>,
    pub calories_burned: Option<i64>,
}

/// Raw workout session fields as submitted by the client.
///
/// Fields stay untyped `Value`s so wrong types and bad dates become
/// per-field validation messages instead of body-level parse errors.
/// Empty strings are accepted for the optional text fields: a member
/// may not have decided on a time or activity yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutSessionPayload {
    pub member_id: Option<Value>,
    pub session_date: Option<Value>,
    pub session_time: Option<Value>,
    pub activity: Option<Value>,
    pub duration_minutes: Option<Value>,
    pub calories_burned: Option<Value>,
}

/// A session payload that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkoutSession {
    pub member_id: Option<i64>,
    pub session_date: NaiveDate,
    pub session_time: Option<String>,
    pub activity: Option<String>,
    pub duration_minutes: Option<i64>,
    pub calories_burned: Option<i64>,
}
