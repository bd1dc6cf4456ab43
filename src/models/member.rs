use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A gym client as stored in the `members` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Raw member fields as submitted by the client.
///
/// The struct doubles as the field allow-list: unknown JSON keys are
/// dropped during deserialization and never reach the database. Fields
/// stay untyped `Value`s here so a wrong-typed field turns into a
/// per-field validation message instead of a body-level parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPayload {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub email: Option<Value>,
    pub phone: Option<Value>,
}

/// A member payload that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
    pub phone: Option<String>,
}
