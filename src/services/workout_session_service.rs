use sqlx::SqlitePool;

use crate::models::{NewWorkoutSession, WorkoutSession};

const SESSION_COLUMNS: &str = "session_id, member_id, session_date, session_time, activity, duration_minutes, calories_burned";

#[derive(Debug, Clone)]
pub struct WorkoutSessionService {
    db: SqlitePool,
}

impl WorkoutSessionService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_sessions(&self) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions ORDER BY session_id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    pub async fn get_session_by_id(
        &self,
        session_id: i64,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions WHERE session_id = ?"
        ))
        .bind(session_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    pub async fn get_sessions_by_member_id(
        &self,
        member_id: i64,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let sessions = sqlx::query_as::<_, WorkoutSession>(&format!(
            "SELECT {SESSION_COLUMNS} FROM workout_sessions WHERE member_id = ? ORDER BY session_id"
        ))
        .bind(member_id)
        .fetch_all(&self.db)
        .await?;

        Ok(sessions)
    }

    pub async fn create_session(
        &self,
        session_data: NewWorkoutSession,
    ) -> Result<WorkoutSession, sqlx::Error> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            r#"
            INSERT INTO workout_sessions (member_id, session_date, session_time, activity, duration_minutes, calories_burned)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session_data.member_id)
        .bind(session_data.session_date)
        .bind(session_data.session_time)
        .bind(session_data.activity)
        .bind(session_data.duration_minutes)
        .bind(session_data.calories_burned)
        .fetch_one(&self.db)
        .await?;

        Ok(session)
    }

    /// Full replacement of all mutable fields. `member_id` is part of the
    /// replacement, matching the create payload.
    pub async fn update_session(
        &self,
        session_id: i64,
        session_data: NewWorkoutSession,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let session = sqlx::query_as::<_, WorkoutSession>(&format!(
            r#"
            UPDATE workout_sessions
            SET member_id = ?, session_date = ?, session_time = ?, activity = ?, duration_minutes = ?, calories_burned = ?
            WHERE session_id = ?
            RETURNING {SESSION_COLUMNS}
            "#
        ))
        .bind(session_data.member_id)
        .bind(session_data.session_date)
        .bind(session_data.session_time)
        .bind(session_data.activity)
        .bind(session_data.duration_minutes)
        .bind(session_data.calories_burned)
        .bind(session_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(session)
    }

    pub async fn delete_session(&self, session_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workout_sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
