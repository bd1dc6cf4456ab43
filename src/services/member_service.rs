use sqlx::SqlitePool;

use crate::models::{Member, NewMember};

#[derive(Debug, Clone)]
pub struct MemberService {
    db: SqlitePool,
}

impl MemberService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn list_members(&self) -> Result<Vec<Member>, sqlx::Error> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, age, email, phone FROM members ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(members)
    }

    pub async fn get_member_by_id(&self, id: i64) -> Result<Option<Member>, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>(
            "SELECT id, name, age, email, phone FROM members WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn create_member(&self, member_data: NewMember) -> Result<Member, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, age, email, phone)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, age, email, phone
            "#,
        )
        .bind(member_data.name)
        .bind(member_data.age)
        .bind(member_data.email)
        .bind(member_data.phone)
        .fetch_one(&self.db)
        .await?;

        Ok(member)
    }

    /// Full replacement of all mutable fields.
    pub async fn update_member(
        &self,
        id: i64,
        member_data: NewMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET name = ?, age = ?, email = ?, phone = ?
            WHERE id = ?
            RETURNING id, name, age, email, phone
            "#,
        )
        .bind(member_data.name)
        .bind(member_data.age)
        .bind(member_data.email)
        .bind(member_data.phone)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(member)
    }

    pub async fn delete_member(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
