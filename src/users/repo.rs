use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
}

/// Storage seam for the users table. Handlers only see this trait, so tests
/// substitute an in-memory implementation.
#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn list(&self) -> anyhow::Result<Vec<User>>;
    async fn create(&self, name: &str, surname: &str) -> anyhow::Result<User>;
    /// Returns the number of rows removed; deleting an absent id is not an
    /// error, it is a zero-row delete.
    async fn delete(&self, id: i32) -> anyhow::Result<u64>;
}

pub struct PgUserRepo {
    pool: PgPool,
}

impl PgUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepo for PgUserRepo {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        // Ordered by id so consumers get a stable listing.
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, surname
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(users)
    }

    async fn create(&self, name: &str, surname: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, surname)
            VALUES ($1, $2)
            RETURNING id, name, surname
            "#,
        )
        .bind(name)
        .bind(surname)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
