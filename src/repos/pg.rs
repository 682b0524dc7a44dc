/*
 * Responsibility
 * - Postgres-backed TodoStore via SQLx
 * - expected schema:
 *     todos(
 *         id        uuid primary key default gen_random_uuid(),
 *         title     text not null,
 *         completed boolean not null default false
 *     )
 */
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::{StoreError, StoreResult};
use crate::repos::todo_store::{Todo, TodoStore};

#[derive(Debug, FromRow)]
struct TodoRow {
    id: Uuid,
    title: String,
    completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: row.id.to_string(),
            title: row.title,
            completed: row.completed,
        }
    }
}

#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Ids are uuids on this backend; anything that does not parse is malformed.
fn parse_id(id: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId)
}

fn backend_err(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn insert(&self, title: &str, completed: bool) -> StoreResult<Todo> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            INSERT INTO todos (title, completed)
            VALUES ($1, $2)
            RETURNING id, title, completed
            "#,
        )
        .bind(title)
        .bind(completed)
        .fetch_one(&self.pool)
        .await
        .map_err(backend_err)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed
            FROM todos
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend_err)?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Todo>> {
        let id = parse_id(id)?;

        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, title, completed
            FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_err)?;

        Ok(row.map(Todo::from))
    }

    async fn update_by_id(
        &self,
        id: &str,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> StoreResult<Option<Todo>> {
        let id = parse_id(id)?;

        // COALESCE keeps the stored value for fields absent from the patch.
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET
                title = COALESCE($2, title),
                completed = COALESCE($3, completed)
            WHERE id = $1
            RETURNING id, title, completed
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend_err)?;

        Ok(row.map(Todo::from))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<bool> {
        let id = parse_id(id)?;

        let result = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(backend_err)?;

        Ok(result.rows_affected() > 0)
    }
}
