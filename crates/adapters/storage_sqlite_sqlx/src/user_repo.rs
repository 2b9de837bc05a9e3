//! `SQLite` implementation of [`UserRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use usercrud_app::ports::UserRepository;
use usercrud_domain::error::CrudError;
use usercrud_domain::id::UserId;
use usercrud_domain::time::Timestamp;
use usercrud_domain::user::{User, UserParams};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`User`].
struct Wrapper(User);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<User> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let age: i32 = row.try_get("age")?;
        let address: String = row.try_get("address")?;
        let created_at: String = row.try_get("createdat")?;
        let updated_at: Option<String> = row.try_get("updatedat")?;

        let id = UserId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = decode_timestamp(&created_at)?;
        let updated_at = updated_at.as_deref().map(decode_timestamp).transpose()?;

        Ok(Self(User {
            id,
            name,
            age,
            address,
            created_at,
            updated_at,
        }))
    }
}

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

const INSERT: &str = "INSERT INTO users (id, name, age, address, createdat, updatedat) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM users WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM users";
const UPDATE: &str = "UPDATE users SET name = ?, age = ?, address = ?, updatedat = ? WHERE id = ? RETURNING *";
const DELETE_BY_ID: &str = "DELETE FROM users WHERE id = ?";

/// `SQLite`-backed user repository.
///
/// Cheap to construct; holds a handle to the shared pool.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl UserRepository for SqliteUserRepository {
    fn create(&self, user: User) -> impl Future<Output = Result<User, CrudError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(user.id.to_string())
                .bind(&user.name)
                .bind(user.age)
                .bind(&user.address)
                .bind(encode_timestamp(user.created_at))
                .bind(user.updated_at.map(encode_timestamp))
                .execute(&pool)
                .await
                .map_err(|err| {
                    StorageError::from(err).into_insert_error("User", user.id.to_string())
                })?;

            Ok(user)
        }
    }

    fn get_by_id(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, CrudError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, CrudError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        id: UserId,
        params: UserParams,
        updated_at: Timestamp,
    ) -> impl Future<Output = Result<Option<User>, CrudError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(params.name)
                .bind(params.age)
                .bind(params.address)
                .bind(encode_timestamp(updated_at))
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: UserId) -> impl Future<Output = Result<(), CrudError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                tracing::debug!(%id, "delete matched no rows");
            }
            Ok(())
        }
    }
}
