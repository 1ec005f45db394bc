//! Repository layer for the names table

use async_trait::async_trait;
use sqlx::PgPool;

use super::error::StorageError;

// Single source for the table name; `concat!` only takes literals.
macro_rules! names_table {
    () => {
        "names_tb"
    };
}

/// Table holding the registered names
pub const NAMES_TABLE: &str = names_table!();

pub(crate) const CREATE_NAMES_TABLE_SQL: &str = concat!(
    "CREATE TABLE IF NOT EXISTS ",
    names_table!(),
    " (id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL)"
);
const INSERT_NAME_SQL: &str = concat!("INSERT INTO ", names_table!(), " (name) VALUES ($1)");
const SELECT_NAMES_SQL: &str = concat!("SELECT name FROM ", names_table!(), " ORDER BY id ASC");

/// Storage behind [`NameRegistry`](super::NameRegistry).
///
/// Each method issues exactly one statement. Implementations must not cache.
#[async_trait]
pub trait NameStore: Send + Sync {
    /// Append one name. The store assigns the id.
    async fn insert(&self, name: &str) -> Result<(), StorageError>;

    /// All names, ascending by id.
    async fn fetch_all(&self) -> Result<Vec<String>, StorageError>;
}

/// PostgreSQL-backed name store
pub struct PgNameStore {
    pool: PgPool,
}

impl PgNameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NameStore for PgNameStore {
    async fn insert(&self, name: &str) -> Result<(), StorageError> {
        sqlx::query(INSERT_NAME_SQL)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<String>, StorageError> {
        let names = sqlx::query_scalar::<_, String>(SELECT_NAMES_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }
}
