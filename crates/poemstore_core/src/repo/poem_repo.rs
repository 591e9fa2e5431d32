//! Poem repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `poems` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_poems` returns rows in store insertion order (`seq ASC`).
//! - Repositories are only constructed over migrated, schema-complete
//!   connections.

use crate::db::{migrations, DbError};
use crate::model::poem::{Poem, PoemId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const POEM_SELECT_SQL: &str = "SELECT
    uuid,
    text
FROM poems";

const REQUIRED_COLUMNS: &[&str] = &["uuid", "text"];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for poem persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(PoemId),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "poem not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted poem data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for poem CRUD operations.
pub trait PoemRepository {
    /// Persists one new poem and returns its stable id.
    fn insert_poem(&self, poem: &Poem) -> RepoResult<PoemId>;
    /// Replaces the text of an existing poem.
    fn update_poem(&self, poem: &Poem) -> RepoResult<()>;
    /// Gets one poem by id.
    fn get_poem(&self, id: PoemId) -> RepoResult<Option<Poem>>;
    /// Lists all poems in store insertion order.
    fn list_poems(&self) -> RepoResult<Vec<Poem>>;
    /// Hard-deletes one poem by id.
    fn delete_poem(&self, id: PoemId) -> RepoResult<()>;
}

/// SQLite-backed poem repository.
pub struct SqlitePoemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePoemRepository<'conn> {
    /// Constructs a repository from a migrated, schema-complete connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not match this binary's expectations.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl PoemRepository for SqlitePoemRepository<'_> {
    fn insert_poem(&self, poem: &Poem) -> RepoResult<PoemId> {
        self.conn.execute(
            "INSERT INTO poems (uuid, text) VALUES (?1, ?2);",
            params![poem.uuid.to_string(), poem.text.as_str()],
        )?;

        Ok(poem.uuid)
    }

    fn update_poem(&self, poem: &Poem) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE poems
             SET
                text = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?2;",
            params![poem.text.as_str(), poem.uuid.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(poem.uuid));
        }

        Ok(())
    }

    fn get_poem(&self, id: PoemId) -> RepoResult<Option<Poem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POEM_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_poem_row(row)?));
        }

        Ok(None)
    }

    fn list_poems(&self) -> RepoResult<Vec<Poem>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{POEM_SELECT_SQL} ORDER BY seq ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut poems = Vec::new();

        while let Some(row) = rows.next()? {
            poems.push(parse_poem_row(row)?);
        }

        Ok(poems)
    }

    fn delete_poem(&self, id: PoemId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM poems WHERE uuid = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_poem_row(row: &Row<'_>) -> RepoResult<Poem> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in poems.uuid"))
    })?;

    Ok(Poem {
        uuid,
        text: row.get("text")?,
    })
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 =
        conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "poems")? {
        return Err(RepoError::MissingRequiredTable("poems"));
    }

    for &column in REQUIRED_COLUMNS {
        if !column_exists(conn, "poems", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "poems",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM pragma_table_info('{table}') WHERE name = ?1;"),
        [column],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
