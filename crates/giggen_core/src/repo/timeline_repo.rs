//! Timeline repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Resolve a `TimelineSource` to its backing table and owner column.
//! - Provide filtered timeline reads plus the CRUD the editing surfaces use.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `fetch_events` applies the visibility predicate only in `Public` mode.
//! - Rows come back in deterministic base order (`created_at ASC, uuid ASC`)
//!   so the aggregation sort stays reproducible.
//! - An empty result set is `Ok(vec![])`, never an error.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::timeline_event::{
    EventId, MediaItem, SourceKind, TimelineEvent, TimelineSource, Visibility, VisibilityMode,
};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const EVENT_COLUMNS: &str = "uuid,
    title,
    event_type,
    visibility,
    event_date,
    event_date_to,
    year,
    year_to,
    location_name,
    city,
    country,
    description,
    media,
    created_at,
    updated_at";

const REQUIRED_COLUMNS: &[&str] = &[
    "uuid",
    "title",
    "event_type",
    "visibility",
    "event_date",
    "event_date_to",
    "year",
    "year_to",
    "location_name",
    "city",
    "country",
    "description",
    "media",
    "created_at",
    "updated_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for timeline persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(EventId),
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
            Self::NotFound(id) => write!(f, "timeline event not found: {id}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted timeline data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migration-ready: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table is missing: {table}")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column is missing: {table}.{column}")
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

/// Backing collection descriptor for one source kind.
#[derive(Debug, Clone, Copy)]
struct Collection {
    table: &'static str,
    owner_column: &'static str,
}

fn collection_for(kind: SourceKind) -> Collection {
    match kind {
        SourceKind::Project => Collection {
            table: "project_timeline_events",
            owner_column: "project_id",
        },
        SourceKind::Entity => Collection {
            table: "entity_timeline_events",
            owner_column: "entity_id",
        },
        SourceKind::Persona => Collection {
            table: "persona_timeline_events",
            owner_column: "persona_id",
        },
    }
}

/// Repository interface for timeline persistence.
pub trait TimelineRepository {
    /// Fetches all events for one source, filtered by visibility mode,
    /// in deterministic base order (not yet chronologically sorted).
    fn fetch_events(
        &self,
        source: &TimelineSource,
        mode: VisibilityMode,
    ) -> RepoResult<Vec<TimelineEvent>>;
    /// Creates one event under the given source and returns its stable id.
    fn create_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<EventId>;
    /// Replaces all mutable fields of an existing event.
    fn update_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<()>;
    /// Gets one event by stable id within the source's collection.
    fn get_event(&self, source: &TimelineSource, id: EventId) -> RepoResult<Option<TimelineEvent>>;
    /// Removes one event permanently.
    fn delete_event(&self, source: &TimelineSource, id: EventId) -> RepoResult<()>;
}

/// SQLite-backed timeline repository.
pub struct SqliteTimelineRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTimelineRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections whose schema version or table shape does not
    /// match what this binary expects.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TimelineRepository for SqliteTimelineRepository<'_> {
    fn fetch_events(
        &self,
        source: &TimelineSource,
        mode: VisibilityMode,
    ) -> RepoResult<Vec<TimelineEvent>> {
        let collection = collection_for(source.kind());

        let mut sql = format!(
            "SELECT {EVENT_COLUMNS} FROM {} WHERE {} = ?1",
            collection.table, collection.owner_column
        );
        if mode == VisibilityMode::Public {
            sql.push_str(" AND visibility = 'public'");
        }
        sql.push_str(" ORDER BY created_at ASC, uuid ASC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([source.owner_id().to_string()])?;
        let mut events = Vec::new();

        while let Some(row) = rows.next()? {
            events.push(parse_event_row(row, collection.table)?);
        }

        Ok(events)
    }

    fn create_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<EventId> {
        let collection = collection_for(source.kind());

        self.conn.execute(
            &format!(
                "INSERT INTO {} (
                    uuid,
                    {},
                    title,
                    event_type,
                    visibility,
                    event_date,
                    event_date_to,
                    year,
                    year_to,
                    location_name,
                    city,
                    country,
                    description,
                    media,
                    created_at,
                    updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16);",
                collection.table, collection.owner_column
            ),
            params![
                event.uuid.to_string(),
                source.owner_id().to_string(),
                event.title.as_str(),
                event.event_type.as_str(),
                visibility_to_db(event.visibility),
                event.date.as_deref(),
                event.date_to.as_deref(),
                event.year,
                event.year_to,
                event.location_name.as_deref(),
                event.city.as_deref(),
                event.country.as_deref(),
                event.description.as_deref(),
                media_to_db(&event.media)?,
                event.created_at,
                event.updated_at,
            ],
        )?;

        Ok(event.uuid)
    }

    fn update_event(&self, source: &TimelineSource, event: &TimelineEvent) -> RepoResult<()> {
        let collection = collection_for(source.kind());

        let changed = self.conn.execute(
            &format!(
                "UPDATE {}
                 SET
                    title = ?1,
                    event_type = ?2,
                    visibility = ?3,
                    event_date = ?4,
                    event_date_to = ?5,
                    year = ?6,
                    year_to = ?7,
                    location_name = ?8,
                    city = ?9,
                    country = ?10,
                    description = ?11,
                    media = ?12,
                    updated_at = (strftime('%s', 'now') * 1000)
                 WHERE uuid = ?13
                   AND {} = ?14;",
                collection.table, collection.owner_column
            ),
            params![
                event.title.as_str(),
                event.event_type.as_str(),
                visibility_to_db(event.visibility),
                event.date.as_deref(),
                event.date_to.as_deref(),
                event.year,
                event.year_to,
                event.location_name.as_deref(),
                event.city.as_deref(),
                event.country.as_deref(),
                event.description.as_deref(),
                media_to_db(&event.media)?,
                event.uuid.to_string(),
                source.owner_id().to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(event.uuid));
        }

        Ok(())
    }

    fn get_event(&self, source: &TimelineSource, id: EventId) -> RepoResult<Option<TimelineEvent>> {
        let collection = collection_for(source.kind());

        let mut stmt = self.conn.prepare(&format!(
            "SELECT {EVENT_COLUMNS} FROM {} WHERE uuid = ?1 AND {} = ?2;",
            collection.table, collection.owner_column
        ))?;

        let mut rows = stmt.query(params![id.to_string(), source.owner_id().to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_event_row(row, collection.table)?));
        }

        Ok(None)
    }

    fn delete_event(&self, source: &TimelineSource, id: EventId) -> RepoResult<()> {
        let collection = collection_for(source.kind());

        let changed = self.conn.execute(
            &format!(
                "DELETE FROM {} WHERE uuid = ?1 AND {} = ?2;",
                collection.table, collection.owner_column
            ),
            params![id.to_string(), source.owner_id().to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for kind in [SourceKind::Project, SourceKind::Entity, SourceKind::Persona] {
        let collection = collection_for(kind);
        if !table_exists(conn, collection.table)? {
            return Err(RepoError::MissingRequiredTable(collection.table));
        }

        let columns = table_columns(conn, collection.table)?;
        if !columns.iter().any(|name| name == collection.owner_column) {
            return Err(RepoError::MissingRequiredColumn {
                table: collection.table,
                column: collection.owner_column,
            });
        }
        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|name| name == required) {
                return Err(RepoError::MissingRequiredColumn {
                    table: collection.table,
                    column: required,
                });
            }
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>("name")?);
    }
    Ok(columns)
}

fn parse_event_row(row: &Row<'_>, table: &'static str) -> RepoResult<TimelineEvent> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in {table}.uuid"))
    })?;

    let visibility_text: String = row.get("visibility")?;
    let visibility = parse_visibility(&visibility_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid visibility `{visibility_text}` in {table}.visibility"
        ))
    })?;

    let media = match row.get::<_, Option<String>>("media")? {
        Some(raw) => serde_json::from_str::<Vec<MediaItem>>(&raw).map_err(|err| {
            RepoError::InvalidData(format!("invalid media payload in {table}.media: {err}"))
        })?,
        None => Vec::new(),
    };

    Ok(TimelineEvent {
        uuid,
        title: row.get("title")?,
        event_type: row.get("event_type")?,
        visibility,
        date: row.get("event_date")?,
        date_to: row.get("event_date_to")?,
        year: row.get("year")?,
        year_to: row.get("year_to")?,
        location_name: row.get("location_name")?,
        city: row.get("city")?,
        country: row.get("country")?,
        description: row.get("description")?,
        media,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn media_to_db(media: &[MediaItem]) -> RepoResult<Option<String>> {
    if media.is_empty() {
        return Ok(None);
    }
    let encoded = serde_json::to_string(media)
        .map_err(|err| RepoError::InvalidData(format!("unencodable media payload: {err}")))?;
    Ok(Some(encoded))
}

fn visibility_to_db(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Public => "public",
        Visibility::Pro => "pro",
        Visibility::Private => "private",
    }
}

fn parse_visibility(value: &str) -> Option<Visibility> {
    match value {
        "public" => Some(Visibility::Public),
        "pro" => Some(Visibility::Pro),
        "private" => Some(Visibility::Private),
        _ => None,
    }
}
