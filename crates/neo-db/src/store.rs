//! The shared record collection.
//!
//! [`RecordStore`] is the reactive object store the watchlist and profiles
//! sit on: `create`, `delete`, and a subscription that yields the ENTIRE
//! collection (every user, every record type) after each change.
//! [`LibsqlRecordStore`] is the local implementation: one `records` table,
//! re-read and broadcast on a `tokio::sync::watch` channel after every
//! successful mutation.

use std::sync::Arc;

use chrono::Utc;
use libsql::{Builder, Value};
use neo_core::entities::{Record, StoredRecord, UserProfile, WatchRecord};
use neo_core::enums::RecordType;
use neo_core::policy::PREFIX_RECORD;
use tokio::sync::watch;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, require};

/// A full snapshot of the collection, shared between subscribers.
pub type Snapshot = Arc<Vec<StoredRecord>>;

const SELECT_RECORDS: &str = "SELECT backend_id, record_type, user_email, user_name, asteroid_id,
            asteroid_name, alert_distance_km, is_active, created_at
     FROM records ORDER BY created_at, rowid";

/// Reactive object store holding typed records.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Persist a new record and return it with its backend id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` when the backend rejects the write.
    async fn create(&self, record: Record) -> Result<StoredRecord, DatabaseError>;

    /// Delete a previously stored record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` when the record no longer exists,
    /// or another `DatabaseError` when the backend fails.
    async fn delete(&self, record: &StoredRecord) -> Result<(), DatabaseError>;

    /// Subscribe to full snapshots. The receiver starts at the current one.
    fn subscribe(&self) -> watch::Receiver<Snapshot>;

    /// The most recent snapshot.
    fn snapshot(&self) -> Snapshot;
}

/// [`RecordStore`] over a local libSQL database.
pub struct LibsqlRecordStore {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    changes: watch::Sender<Snapshot>,
}

impl LibsqlRecordStore {
    /// Open a local database at the given path, or `:memory:`.
    ///
    /// Runs migrations and loads the initial snapshot. Unreadable rows are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrations
    /// fail, or the initial query fails.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Self::run_migrations(&conn).await?;

        let initial = load_all(&conn).await?;
        tracing::debug!(path, records = initial.len(), "record store opened");
        let (changes, _) = watch::channel(Arc::new(initial));
        Ok(Self { db, conn, changes })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"rec-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Re-read the table and broadcast it only if it differs from the held
    /// snapshot. Picks up writes made by other processes sharing the file.
    ///
    /// Returns whether a new snapshot was sent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn reload(&self) -> Result<bool, DatabaseError> {
        let records = load_all(&self.conn).await?;
        let changed = self.changes.send_if_modified(|current| {
            if current.as_slice() == records.as_slice() {
                return false;
            }
            *current = Arc::new(records);
            true
        });
        if changed {
            tracing::debug!("record store changed externally");
        }
        Ok(changed)
    }

    /// Re-read the table and broadcast the result to every subscriber.
    ///
    /// Runs after a committed write, so a failure here is logged and the
    /// write still reports success. Subscribers catch up on the next
    /// successful publish or [`reload`](Self::reload).
    async fn publish(&self) {
        match load_all(&self.conn).await {
            Ok(records) => {
                tracing::debug!(
                    users = count_of(&records, RecordType::User),
                    watches = count_of(&records, RecordType::Watch),
                    "broadcasting record snapshot"
                );
                self.changes.send_replace(Arc::new(records));
            }
            Err(error) => {
                tracing::warn!(%error, "write committed but snapshot re-read failed");
            }
        }
    }
}

impl RecordStore for LibsqlRecordStore {
    async fn create(&self, record: Record) -> Result<StoredRecord, DatabaseError> {
        let backend_id = self.generate_id(PREFIX_RECORD).await?;
        let params = insert_params(&backend_id, &record);
        self.conn
            .execute(
                "INSERT INTO records (backend_id, record_type, user_email, user_name, asteroid_id,
                     asteroid_name, alert_distance_km, is_active, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                libsql::params_from_iter(params),
            )
            .await?;
        tracing::debug!(%backend_id, record_type = %record.record_type(), "record created");

        self.publish().await;
        Ok(StoredRecord { backend_id, record })
    }

    async fn delete(&self, record: &StoredRecord) -> Result<(), DatabaseError> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM records WHERE backend_id = ?1",
                [record.backend_id.as_str()],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(backend_id = %record.backend_id, "record deleted");

        self.publish().await;
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.changes.subscribe()
    }

    fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.changes.borrow())
    }
}

fn insert_params(backend_id: &str, record: &Record) -> Vec<Value> {
    let mut params: Vec<Value> = vec![
        backend_id.into(),
        record.record_type().as_str().into(),
    ];
    match record {
        Record::User(profile) => params.extend([
            profile.user_email.as_str().into(),
            profile.user_name.as_str().into(),
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            profile.created_at.to_rfc3339().into(),
        ]),
        Record::Watch(watch) => params.extend([
            watch.user_email.as_str().into(),
            watch.user_name.as_str().into(),
            watch.asteroid_id.as_str().into(),
            watch.asteroid_name.as_str().into(),
            Value::Real(watch.alert_distance_km),
            Value::Integer(i64::from(watch.is_active)),
            watch.created_at.to_rfc3339().into(),
        ]),
    }
    params
}

/// Read every record. Rows that do not parse are logged and left out of the
/// snapshot; only query failures are errors.
async fn load_all(conn: &libsql::Connection) -> Result<Vec<StoredRecord>, DatabaseError> {
    let mut rows = conn.query(SELECT_RECORDS, ()).await?;
    let mut records = Vec::new();
    while let Some(row) = rows.next().await? {
        match row_to_record(&row) {
            Ok(record) => records.push(record),
            Err(error) => {
                let backend_id = row.get::<String>(0).unwrap_or_default();
                tracing::warn!(%backend_id, %error, "skipping unreadable record");
            }
        }
    }
    Ok(records)
}

fn row_to_record(row: &libsql::Row) -> Result<StoredRecord, DatabaseError> {
    let backend_id = row.get::<String>(0)?;
    let record_type: RecordType = parse_enum(&row.get::<String>(1)?)?;
    let user_email = row.get::<String>(2)?;
    let user_name = row.get::<String>(3)?;
    let created_at = parse_datetime(&row.get::<String>(8)?)?;

    let record = match record_type {
        RecordType::User => Record::User(UserProfile {
            user_email,
            user_name,
            created_at,
        }),
        RecordType::Watch => Record::Watch(WatchRecord {
            user_email,
            user_name,
            asteroid_id: require(get_opt_string(row, 4)?, "asteroid_id", &backend_id)?,
            asteroid_name: get_opt_string(row, 5)?.unwrap_or_default(),
            alert_distance_km: require(
                row.get::<Option<f64>>(6)?,
                "alert_distance_km",
                &backend_id,
            )?,
            is_active: row.get::<Option<i64>>(7)?.is_some_and(|flag| flag != 0),
            created_at,
        }),
    };
    Ok(StoredRecord { backend_id, record })
}

/// Count of records of one type, for diagnostics.
#[must_use]
pub fn count_of(snapshot: &[StoredRecord], record_type: RecordType) -> usize {
    snapshot
        .iter()
        .filter(|stored| stored.record_type() == record_type)
        .count()
}

/// Stamp a fresh watch record for `user_email` at the current time.
#[must_use]
pub fn new_watch_record(
    user_email: &str,
    user_name: &str,
    asteroid_id: &str,
    asteroid_name: &str,
    alert_distance_km: f64,
) -> WatchRecord {
    WatchRecord {
        user_email: user_email.to_string(),
        user_name: user_name.to_string(),
        asteroid_id: asteroid_id.to_string(),
        asteroid_name: asteroid_name.to_string(),
        alert_distance_km,
        is_active: true,
        created_at: Utc::now(),
    }
}
