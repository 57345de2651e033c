//! SQLite-backed record store for rendered day forecasts.
//!
//! One row per `(date, location)`; re-running a cycle refreshes the row in
//! place rather than inserting duplicates.

use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use weathercal_forecast::DayForecast;

/// Forecast persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// A persisted forecast record.
#[derive(Debug, Clone)]
pub struct StoredForecast {
    pub date: NaiveDate,
    pub location: String,
    pub high: f64,
    pub low: f64,
    pub summary: String,
    pub description: String,
    pub updated_at: DateTime<Utc>,
}

/// SQLite store for rendered forecasts.
pub struct ForecastStore {
    conn: Connection,
}

impl ForecastStore {
    /// Open or create the database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    #[cfg(test)]
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS forecast (
                date TEXT NOT NULL,
                location TEXT NOT NULL,
                high REAL NOT NULL,
                low REAL NOT NULL,
                summary TEXT NOT NULL,
                description TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (date, location)
            );

            CREATE INDEX IF NOT EXISTS idx_forecast_date ON forecast(date);
            "#,
        )?;
        Ok(())
    }

    /// Insert or refresh the record for the forecast's `(date, location)`.
    pub fn upsert(&self, forecast: &DayForecast) -> Result<(), StoreError> {
        tracing::debug!(
            "Upserting forecast for {} at {}",
            forecast.date,
            forecast.location
        );
        self.conn.execute(
            r#"
            INSERT INTO forecast (date, location, high, low, summary, description, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT(date, location) DO UPDATE SET
                high = excluded.high,
                low = excluded.low,
                summary = excluded.summary,
                description = excluded.description,
                updated_at = excluded.updated_at
            "#,
            params![
                forecast.date.to_string(),
                forecast.location,
                forecast.high,
                forecast.low,
                forecast.summary,
                forecast.description,
                Utc::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Fetch the record for a date and location, if present.
    pub fn get(&self, date: NaiveDate, location: &str) -> Result<Option<StoredForecast>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT date, location, high, low, summary, description, updated_at
                 FROM forecast WHERE date = ?1 AND location = ?2",
                params![date.to_string(), location],
                Self::row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// All records ordered by date, then location.
    pub fn list_all(&self) -> Result<Vec<StoredForecast>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT date, location, high, low, summary, description, updated_at
             FROM forecast ORDER BY date ASC, location ASC",
        )?;
        let rows = stmt.query_map([], Self::row_to_record)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<StoredForecast> {
        let date: String = row.get(0)?;
        let updated_at: String = row.get(6)?;
        Ok(StoredForecast {
            date: NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap_or_default(),
            location: row.get(1)?,
            high: row.get(2)?,
            low: row.get(3)?,
            summary: row.get(4)?,
            description: row.get(5)?,
            updated_at: DateTime::parse_from_rfc3339(&updated_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_default(),
        })
    }
}
