//! Booking storage.
//!
//! The service layer only sees the `BookingStore` capability; which backend
//! sits behind it is decided at startup.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error};

use crate::booking::models::BookingRecord;
use crate::booking::queries;

/// Storage failure, surfaced to the clerk as a single message.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database Error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database Error: {0}")]
    Rejected(String),
}

/// Where finished bookings go.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Append one booking. No retry on failure.
    async fn insert(&self, record: &BookingRecord) -> Result<(), StorageError>;

    /// Bookings stored for a client, earliest stay first.
    async fn find_by_client(&self, client_id: i32) -> Result<Vec<BookingRecord>, StorageError>;
}

/// Postgres-backed store over the `booking_data` table.
#[derive(Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool without connecting. An unreachable database shows up as
    /// a `StorageError` on the first save instead of at startup.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert(&self, record: &BookingRecord) -> Result<(), StorageError> {
        queries::insert_booking(&self.pool, record).await.map_err(|e| {
            error!("Failed to insert booking for client {}: {}", record.client_id(), e);
            StorageError::from(e)
        })
    }

    async fn find_by_client(&self, client_id: i32) -> Result<Vec<BookingRecord>, StorageError> {
        let rows = queries::find_bookings_by_client(&self.pool, client_id).await?;
        rows.into_iter()
            .map(|row| {
                row.into_record()
                    .map_err(|e| StorageError::Rejected(e.to_string()))
            })
            .collect()
    }
}

/// In-process store, used when no database is configured and in tests.
#[derive(Default)]
pub struct MemoryBookingStore {
    records: Mutex<Vec<BookingRecord>>,
    reject_with: Mutex<Option<String>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following insert fail with `message`; `None` accepts again.
    pub fn reject_inserts(&self, message: Option<String>) {
        *lock(&self.reject_with) = message;
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of everything stored, in insertion order.
    pub fn records(&self) -> Vec<BookingRecord> {
        lock(&self.records).clone()
    }
}

// A poisoned lock only means another thread panicked mid-push; the Vec is
// still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, record: &BookingRecord) -> Result<(), StorageError> {
        if let Some(message) = lock(&self.reject_with).clone() {
            return Err(StorageError::Rejected(message));
        }
        lock(&self.records).push(record.clone());
        debug!("Stored booking in memory for client {}", record.client_id());
        Ok(())
    }

    async fn find_by_client(&self, client_id: i32) -> Result<Vec<BookingRecord>, StorageError> {
        let mut found: Vec<BookingRecord> = lock(&self.records)
            .iter()
            .filter(|r| r.client_id() == client_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| (r.check_in(), r.check_out()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::models::{BookingInput, RoomType};
    use crate::booking::services::build_booking_record;

    fn record(client_id: &str, check_in: &str, check_out: &str) -> BookingRecord {
        build_booking_record(&BookingInput {
            client_id: client_id.to_string(),
            first_name: "Grace".to_string(),
            last_name: "Wanjiru".to_string(),
            mobile: "0722000111".to_string(),
            room_type: Some(RoomType::Suite),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_memory_store_round_trip_preserves_all_fields() {
        let store = MemoryBookingStore::new();
        let saved = record("9", "2025-06-01", "2025-06-09");

        store.insert(&saved).await.unwrap();
        let found = store.find_by_client(9).await.unwrap();

        assert_eq!(found, vec![saved.clone()]);
        let back = &found[0];
        assert_eq!(back.client_id(), saved.client_id());
        assert_eq!(back.first_name(), saved.first_name());
        assert_eq!(back.last_name(), saved.last_name());
        assert_eq!(back.mobile(), saved.mobile());
        assert_eq!(back.room_type(), saved.room_type());
        assert_eq!(back.room_rate(), saved.room_rate());
        assert_eq!(back.check_in(), saved.check_in());
        assert_eq!(back.check_out(), saved.check_out());
        assert_eq!(back.nights(), saved.nights());
        assert_eq!(back.tax(), saved.tax());
        assert_eq!(back.discount(), saved.discount());
        assert_eq!(back.total_price(), saved.total_price());
    }

    #[tokio::test]
    async fn test_memory_store_filters_and_orders_by_stay() {
        let store = MemoryBookingStore::new();
        store.insert(&record("1", "2025-08-01", "2025-08-03")).await.unwrap();
        store.insert(&record("2", "2025-01-01", "2025-01-03")).await.unwrap();
        store.insert(&record("1", "2025-02-01", "2025-02-03")).await.unwrap();

        let found = store.find_by_client(1).await.unwrap();
        let check_ins: Vec<String> = found.iter().map(|r| r.check_in().to_string()).collect();
        assert_eq!(check_ins, vec!["2025-02-01", "2025-08-01"]);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_memory_store_rejection() {
        let store = MemoryBookingStore::new();
        store.reject_inserts(Some("connection refused".to_string()));

        let err = store
            .insert(&record("1", "2025-01-01", "2025-01-02"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Database Error: connection refused");
        assert!(store.is_empty());

        store.reject_inserts(None);
        store.insert(&record("1", "2025-01-01", "2025-01-02")).await.unwrap();
        assert_eq!(store.len(), 1);
    }
}
