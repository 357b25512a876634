//! Database queries for the booking table.
//!
//! Expected table (schema management is left to the database owner):
//!
//! ```sql
//! CREATE TABLE booking_data (
//!     client_id   INTEGER        NOT NULL,
//!     first_name  TEXT           NOT NULL,
//!     last_name   TEXT           NOT NULL,
//!     mobile      TEXT           NOT NULL,
//!     room_type   TEXT           NOT NULL,
//!     room_rate   NUMERIC(14, 2) NOT NULL,
//!     check_in    DATE           NOT NULL,
//!     check_out   DATE           NOT NULL,
//!     nights      BIGINT         NOT NULL,
//!     tax         NUMERIC(14, 4) NOT NULL,
//!     discount    NUMERIC(14, 4) NOT NULL,
//!     total_price NUMERIC(14, 4) NOT NULL
//! );
//! ```

use sqlx::PgPool;

use super::models::{BookingRecord, BookingRow};

/// Append one booking row, columns in table order.
pub async fn insert_booking(pool: &PgPool, record: &BookingRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO booking_data (
            client_id, first_name, last_name, mobile,
            room_type, room_rate, check_in, check_out,
            nights, tax, discount, total_price
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(record.client_id())
    .bind(record.first_name())
    .bind(record.last_name())
    .bind(record.mobile())
    .bind(record.room_type().label())
    .bind(record.room_rate())
    .bind(record.check_in())
    .bind(record.check_out())
    .bind(record.nights())
    .bind(record.tax())
    .bind(record.discount())
    .bind(record.total_price())
    .execute(pool)
    .await?;

    Ok(())
}

/// All bookings for a client, earliest stay first
pub async fn find_bookings_by_client(
    pool: &PgPool,
    client_id: i32,
) -> Result<Vec<BookingRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, BookingRow>(
        r#"
        SELECT
            client_id, first_name, last_name, mobile,
            room_type, room_rate, check_in, check_out,
            nights, tax, discount, total_price
        FROM booking_data
        WHERE client_id = $1
        ORDER BY check_in, check_out
        "#,
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
