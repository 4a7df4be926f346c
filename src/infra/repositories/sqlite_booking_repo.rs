use crate::domain::models::booking::{
    payment_status, BookingDraft, BookingRecord, PaymentHandle,
};
use crate::domain::ports::BookingRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::info;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
    gateway_url: String,
    currency: String,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool, gateway_url: String, currency: String) -> Self {
        Self {
            pool,
            gateway_url,
            currency,
        }
    }

    async fn find_by_attempt_key(&self, key: &str) -> Result<Option<BookingRecord>, AppError> {
        let row = sqlx::query("SELECT * FROM bookings WHERE attempt_key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.as_ref().map(map_booking_row).transpose()
    }

    async fn fetch_required(&self, booking_id: &str) -> Result<BookingRecord, AppError> {
        self.find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))
    }
}

fn map_booking_row(row: &SqliteRow) -> Result<BookingRecord, AppError> {
    let features_json: String = row.try_get("features_json").map_err(AppError::Database)?;

    Ok(BookingRecord {
        id: row.try_get("id").map_err(AppError::Database)?,
        event_id: row.try_get("event_id").map_err(AppError::Database)?,
        attempt_key: row.try_get("attempt_key").map_err(AppError::Database)?,
        date: row.try_get("date").map_err(AppError::Database)?,
        total_price: row.try_get("total_price").map_err(AppError::Database)?,
        discount_amount: row.try_get("discount_amount").map_err(AppError::Database)?,
        final_price: row.try_get("final_price").map_err(AppError::Database)?,
        package_name: row.try_get("package_name").map_err(AppError::Database)?,
        cart_image: row.try_get("cart_image").map_err(AppError::Database)?,
        features: serde_json::from_str(&features_json).unwrap_or_default(),
        photography_team_size: row.try_get("photography_team_size").map_err(AppError::Database)?,
        videography: row.try_get("videography").map_err(AppError::Database)?,
        duration_hours: row.try_get("duration_hours").map_err(AppError::Database)?,
        expected_attendance: row.try_get("expected_attendance").map_err(AppError::Database)?,
        staff_team_size: row.try_get("staff_team_size").map_err(AppError::Database)?,
        user_id: row.try_get("user_id").map_err(AppError::Database)?,
        user_email: row.try_get("user_email").map_err(AppError::Database)?,
        user_name: row.try_get("user_name").map_err(AppError::Database)?,
        user_photo: row.try_get("user_photo").map_err(AppError::Database)?,
        payment_status: row.try_get("payment_status").map_err(AppError::Database)?,
        created_at: row.try_get("created_at").map_err(AppError::Database)?,
        paid_at: row.try_get("paid_at").map_err(AppError::Database)?,
    })
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(
        &self,
        draft: &BookingDraft,
        discount_amount: i64,
        final_price: i64,
    ) -> Result<BookingRecord, AppError> {
        // Retry of a failed checkout attempt resolves to the existing record.
        if let Some(existing) = self.find_by_attempt_key(&draft.attempt_key).await? {
            info!(
                booking_id = %existing.id,
                attempt_key = %draft.attempt_key,
                "create: reusing booking for repeated attempt key"
            );
            return Ok(existing);
        }

        let record = BookingRecord::from_draft(draft, discount_amount, final_price);
        let features_json = serde_json::to_string(&record.features)
            .map_err(|e| AppError::Validation(format!("Unserializable feature list: {}", e)))?;

        sqlx::query(
            "INSERT INTO bookings (id, event_id, attempt_key, date, total_price,
             discount_amount, final_price, package_name, cart_image, features_json,
             photography_team_size, videography, duration_hours, expected_attendance,
             staff_team_size, user_id, user_email, user_name, user_photo,
             payment_status, created_at, paid_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.event_id)
        .bind(&record.attempt_key)
        .bind(record.date)
        .bind(record.total_price)
        .bind(record.discount_amount)
        .bind(record.final_price)
        .bind(&record.package_name)
        .bind(&record.cart_image)
        .bind(&features_json)
        .bind(record.photography_team_size)
        .bind(record.videography)
        .bind(record.duration_hours)
        .bind(record.expected_attendance)
        .bind(record.staff_team_size)
        .bind(&record.user_id)
        .bind(&record.user_email)
        .bind(&record.user_name)
        .bind(&record.user_photo)
        .bind(&record.payment_status)
        .bind(record.created_at)
        .bind(record.paid_at)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(record)
    }

    async fn initiate_payment(&self, booking_id: &str) -> Result<PaymentHandle, AppError> {
        let record = self.fetch_required(booking_id).await?;

        if record.payment_status == payment_status::PAID {
            return Err(AppError::Conflict("Booking is already paid".into()));
        }

        // Re-initiation of an unpaid booking re-issues the handle.
        sqlx::query("UPDATE bookings SET payment_status = ? WHERE id = ? AND payment_status != ?")
            .bind(payment_status::PAYMENT_INITIATED)
            .bind(booking_id)
            .bind(payment_status::PAID)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(PaymentHandle {
            booking_id: booking_id.to_string(),
            gateway_url: format!("{}/pay/{}", self.gateway_url, booking_id),
            amount: record.final_price,
            currency: self.currency.clone(),
        })
    }

    async fn verify_payment(&self, booking_id: &str) -> Result<BookingRecord, AppError> {
        let record = self.fetch_required(booking_id).await?;

        match record.payment_status.as_str() {
            payment_status::PAID => Ok(record),
            payment_status::CREATED => {
                Err(AppError::Conflict("Payment was never initiated".into()))
            }
            _ => {
                let paid_at: DateTime<Utc> = Utc::now();
                let result = sqlx::query(
                    "UPDATE bookings SET payment_status = ?, paid_at = ?
                     WHERE id = ? AND payment_status = ?",
                )
                .bind(payment_status::PAID)
                .bind(paid_at)
                .bind(booking_id)
                .bind(payment_status::PAYMENT_INITIATED)
                .execute(&self.pool)
                .await
                .map_err(AppError::Database)?;

                if result.rows_affected() == 0 {
                    return Err(AppError::Conflict("Payment state changed underneath".into()));
                }

                self.fetch_required(booking_id).await
            }
        }
    }

    async fn find_by_id(&self, booking_id: &str) -> Result<Option<BookingRecord>, AppError> {
        let row = sqlx::query("SELECT * FROM bookings WHERE id = ?")
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.as_ref().map(map_booking_row).transpose()
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingRecord>, AppError> {
        let rows = sqlx::query("SELECT * FROM bookings WHERE user_id = ? ORDER BY created_at DESC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        rows.iter().map(map_booking_row).collect()
    }
}
