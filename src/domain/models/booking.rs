use crate::domain::models::event::CustomizedEvent;
use crate::domain::models::user::UserIdentity;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment status progression of a booking record.
pub mod payment_status {
    pub const CREATED: &str = "CREATED";
    pub const PAYMENT_INITIATED: &str = "PAYMENT_INITIATED";
    pub const PAID: &str = "PAID";
}

/// Frozen snapshot of a customization taken at confirmation time.
/// Input to checkout; holds no live reference to the session state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingDraft {
    pub event_id: String,
    pub date: DateTime<Utc>,
    pub total_price: i64,
    pub package_name: String,
    pub cart_image: String,
    pub features: Vec<String>,
    pub photography_team_size: i64,
    pub videography: bool,
    pub duration_hours: i64,
    pub expected_attendance: i64,
    pub staff_team_size: i64,
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub user_photo: Option<String>,
    /// Idempotency key for the checkout attempt. Repeated create calls
    /// carrying the same key must resolve to the same booking record.
    pub attempt_key: String,
}

impl BookingDraft {
    pub fn new(
        customized: &CustomizedEvent,
        date: DateTime<Utc>,
        total_price: i64,
        user: &UserIdentity,
    ) -> Self {
        let attempt_key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        Self {
            event_id: customized.id.clone(),
            date,
            total_price,
            package_name: customized.package_name.clone(),
            cart_image: customized.cart_image.clone(),
            features: customized.features.clone(),
            photography_team_size: customized.photography_team_size,
            videography: customized.videography,
            duration_hours: customized.duration_hours,
            expected_attendance: customized.expected_attendance,
            staff_team_size: customized.staff_team_size,
            user_id: user.uid.clone(),
            user_email: user.email.clone(),
            user_name: user.display_name.clone(),
            user_photo: user.photo_url.clone(),
            attempt_key,
        }
    }
}

/// Persisted booking. Created by the first checkout step and mutated by the
/// payment steps; never deleted by the core.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingRecord {
    pub id: String,
    pub event_id: String,
    pub attempt_key: String,
    pub date: DateTime<Utc>,
    pub total_price: i64,
    pub discount_amount: i64,
    pub final_price: i64,
    pub package_name: String,
    pub cart_image: String,
    pub features: Vec<String>,
    pub photography_team_size: i64,
    pub videography: bool,
    pub duration_hours: i64,
    pub expected_attendance: i64,
    pub staff_team_size: i64,
    pub user_id: String,
    pub user_email: String,
    pub user_name: String,
    pub user_photo: Option<String>,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl BookingRecord {
    pub fn from_draft(draft: &BookingDraft, discount_amount: i64, final_price: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id: draft.event_id.clone(),
            attempt_key: draft.attempt_key.clone(),
            date: draft.date,
            total_price: draft.total_price,
            discount_amount,
            final_price,
            package_name: draft.package_name.clone(),
            cart_image: draft.cart_image.clone(),
            features: draft.features.clone(),
            photography_team_size: draft.photography_team_size,
            videography: draft.videography,
            duration_hours: draft.duration_hours,
            expected_attendance: draft.expected_attendance,
            staff_team_size: draft.staff_team_size,
            user_id: draft.user_id.clone(),
            user_email: draft.user_email.clone(),
            user_name: draft.user_name.clone(),
            user_photo: draft.user_photo.clone(),
            payment_status: payment_status::CREATED.to_string(),
            created_at: Utc::now(),
            paid_at: None,
        }
    }
}

/// Gateway redirect details returned by payment initiation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaymentHandle {
    pub booking_id: String,
    pub gateway_url: String,
    pub amount: i64,
    pub currency: String,
}
