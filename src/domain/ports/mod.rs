use crate::domain::models::{
    booking::{BookingDraft, BookingRecord, PaymentHandle},
    event::BaselineEvent,
    user::UserIdentity,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &BaselineEvent) -> Result<BaselineEvent, AppError>;
    async fn fetch_by_id(&self, id: &str) -> Result<Option<BaselineEvent>, AppError>;
    async fn list(&self) -> Result<Vec<BaselineEvent>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a booking for the draft. Must be idempotent on the draft's
    /// attempt key: a repeated call returns the already-created record.
    async fn create(
        &self,
        draft: &BookingDraft,
        discount_amount: i64,
        final_price: i64,
    ) -> Result<BookingRecord, AppError>;
    async fn initiate_payment(&self, booking_id: &str) -> Result<PaymentHandle, AppError>;
    async fn verify_payment(&self, booking_id: &str) -> Result<BookingRecord, AppError>;
    async fn find_by_id(&self, booking_id: &str) -> Result<Option<BookingRecord>, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<BookingRecord>, AppError>;
}

#[async_trait]
pub trait CouponRepository: Send + Sync {
    /// Resolves a coupon code to its discount amount.
    /// Fails with `InvalidCoupon` for unknown codes.
    async fn resolve(&self, code: &str) -> Result<i64, AppError>;
}

pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<UserIdentity>;
}
