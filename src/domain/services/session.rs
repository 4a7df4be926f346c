use crate::domain::models::booking::{BookingDraft, BookingRecord};
use crate::domain::models::event::{AdjustableParameter, BaselineEvent, CustomizedEvent};
use crate::domain::ports::{BookingRepository, CouponRepository, IdentityProvider};
use crate::domain::services::checkout::BookingOrchestrator;
use crate::domain::services::pricing;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// One user's customization of a baseline event package.
///
/// Holds the immutable baseline next to the mutable working copy, applies the
/// parameter-mutation rules, and carries the customization through coupon
/// application and checkout. All collaborators arrive through constructor
/// injection; nothing here touches ambient state.
pub struct CustomizationSession {
    baseline: BaselineEvent,
    customized: CustomizedEvent,
    discount_amount: i64,
    draft: Option<BookingDraft>,
    identity: Arc<dyn IdentityProvider>,
    coupons: Arc<dyn CouponRepository>,
    orchestrator: BookingOrchestrator,
}

impl CustomizationSession {
    pub fn new(
        baseline: BaselineEvent,
        identity: Arc<dyn IdentityProvider>,
        coupons: Arc<dyn CouponRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        let customized = CustomizedEvent::from(&baseline);
        Self {
            baseline,
            customized,
            discount_amount: 0,
            draft: None,
            identity,
            coupons,
            orchestrator: BookingOrchestrator::new(bookings),
        }
    }

    pub fn baseline(&self) -> &BaselineEvent {
        &self.baseline
    }

    pub fn customized(&self) -> &CustomizedEvent {
        &self.customized
    }

    /// Adjusts a parameter by `delta`, clamping at the floor of 1.
    /// No upper bound is enforced. Returns the new value.
    pub fn increment_parameter(&mut self, name: &str, delta: i64) -> Result<i64, AppError> {
        let param: AdjustableParameter = name.parse()?;
        let value = (self.customized.parameter(param) + delta).max(1);
        self.customized.set_parameter(param, value);
        Ok(value)
    }

    /// Restores a parameter to its baseline default, exactly.
    pub fn reset_parameter(&mut self, name: &str) -> Result<i64, AppError> {
        let param: AdjustableParameter = name.parse()?;
        let value = self.baseline.parameter(param);
        self.customized.set_parameter(param, value);
        Ok(value)
    }

    /// Appends a feature. Duplicates are kept; the list is append-only.
    pub fn add_feature(&mut self, name: &str) {
        self.customized.features.push(name.to_string());
    }

    /// Current total, recomputed from the working copy on every call.
    pub fn total_price(&self) -> i64 {
        pricing::compute_total_price(&self.baseline, &self.customized)
    }

    pub fn discount_amount(&self) -> i64 {
        self.discount_amount
    }

    /// Total after the currently applied discount.
    pub fn final_price(&self) -> i64 {
        pricing::apply_discount(self.total_price(), self.discount_amount)
    }

    /// Resolves a coupon code and stores its discount. An unknown code
    /// surfaces `InvalidCoupon` and leaves the applied discount unchanged.
    pub async fn apply_coupon(&mut self, code: &str) -> Result<i64, AppError> {
        let discount = self.coupons.resolve(code).await?;
        info!(code, discount, "coupon applied");
        self.discount_amount = discount;
        Ok(discount)
    }

    /// Freezes the customization into a booking draft for the chosen date.
    ///
    /// Requires a signed-in identity; fails with `Unauthenticated` before any
    /// remote call is made. Each confirmation mints a fresh attempt key, so a
    /// re-confirmed customization checks out as a new booking attempt.
    pub fn confirm(&mut self, date: DateTime<Utc>) -> Result<BookingDraft, AppError> {
        let user = self.identity.current().ok_or(AppError::Unauthenticated)?;
        let draft = BookingDraft::new(&self.customized, date, self.total_price(), &user);
        info!(
            event_id = %draft.event_id,
            user_id = %draft.user_id,
            total_price = draft.total_price,
            "customization confirmed"
        );
        self.draft = Some(draft.clone());
        Ok(draft)
    }

    /// Runs the checkout sequence for the confirmed draft.
    ///
    /// On failure the working copy is untouched and the draft (with its
    /// attempt key) is kept, so calling again retries the same booking
    /// attempt instead of creating a second record.
    pub async fn checkout(&self, final_price: i64) -> Result<BookingRecord, AppError> {
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| AppError::Validation("Checkout requires a confirmed draft".into()))?;
        self.orchestrator
            .run(draft, self.discount_amount, final_price)
            .await
    }
}
