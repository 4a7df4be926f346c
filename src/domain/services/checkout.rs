use crate::domain::models::booking::{BookingDraft, BookingRecord};
use crate::domain::ports::BookingRepository;
use crate::error::{AppError, CheckoutStep};
use std::sync::Arc;
use tracing::{info, warn};

/// Drives the ordered booking/payment transaction:
/// create booking -> initiate payment -> verify payment.
///
/// Each step is a single remote call issued once per invocation, strictly
/// after the previous one resolved. There is no automatic retry and no
/// rollback: a failure surfaces as `CheckoutFailed` carrying the step that
/// broke, and whatever the remote store holds at that point stays as-is
/// (a booking left in CREATED after a failed initiation is a recognised
/// intermediate state the caller can resume from).
pub struct BookingOrchestrator {
    bookings: Arc<dyn BookingRepository>,
}

impl BookingOrchestrator {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn run(
        &self,
        draft: &BookingDraft,
        discount_amount: i64,
        final_price: i64,
    ) -> Result<BookingRecord, AppError> {
        info!(
            event_id = %draft.event_id,
            attempt_key = %draft.attempt_key,
            final_price,
            "checkout: creating booking"
        );

        let record = self
            .bookings
            .create(draft, discount_amount, final_price)
            .await
            .map_err(|e| Self::fail(CheckoutStep::CreateBooking, e))?;

        let handle = self
            .bookings
            .initiate_payment(&record.id)
            .await
            .map_err(|e| Self::fail(CheckoutStep::InitiatePayment, e))?;

        info!(
            booking_id = %record.id,
            gateway_url = %handle.gateway_url,
            "checkout: payment initiated"
        );

        let verified = self
            .bookings
            .verify_payment(&record.id)
            .await
            .map_err(|e| Self::fail(CheckoutStep::VerifyPayment, e))?;

        info!(booking_id = %verified.id, "checkout: payment verified");
        Ok(verified)
    }

    fn fail(step: CheckoutStep, source: AppError) -> AppError {
        warn!(%step, error = %source, "checkout step failed");
        AppError::CheckoutFailed {
            step,
            reason: source.to_string(),
        }
    }
}
