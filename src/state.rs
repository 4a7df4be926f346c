use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, CouponRepository, EventRepository, IdentityProvider,
};
use crate::domain::services::session::CustomizationSession;
use crate::error::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub coupon_repo: Arc<dyn CouponRepository>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Fetches the baseline package and opens a customization session seeded
    /// with a working copy of it.
    pub async fn start_session(&self, event_id: &str) -> Result<CustomizationSession, AppError> {
        let baseline = self
            .event_repo
            .fetch_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        Ok(CustomizationSession::new(
            baseline,
            self.identity.clone(),
            self.coupon_repo.clone(),
            self.booking_repo.clone(),
        ))
    }
}
