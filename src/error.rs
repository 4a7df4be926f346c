use thiserror::Error;

/// Step of the checkout sequence that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    CreateBooking,
    InitiatePayment,
    VerifyPayment,
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::CreateBooking => write!(f, "create-booking"),
            CheckoutStep::InitiatePayment => write!(f, "initiate-payment"),
            CheckoutStep::VerifyPayment => write!(f, "verify-payment"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Unknown adjustable parameter: {0}")]
    InvalidParameter(String),
    #[error("Invalid coupon code: {0}")]
    InvalidCoupon(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Checkout failed at {step}: {reason}")]
    CheckoutFailed { step: CheckoutStep, reason: String },
}

impl AppError {
    /// Step at which a checkout failed, if this error came out of the
    /// checkout sequence.
    pub fn failed_step(&self) -> Option<CheckoutStep> {
        match self {
            AppError::CheckoutFailed { step, .. } => Some(*step),
            _ => None,
        }
    }
}
