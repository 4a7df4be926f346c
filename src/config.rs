use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub currency: String,
    pub payment_gateway_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            currency: env::var("CURRENCY").unwrap_or_else(|_| "BDT".to_string()),
            payment_gateway_url: env::var("PAYMENT_GATEWAY_URL")
                .unwrap_or_else(|_| "https://sandbox.sslcommerz.local/gw".to_string()),
        }
    }
}
