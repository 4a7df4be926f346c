use crate::domain::ports::CouponRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::warn;

pub struct SqliteCouponRepo {
    pool: SqlitePool,
}

impl SqliteCouponRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CouponRepository for SqliteCouponRepo {
    async fn resolve(&self, code: &str) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT discount_amount FROM coupons WHERE code = ?")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match row {
            Some(row) => Ok(row.get::<i64, _>("discount_amount")),
            None => {
                warn!(code, "unknown coupon code");
                Err(AppError::InvalidCoupon(code.to_string()))
            }
        }
    }
}
