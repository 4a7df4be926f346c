use booking_core::{
    config::Config,
    domain::models::{event::BaselineEvent, user::UserIdentity},
    infra::{
        factory::run_migrations,
        identity::FixedIdentityProvider,
        repositories::{
            sqlite_booking_repo::SqliteBookingRepo, sqlite_coupon_repo::SqliteCouponRepo,
            sqlite_event_repo::SqliteEventRepo,
        },
    },
    state::AppState,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

const TEST_GATEWAY_URL: &str = "https://gw.test";
const TEST_CURRENCY: &str = "BDT";

#[allow(dead_code)]
pub struct TestApp {
    pub state: AppState,
    pub pool: Pool<Sqlite>,
    pub identity: Arc<FixedIdentityProvider>,
    pub db_filename: String,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = std::env::temp_dir()
            .join(format!("booking_core_test_{}.db", Uuid::new_v4()))
            .to_string_lossy()
            .to_string();
        let database_url = format!("sqlite://{}", db_filename);

        let opts = SqliteConnectOptions::from_str(&database_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to open test database");

        run_migrations(&pool).await;

        let config = Config {
            database_url,
            currency: TEST_CURRENCY.to_string(),
            payment_gateway_url: TEST_GATEWAY_URL.to_string(),
        };

        let identity = Arc::new(FixedIdentityProvider::signed_out());

        let state = AppState {
            config,
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(
                pool.clone(),
                TEST_GATEWAY_URL.to_string(),
                TEST_CURRENCY.to_string(),
            )),
            coupon_repo: Arc::new(SqliteCouponRepo::new(pool.clone())),
            identity: identity.clone(),
        };

        Self {
            state,
            pool,
            identity,
            db_filename,
        }
    }

    /// Inserts the standard wedding package used by most scenarios.
    pub async fn seed_event(&self) -> BaselineEvent {
        let event = BaselineEvent {
            id: Uuid::new_v4().to_string(),
            package_name: "Wedding Classic".to_string(),
            category: "Wedding".to_string(),
            cart_image: "https://img.test/wedding.jpg".to_string(),
            images: vec![
                "https://img.test/wedding-1.jpg".to_string(),
                "https://img.test/wedding-2.jpg".to_string(),
            ],
            photography_team_size: 2,
            duration_hours: 4,
            expected_attendance: 100,
            staff_team_size: 3,
            videography: true,
            features: vec!["Live Streaming".to_string()],
        };
        self.state
            .event_repo
            .create(&event)
            .await
            .expect("Failed to seed event")
    }

    pub async fn seed_coupon(&self, code: &str, discount_amount: i64) {
        sqlx::query("INSERT INTO coupons (code, discount_amount) VALUES (?, ?)")
            .bind(code)
            .bind(discount_amount)
            .execute(&self.pool)
            .await
            .expect("Failed to seed coupon");
    }

    /// Signs in the default test user and returns the identity.
    pub fn sign_in(&self) -> UserIdentity {
        let user = UserIdentity {
            uid: "user-1".to_string(),
            email: "alice@example.com".to_string(),
            display_name: "Alice".to_string(),
            photo_url: Some("https://img.test/alice.png".to_string()),
        };
        self.identity.sign_in(user.clone());
        user
    }

    pub async fn booking_count(&self) -> i64 {
        let row = sqlx::query("SELECT COUNT(*) as count FROM bookings")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        row.get::<i64, _>("count")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
