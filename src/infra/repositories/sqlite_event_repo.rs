use crate::domain::models::event::BaselineEvent;
use crate::domain::ports::EventRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// String lists live in JSON TEXT columns, so rows are mapped by hand.
fn map_event_row(row: &SqliteRow) -> Result<BaselineEvent, AppError> {
    let images_json: String = row.try_get("images_json").map_err(AppError::Database)?;
    let features_json: String = row.try_get("features_json").map_err(AppError::Database)?;

    Ok(BaselineEvent {
        id: row.try_get("id").map_err(AppError::Database)?,
        package_name: row.try_get("package_name").map_err(AppError::Database)?,
        category: row.try_get("category").map_err(AppError::Database)?,
        cart_image: row.try_get("cart_image").map_err(AppError::Database)?,
        images: serde_json::from_str(&images_json).unwrap_or_default(),
        photography_team_size: row.try_get("photography_team_size").map_err(AppError::Database)?,
        duration_hours: row.try_get("duration_hours").map_err(AppError::Database)?,
        expected_attendance: row.try_get("expected_attendance").map_err(AppError::Database)?,
        staff_team_size: row.try_get("staff_team_size").map_err(AppError::Database)?,
        videography: row.try_get("videography").map_err(AppError::Database)?,
        features: serde_json::from_str(&features_json).unwrap_or_default(),
    })
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, event: &BaselineEvent) -> Result<BaselineEvent, AppError> {
        let images_json = serde_json::to_string(&event.images)
            .map_err(|e| AppError::Validation(format!("Unserializable image list: {}", e)))?;
        let features_json = serde_json::to_string(&event.features)
            .map_err(|e| AppError::Validation(format!("Unserializable feature list: {}", e)))?;

        sqlx::query(
            "INSERT INTO events (id, package_name, category, cart_image, images_json,
             photography_team_size, duration_hours, expected_attendance, staff_team_size,
             videography, features_json)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&event.id)
        .bind(&event.package_name)
        .bind(&event.category)
        .bind(&event.cart_image)
        .bind(&images_json)
        .bind(event.photography_team_size)
        .bind(event.duration_hours)
        .bind(event.expected_attendance)
        .bind(event.staff_team_size)
        .bind(event.videography)
        .bind(&features_json)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(event.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<BaselineEvent>, AppError> {
        let row = sqlx::query("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        row.as_ref().map(map_event_row).transpose()
    }

    async fn list(&self) -> Result<Vec<BaselineEvent>, AppError> {
        let rows = sqlx::query("SELECT * FROM events ORDER BY package_name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        rows.iter().map(map_event_row).collect()
    }
}
