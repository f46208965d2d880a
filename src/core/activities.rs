//! Activity operations: list, delete.

use crate::core::store::Db;
use crate::domain::model::{Activity, ActivitySummary};
use crate::utils::error::{ApiError, Result};

pub async fn list(db: &Db) -> Result<Vec<ActivitySummary>> {
    let activities: Vec<Activity> = sqlx::query_as("SELECT * FROM activities ORDER BY id")
        .fetch_all(db.pool())
        .await?;

    Ok(activities.into_iter().map(ActivitySummary::from).collect())
}

pub async fn delete(db: &Db, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM activities WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound { entity: "Activity" });
    }

    tracing::info!("Deleted activity {}", id);
    Ok(())
}
