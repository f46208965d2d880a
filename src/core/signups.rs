//! Signup operations: create the join record between a camper and an activity.

use crate::core::store::Db;
use crate::domain::model::{
    Activity, ActivitySummary, Camper, CamperSummary, CreateSignup, SignupDetail,
};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{coerce_int, validate_range};

/// Validate the time slot and check that both referenced rows exist before
/// inserting; a dangling camper_id or activity_id is a validation failure,
/// not a store error. The checks and the insert share one transaction so a
/// concurrent activity delete cannot slip between them.
pub async fn create(db: &Db, payload: CreateSignup) -> Result<SignupDetail> {
    let camper_id = coerce_int("camper_id", payload.camper_id.as_ref())?;
    let activity_id = coerce_int("activity_id", payload.activity_id.as_ref())?;
    let time = validate_range("time", coerce_int("time", payload.time.as_ref())?, 0, 23)?;

    let mut tx = db.pool().begin().await?;

    let camper: Camper = sqlx::query_as("SELECT * FROM campers WHERE id = ?")
        .bind(camper_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::Validation {
            field: "camper_id".to_string(),
            reason: format!("No camper with id {}", camper_id),
        })?;

    let activity: Activity = sqlx::query_as("SELECT * FROM activities WHERE id = ?")
        .bind(activity_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::Validation {
            field: "activity_id".to_string(),
            reason: format!("No activity with id {}", activity_id),
        })?;

    let result = sqlx::query("INSERT INTO signups (camper_id, activity_id, time) VALUES (?, ?, ?)")
        .bind(camper_id)
        .bind(activity_id)
        .bind(time)
        .execute(&mut *tx)
        .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;
    tracing::info!(
        "Created signup {} (camper {} -> activity {})",
        id,
        camper_id,
        activity_id
    );

    Ok(SignupDetail {
        id,
        camper_id: Some(camper_id),
        activity_id: Some(activity_id),
        time,
        camper: Some(CamperSummary::from(camper)),
        activity: Some(ActivitySummary::from(activity)),
    })
}
