//! Camper operations: list, fetch with relationships, create.

use crate::core::store::Db;
use crate::domain::model::{
    Activity, ActivitySummary, Camper, CamperDetail, CamperSignupView, CamperSummary, CreateCamper,
    Signup,
};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{coerce_int, validate_non_empty_string, validate_range};

pub async fn list(db: &Db) -> Result<Vec<CamperSummary>> {
    let campers: Vec<Camper> = sqlx::query_as("SELECT * FROM campers ORDER BY id")
        .fetch_all(db.pool())
        .await?;

    Ok(campers.into_iter().map(CamperSummary::from).collect())
}

/// Fetch a camper with its signups (one hop, each carrying its activity) and
/// the derived activity list computed through the signups join.
pub async fn get(db: &Db, id: i64) -> Result<CamperDetail> {
    let camper: Camper = sqlx::query_as("SELECT * FROM campers WHERE id = ?")
        .bind(id)
        .fetch_optional(db.pool())
        .await?
        .ok_or(ApiError::NotFound { entity: "Camper" })?;

    let signups: Vec<Signup> =
        sqlx::query_as("SELECT * FROM signups WHERE camper_id = ? ORDER BY id")
            .bind(id)
            .fetch_all(db.pool())
            .await?;

    let mut signup_views = Vec::with_capacity(signups.len());
    for signup in signups {
        let activity: Option<Activity> = match signup.activity_id {
            Some(activity_id) => {
                sqlx::query_as("SELECT * FROM activities WHERE id = ?")
                    .bind(activity_id)
                    .fetch_optional(db.pool())
                    .await?
            }
            None => None,
        };
        signup_views.push(CamperSignupView {
            id: signup.id,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            time: signup.time,
            activity: activity.map(ActivitySummary::from),
        });
    }

    let activities: Vec<Activity> = sqlx::query_as(
        "SELECT DISTINCT a.* FROM activities a
         JOIN signups s ON s.activity_id = a.id
         WHERE s.camper_id = ? ORDER BY a.id",
    )
    .bind(id)
    .fetch_all(db.pool())
    .await?;

    Ok(CamperDetail {
        id: camper.id,
        name: camper.name,
        age: camper.age,
        signups: signup_views,
        activities: activities.into_iter().map(ActivitySummary::from).collect(),
    })
}

/// Validate, then insert. Validation failures never reach the store.
pub async fn create(db: &Db, payload: CreateCamper) -> Result<CamperDetail> {
    let name = validate_non_empty_string("name", payload.name.as_deref())?;
    let age = validate_range("age", coerce_int("age", payload.age.as_ref())?, 8, 18)?;

    let result = sqlx::query("INSERT INTO campers (name, age) VALUES (?, ?)")
        .bind(&name)
        .bind(age)
        .execute(db.pool())
        .await?;

    let id = result.last_insert_rowid();
    tracing::info!("Created camper {} ({})", id, name);

    get(db, id).await
}
