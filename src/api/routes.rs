//! HTTP surface. Handlers stay thin: extract, call the core operation,
//! wrap the view in a status code. Errors convert through `ApiError`'s
//! `IntoResponse` impl.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use crate::core::store::Db;
use crate::core::{activities, campers, signups};
use crate::domain::model::{CreateCamper, CreateSignup};
use crate::utils::error::Result;

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/campers", get(list_campers).post(create_camper))
        .route("/campers/{id}", get(get_camper))
        .route("/activities", get(list_activities))
        .route("/activities/{id}", delete(delete_activity))
        .route("/signups", post(create_signup))
        .with_state(db)
}

async fn home() -> &'static str {
    ""
}

async fn list_campers(State(db): State<Db>) -> Result<impl IntoResponse> {
    Ok(Json(campers::list(&db).await?))
}

async fn get_camper(State(db): State<Db>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    Ok(Json(campers::get(&db, id).await?))
}

async fn create_camper(
    State(db): State<Db>,
    Json(payload): Json<CreateCamper>,
) -> Result<impl IntoResponse> {
    let camper = campers::create(&db, payload).await?;
    Ok((StatusCode::CREATED, Json(camper)))
}

async fn list_activities(State(db): State<Db>) -> Result<impl IntoResponse> {
    Ok(Json(activities::list(&db).await?))
}

async fn delete_activity(State(db): State<Db>, Path(id): Path<i64>) -> Result<impl IntoResponse> {
    activities::delete(&db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_signup(
    State(db): State<Db>,
    Json(payload): Json<CreateSignup>,
) -> Result<impl IntoResponse> {
    let signup = signups::create(&db, payload).await?;
    Ok((StatusCode::CREATED, Json(signup)))
}
