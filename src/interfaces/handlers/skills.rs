use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::Skill, errors::AppError, use_cases::extractors::AdminAccess, AppState};

#[instrument(skip(state))]
pub async fn list_skills(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;

    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_skill(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    data: web::Json<Skill>,
) -> Result<impl Responder, AppError> {
    let response = state.skill_handler
        .create_skill(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_admin, state))]
pub async fn delete_skill(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    skill_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let response = state.skill_handler
        .delete_skill(&skill_id)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
