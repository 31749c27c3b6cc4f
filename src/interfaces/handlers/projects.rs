use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::Project, errors::AppError, use_cases::extractors::AdminAccess, AppState};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let projects = state.project_handler.list_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_project(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    data: web::Json<Project>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler
        .create_project(data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(_admin, state))]
pub async fn delete_project(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    project_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler
        .delete_project(&project_id)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
