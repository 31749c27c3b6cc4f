use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::ContactSubmission, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactSubmission>,
) -> Result<impl Responder, AppError> {
    let response = state.contact_handler
        .submit_contact(form.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
