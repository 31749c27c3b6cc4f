use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::errors::AppError;

/// Marker placed in request extensions by the admin guard once the
/// `x-api-key` header matched.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

/// Extractor proving the admin guard let the request through.
/// Returns 401 when the marker is missing.
/// Usage: Add `_admin: AdminAccess` as a parameter to an admin handler.
impl FromRequest for AdminAccess {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AdminAccess>() {
            Some(access) => ready(Ok(*access)),
            None => ready(Err(AppError::UnauthorizedAccess.into())),
        }
    }
}
