use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, HttpResponse,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{constants::ADMIN_KEY_HEADER, use_cases::extractors::AdminAccess, AppState};

/// Gate in front of every mutating admin endpoint: the `x-api-key` header
/// must carry the configured secret, otherwise the request is answered with
/// 401 and never reaches its handler.
pub struct AdminGuard;

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminGuardService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !requires_key(req.path(), req.method()) {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let authorized = match req.app_data::<web::Data<AppState>>() {
                Some(state) => extract_api_key(&req)
                    .is_some_and(|key| state.admin_key_matches(key)),
                None => {
                    tracing::error!("AppState missing in admin guard");
                    false
                }
            };

            if !authorized {
                tracing::warn!(
                    method = %req.method(),
                    path = %req.path(),
                    "Rejected admin request with missing or wrong API key"
                );
                let response = HttpResponse::Unauthorized().json(serde_json::json!({
                    "error": "Unauthorized"
                }));
                return Ok(req.into_response(response).map_into_right_body());
            }

            req.extensions_mut().insert(AdminAccess);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

const ADMIN_COLLECTIONS: [&str; 2] = ["/api/projects", "/api/skills"];

/// Reads are public and so is the contact form. Writes to the project and
/// skill collections need the key; any other path is left to the router.
fn requires_key(path: &str, method: &Method) -> bool {
    if matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS) {
        return false;
    }

    ADMIN_COLLECTIONS.iter().any(|collection| {
        path.strip_prefix(collection).is_some_and(|rest| {
            rest.is_empty()
                || rest.strip_prefix('/').is_some_and(|id| !id.is_empty() && !id.contains('/'))
        })
    })
}

fn extract_api_key(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|header| header.to_str().ok())
}
