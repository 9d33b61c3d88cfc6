use crate::application::{error::ApplicationError, ApplicationResult};
use crate::domain::errors::DomainError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Persistence(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApplicationError) -> StatusCode {
        HttpError::from_error(err).into_response().status()
    }

    #[test]
    fn unauthorized_maps_to_401() {
        assert_eq!(
            status_of(ApplicationError::unauthorized("missing bearer token")),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn infrastructure_maps_to_500() {
        assert_eq!(
            status_of(ApplicationError::infrastructure("state missing")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn domain_errors_keep_their_statuses() {
        assert_eq!(
            status_of(DomainError::Validation("title cannot be empty".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Conflict("slug already exists".into()).into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::NotFound("post not found".into()).into()),
            StatusCode::NOT_FOUND
        );
    }
}
