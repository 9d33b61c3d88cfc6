// src/presentation/http/extractors.rs
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{authorization::Bearer, Authorization, HeaderMapExt};

use crate::application::error::ApplicationError;

use super::{error::HttpError, state::HttpState};

/// Proof that the request carried the admin bearer token. Required on every
/// mutating route.
#[derive(Debug, Clone)]
pub struct Admin;

/// Whether the request carried the admin bearer token. A wrong token is
/// rejected rather than downgraded to the anonymous view.
#[derive(Debug, Clone)]
pub struct MaybeAdmin(pub bool);

fn state_of(parts: &Parts) -> Result<HttpState, HttpError> {
    parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
    })
}

fn bearer_of(parts: &Parts) -> Option<String> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_owned())
}

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_of(parts)?;
        let token = bearer_of(parts).ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("missing bearer token"))
        })?;

        if token.as_str() == state.admin_token.as_ref() {
            Ok(Self)
        } else {
            Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )))
        }
    }
}

impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let state = state_of(parts)?;
        match bearer_of(parts) {
            Some(token) if token.as_str() == state.admin_token.as_ref() => Ok(Self(true)),
            Some(_) => Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            ))),
            None => Ok(Self(false)),
        }
    }
}
