// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Bearer token gating the admin surface. Stands in for the session
    /// layer the platform front-end owns.
    pub admin_token: Arc<str>,
}
