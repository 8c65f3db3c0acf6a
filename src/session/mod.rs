//! Operator session gate.
//!
//! A single shared flag answers "is an operator logged in?". The content store never
//! consults it; only the admin routes do. Credential checks use a constant-time
//! comparison to mitigate timing attacks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// Operator login configured for the site.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login state for the one operator session.
#[derive(Debug)]
pub struct AdminSession {
    credentials: Credentials,
    authenticated: AtomicBool,
}

impl AdminSession {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            authenticated: AtomicBool::new(false),
        }
    }

    /// Returns whether the credentials matched. A failed attempt leaves an existing
    /// login untouched.
    pub fn login(&self, username: &str, password: &str) -> bool {
        // Both comparisons always run.
        let user_ok = constant_time_compare(username, &self.credentials.username);
        let pass_ok = constant_time_compare(password, &self.credentials.password);

        if user_ok & pass_ok {
            self.authenticated.store(true, Ordering::SeqCst);
            tracing::info!("Operator logged in");
            true
        } else {
            tracing::warn!("Rejected operator login");
            false
        }
    }

    pub fn logout(&self) {
        if self.authenticated.swap(false, Ordering::SeqCst) {
            tracing::info!("Operator logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

/// Admin gate layer function that takes the shared session as a parameter.
pub async fn admin_gate_layer(
    session: Arc<AdminSession>,
    request: Request,
    next: Next,
) -> Response {
    if session.is_authenticated() {
        next.run(request).await
    } else {
        unauthorized_response("Operator login required")
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
        revision_id: 0,
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
