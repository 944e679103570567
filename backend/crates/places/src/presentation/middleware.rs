//! Bearer Token Middleware

use axum::body::Body;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use kernel::id::UserId;
use platform::token::TokenService;

use crate::error::PlaceError;

/// Identity of the authenticated caller, inserted into request extensions
/// by [`require_auth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: UserId,
    pub email: String,
}

/// Middleware that requires a valid bearer token
///
/// Applied to mutation routes only; reads stay public.
pub async fn require_auth(
    tokens: Arc<TokenService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match bearer_token(&req) {
        Some(token) => token,
        None => {
            tracing::debug!("Missing bearer token");
            return Err(PlaceError::Unauthenticated.into_response());
        }
    };

    let claims = match tokens.verify(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected bearer token");
            return Err(PlaceError::Unauthenticated.into_response());
        }
    };

    req.extensions_mut().insert(AuthContext {
        user_id: UserId::from_uuid(claims.sub),
        email: claims.email,
    });

    Ok(next.run(req).await)
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
