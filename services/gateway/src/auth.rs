use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Bearer token forwarded to the upstream for this request.
///
/// A caller-supplied `Authorization: Bearer <token>` wins, so tokens can be
/// rotated without restarting the gateway. Otherwise the configured token is
/// used, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamAuth {
    token: Option<String>,
}

impl UpstreamAuth {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl FromRequestParts<AppState> for UpstreamAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(UpstreamAuth {
                token: state.credentials.token().map(str::to_string),
            });
        };

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid header string".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Unauthorized("Expected a Bearer token".into()))?;

        Ok(UpstreamAuth {
            token: Some(token.to_string()),
        })
    }
}
