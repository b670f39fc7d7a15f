//! Admin gating middleware
//!
//! Route-fare mutation and full booking visibility sit behind an HTTP
//! Basic credential check. The middleware only consumes the gate's
//! boolean verdict; credential storage and hashing live in `auth`.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::common::ApiResponse;
use crate::auth::CredentialGate;

pub async fn admin_auth(
    State(gate): State<Arc<dyn CredentialGate>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic)
        .map(|(username, password)| gate.verify(&username, &password))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<()>::error("Invalid credentials")),
        )
            .into_response();
    }

    next.run(request).await
}

/// Decode an `Authorization: Basic <base64(user:pass)>` header value.
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_header() {
        let header = format!("Basic {}", BASE64.encode("admin:admin123"));
        assert_eq!(
            parse_basic(&header),
            Some(("admin".to_string(), "admin123".to_string()))
        );
    }

    #[test]
    fn password_may_contain_colons() {
        let header = format!("Basic {}", BASE64.encode("admin:a:b:c"));
        assert_eq!(
            parse_basic(&header),
            Some(("admin".to_string(), "a:b:c".to_string()))
        );
    }

    #[test]
    fn rejects_non_basic_and_bad_encoding() {
        assert_eq!(parse_basic("Bearer token"), None);
        assert_eq!(parse_basic("Basic ???"), None);
        assert_eq!(parse_basic("Basic "), None);
    }
}
