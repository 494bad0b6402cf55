use std::collections::HashMap;
use std::future::{ready, Ready};
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use crate::error::ApiError;
use crate::models::UserId;
use crate::state::AppState;

/// Represents an authenticated user resolved from the access token.
///
/// Add `user: AuthenticatedUser` to a handler and actix will:
/// 1. Read the token from `Authorization: Bearer <token>`, or from the
///    `token` query parameter when the header is absent
/// 2. Verify signature and expiry with the shared [`TokenService`](crate::services::TokenService)
/// 3. Reject the request with 401 if either step fails
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, ApiError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| ApiError::Internal("application state is not configured".to_string()))?;

    let token = extract_token(req)?;

    let user_id = state.tokens.verify(&token).map_err(|e| {
        tracing::warn!("Rejected token on {}: {}", req.path(), e);
        ApiError::from(e)
    })?;

    Ok(AuthenticatedUser { user_id })
}

fn extract_token(req: &HttpRequest) -> Result<String, ApiError> {
    if let Some(value) = req.headers().get(header::AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

        return value
            .strip_prefix("Bearer ")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()));
    }

    web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.get("token").cloned())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Missing access token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_header() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();

        assert_eq!(extract_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_query_parameter() {
        let req = TestRequest::with_uri("/profiles/me?token=abc").to_http_request();

        assert_eq!(extract_token(&req).unwrap(), "abc");
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic Zm9vOmJhcg=="))
            .to_http_request();

        assert!(matches!(extract_token(&req), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_missing_token_rejected() {
        let req = TestRequest::default().to_http_request();

        assert!(matches!(extract_token(&req), Err(ApiError::Unauthorized(_))));
    }
}
