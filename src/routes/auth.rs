use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::models::{SigninRequest, SignupRequest, TokenResponse, UserId};
use crate::state::AppState;

/// Configure signup and signin routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(signup))
            .route("/signin", web::post().to(signin)),
    );
}

/// Create an account
///
/// POST /auth/signup
///
/// Request body:
/// ```json
/// {
///   "handle": "+15550100",
///   "secret": "string",
///   "display_name": "string"
/// }
/// ```
async fn signup(
    state: web::Data<AppState>,
    req: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user_id = state
        .identity
        .register(&req.handle, &req.secret, &req.display_name)
        .await?;

    Ok(HttpResponse::Ok().json(issue_token(&state, user_id)?))
}

/// Sign in to an existing account
///
/// POST /auth/signin
async fn signin(
    state: web::Data<AppState>,
    req: web::Json<SigninRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let user_id = state.identity.authenticate(&req.handle, &req.secret).await?;
    tracing::info!("User {} signed in", user_id);

    Ok(HttpResponse::Ok().json(issue_token(&state, user_id)?))
}

fn issue_token(state: &AppState, user_id: UserId) -> Result<TokenResponse, ApiError> {
    let token = state.tokens.issue(user_id).map_err(|e| {
        tracing::error!("Failed to issue token for user {}: {}", user_id, e);
        ApiError::Internal("Token generation failed".to_string())
    })?;

    Ok(TokenResponse::bearer(token, user_id))
}
