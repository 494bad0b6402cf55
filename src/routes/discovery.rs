use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{CandidatesQuery, SwipeRequest, SwipeResponse};
use crate::state::AppState;

/// Configure candidate, swipe and match routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/candidates", web::get().to(list_candidates))
        .route("/swipe", web::post().to(swipe))
        .route("/matches", web::get().to(list_matches));
}

/// Ranked candidates for the caller
///
/// GET /candidates?limit=10
async fn list_candidates(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<CandidatesQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    // Fail early for tokens whose user is unknown to this process
    state.identity.get_profile(user.user_id).await?;

    let limit = state.ranker.effective_limit(query.limit);
    let directory = state.identity.directory().await;
    let total = directory.len().saturating_sub(1);

    let cards = state.ranker.rank(user.user_id, directory, limit);

    tracing::info!(
        "Returning {} candidates for user {} (from {} profiles)",
        cards.len(),
        user.user_id,
        total
    );

    Ok(HttpResponse::Ok().json(cards))
}

/// Like or pass on another user
///
/// POST /swipe
///
/// Request body:
/// ```json
/// {
///   "target_id": 2,
///   "action": "like|pass"
/// }
/// ```
async fn swipe(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    req: web::Json<SwipeRequest>,
) -> Result<HttpResponse, ApiError> {
    if req.target_id == user.user_id {
        return Err(ApiError::ValidationError("Cannot swipe on yourself".to_string()));
    }

    if !state.identity.exists(req.target_id).await {
        return Err(ApiError::NotFound(format!("user {}", req.target_id)));
    }

    let outcome = state.swipes.swipe(user.user_id, req.target_id, req.action).await;

    Ok(HttpResponse::Ok().json(SwipeResponse::from(outcome)))
}

/// GET /matches
async fn list_matches(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let matches = state.swipes.list_matches(user.user_id).await;
    tracing::debug!("User {} has {} matches", user.user_id, matches.len());

    Ok(HttpResponse::Ok().json(matches))
}
