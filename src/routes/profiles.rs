use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::Profile;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profiles/me")
            .route(web::get().to(get_my_profile))
            .route(web::put().to(replace_my_profile)),
    );
}

/// GET /profiles/me
async fn get_my_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let profile = state.identity.get_profile(user.user_id).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /profiles/me
///
/// The body is the complete profile; its `user_id` must be the caller's.
async fn replace_my_profile(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    profile: web::Json<Profile>,
) -> Result<HttpResponse, ApiError> {
    let profile = state
        .identity
        .replace_profile(user.user_id, profile.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
