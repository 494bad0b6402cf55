use actix_web::{web, HttpResponse};
use crate::error::ApiError;
use crate::middleware::AuthenticatedUser;
use crate::models::{MessageReceipt, SendMessageRequest, UserId};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/messages")
            .route("", web::post().to(send_message))
            .route("/{peer_id}", web::get().to(get_history)),
    );
}

/// Send a message to a matched user
///
/// POST /messages
///
/// Request body:
/// ```json
/// {
///   "from_id": 1,
///   "to_id": 2,
///   "text": "string"
/// }
/// ```
async fn send_message(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    req: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let message = state
        .messages
        .send(user.user_id, req.from_id, req.to_id, req.text)
        .await?;

    Ok(HttpResponse::Ok().json(MessageReceipt {
        status: "sent".to_string(),
        message_id: message.id,
        timestamp: message.timestamp,
    }))
}

/// Conversation with a matched user, oldest first
///
/// GET /messages/{peer_id}
async fn get_history(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    peer_id: web::Path<UserId>,
) -> Result<HttpResponse, ApiError> {
    let history = state.messages.history(user.user_id, peer_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(history))
}
