use crate::services::ConnectionStatus;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

/// Reject every request while the store driver's last known state is not
/// connected. One flag read per request; no retry, no probe.
pub async fn readiness_gate(
    State(status): State<ConnectionStatus>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !status.is_connected() {
        return Err(AppError::ServiceUnavailable);
    }
    Ok(next.run(req).await)
}
