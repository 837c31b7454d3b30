use contracts::shared::envelope::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, RefreshRequest};

use crate::shared::gateway::{self, expect_data, unwrap_envelope, ApiError};

/// Exchange admin credentials for a bearer token.
pub async fn admin_login(username: String, password: String) -> Result<String, ApiError> {
    let request = LoginRequest { username, password };
    let env: ApiEnvelope<LoginResponse> =
        gateway::post_json("/api/auth/admin/login", &request).await?;
    Ok(expect_data(env)?.token)
}

/// Revoke the current token server-side. A failure here is not fatal; the
/// client clears its persisted token regardless.
pub async fn logout() -> Result<(), ApiError> {
    let env: ApiEnvelope<serde_json::Value> =
        gateway::post_json("/api/auth/logout", &serde_json::json!({})).await?;
    unwrap_envelope(env)?;
    Ok(())
}

/// Trade an expired token for a fresh one.
pub async fn refresh(token: String) -> Result<String, ApiError> {
    let request = RefreshRequest { token };
    let env: ApiEnvelope<LoginResponse> = gateway::post_json("/api/auth/refresh", &request).await?;
    Ok(expect_data(env)?.token)
}
