use gloo_net::http::Request;

use shared::api::{AddUserRequest, CheckUserRequest, CheckUserResponse};
use shared::constants::{ADD_USER_ENDPOINT, CHECK_USER_ENDPOINT};
use shared::device::DeviceIdentity;
use shared::wheel::Decision;

use crate::config::get_api_base_url;

/// Asks the backend whether this device has already completed a play.
pub async fn check_user(identity: &DeviceIdentity) -> Result<CheckUserResponse, String> {
    let response = Request::post(&format!("{}{}", get_api_base_url(), CHECK_USER_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&CheckUserRequest::new(identity))
        .map_err(|e| format!("Failed to build request: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    response
        .json::<CheckUserResponse>()
        .await
        .map_err(|e| format!("Error parsing response: {e:?}"))
}

/// Records this device together with its final decision. Best effort: the
/// caller logs a failure and moves on, there is no retry.
pub async fn record_play(identity: &DeviceIdentity, decision: Decision) -> Result<(), String> {
    let response = Request::post(&format!("{}{}", get_api_base_url(), ADD_USER_ENDPOINT))
        .header("Content-Type", "application/json")
        .json(&AddUserRequest::new(identity, decision))
        .map_err(|e| format!("Failed to build request: {e:?}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e:?}"))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    // The body carries nothing the client acts on; keep it for diagnostics
    match response.json::<serde_json::Value>().await {
        Ok(body) => log::debug!("add_user response: {body}"),
        Err(err) => log::debug!("add_user response was not JSON: {err:?}"),
    }

    Ok(())
}
