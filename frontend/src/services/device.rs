use sha2::{Digest, Sha256};
use uuid::Uuid;
use web_sys::window;

use shared::constants::UID_STORAGE_KEY;
use shared::device::DeviceIdentity;

/// Builds the identifier pair the backend keys plays on. Returns `None`
/// only when there is no usable `window`, which callers treat the same as
/// any other identity failure: log it and fail open.
pub fn device_identity() -> Option<DeviceIdentity> {
    let fingerprint = derive_fingerprint()?;
    let uid = stored_uid().unwrap_or_else(mint_uid);
    Some(DeviceIdentity { fingerprint, uid })
}

/// Best-effort device fingerprint: a digest over stable-ish browser traits.
/// Collision-prone by design; the gate is promotional, not anti-fraud.
fn derive_fingerprint() -> Option<String> {
    let window = window()?;
    let navigator = window.navigator();

    let mut traits: Vec<String> = Vec::new();
    traits.push(navigator.user_agent().unwrap_or_default());
    traits.push(navigator.language().unwrap_or_default());
    traits.push(navigator.platform().unwrap_or_default());
    traits.push(navigator.hardware_concurrency().to_string());
    if let Ok(screen) = window.screen() {
        traits.push(format!(
            "{}x{}",
            screen.width().unwrap_or(0),
            screen.height().unwrap_or(0)
        ));
        traits.push(screen.color_depth().unwrap_or(0).to_string());
    }
    traits.push(js_sys::Date::new_0().get_timezone_offset().to_string());

    let digest = Sha256::digest(traits.join("|").as_bytes());
    // 32 hex chars, the shape of a FingerprintJS visitor id
    Some(hex::encode(&digest[..16]))
}

fn stored_uid() -> Option<String> {
    window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(UID_STORAGE_KEY)
        .ok()
        .flatten()
}

/// Mints a fresh session identifier and persists it, so the same pair is
/// presented on the next visit and the one-play check can actually match.
fn mint_uid() -> String {
    let uid = Uuid::new_v4().to_string();
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if let Err(err) = storage.set_item(UID_STORAGE_KEY, &uid) {
            log::warn!("could not persist session identifier: {err:?}");
        }
    }
    uid
}
