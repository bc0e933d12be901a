use serde::{Serialize, Deserialize};

use crate::device::DeviceIdentity;
use crate::wheel::Decision;

// === API Types ===

/// Body of `POST /check_user`: "has this device already played?"
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckUserRequest {
    pub fingerprint: String,
    pub uid: String,
}

impl CheckUserRequest {
    pub fn new(identity: &DeviceIdentity) -> Self {
        Self {
            fingerprint: identity.fingerprint.clone(),
            uid: identity.uid.clone(),
        }
    }
}

/// Response of `POST /check_user`. The backend may send more fields; only
/// `exists` matters to the client.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CheckUserResponse {
    pub exists: bool,
}

/// Body of `POST /add_user`: records the device together with its final
/// decision. The response body is ignored beyond logging.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AddUserRequest {
    pub fingerprint: String,
    pub uid: String,
    pub status: Decision,
}

impl AddUserRequest {
    pub fn new(identity: &DeviceIdentity, status: Decision) -> Self {
        Self {
            fingerprint: identity.fingerprint.clone(),
            uid: identity.uid.clone(),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let identity = DeviceIdentity {
            fingerprint: "abc123".into(),
            uid: "11111111-2222-3333-4444-555555555555".into(),
        };
        let body = AddUserRequest::new(&identity, Decision::Win);
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""status":"win""#));
        assert!(json.contains(r#""fingerprint":"abc123""#));

        let body = AddUserRequest::new(&identity, Decision::Loss);
        assert!(serde_json::to_string(&body).unwrap().contains(r#""status":"loss""#));
    }

    #[test]
    fn test_check_response_ignores_extra_fields() {
        let parsed: CheckUserResponse =
            serde_json::from_str(r#"{"exists":true,"message":"found"}"#).unwrap();
        assert!(parsed.exists);
    }
}
