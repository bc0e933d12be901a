use serde::{Serialize, Deserialize};

/// The identifier pair the backend keys plays on: a best-effort stable
/// device fingerprint plus a per-device session identifier. Minted by the
/// frontend, sent to the backend, never stored here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub fingerprint: String,
    pub uid: String,
}
