// Backend endpoints consumed by the play-session gate
pub const CHECK_USER_ENDPOINT: &str = "/check_user";
pub const ADD_USER_ENDPOINT: &str = "/add_user";

// Wheel geometry: six equal segments, with the label buckets shifted
// 20 degrees off the pointer so a segment boundary never sits under it
pub const WHEEL_SEGMENTS: u32 = 6;
pub const SEGMENT_ARC_DEGREES: u32 = 60;
pub const SEGMENT_OFFSET_DEGREES: u32 = 20;

// Every spin advances the wheel by at least this many full rotations
// on top of its current resting angle
pub const MIN_FULL_ROTATIONS: u32 = 10;

// Duration of the spin animation; the outcome is resolved when it ends
pub const SPIN_DURATION_MS: u32 = 12_500;

// User-facing status messages
pub const WIN_MESSAGE: &str = "You won!";
pub const LOSS_MESSAGE: &str = "Game Over\nNo Prizes for You";
pub const RETRY_MESSAGE: &str = "You Got Lucky\nTry Again";
pub const ALREADY_PLAYED_MESSAGE: &str = "Game Over";

// localStorage key for the persisted per-device session identifier
pub const UID_STORAGE_KEY: &str = "wheel_play_uid";
