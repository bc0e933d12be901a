pub mod api;
pub mod constants;
pub mod device;
pub mod session;
pub mod wheel;
