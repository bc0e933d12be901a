pub mod api;
pub mod device;
