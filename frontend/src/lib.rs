pub mod app;
pub mod config;
pub mod pages;
pub mod services;
pub mod styles;

pub use app::App;
