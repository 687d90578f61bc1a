// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Presentation layer
pub mod app;

pub use app::App;
