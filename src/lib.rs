pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

pub use catalog::Catalog;
pub use error::{AppError, AppResult};
