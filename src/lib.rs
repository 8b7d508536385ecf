pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use config::{Config, OutputFormat};
pub use controller::RenderController;
pub use error::{AppError, AppResult};
