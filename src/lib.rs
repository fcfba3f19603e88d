pub mod config;
pub mod error;
pub mod generator;
pub mod icon;
pub mod logger;

pub use error::IconError;
pub use generator::{generate, generate_default, generate_with, report};
