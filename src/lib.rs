pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::store::Db;
pub use utils::error::{ApiError, Result};
