mod error;
mod relay_app_config;
pub mod utils;

pub use error::*;
pub use relay_app_config::*;
