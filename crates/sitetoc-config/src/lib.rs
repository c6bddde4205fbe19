pub mod config;
pub mod error;
pub mod nav;
pub mod theme;

pub use config::Config;
pub use error::ConfigError;
