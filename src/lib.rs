pub mod analyzers;
pub mod config;
pub mod error;
pub mod loader;
pub mod network;
pub mod output;
pub mod record;

pub use error::{NetworkError, Result};
