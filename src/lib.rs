pub mod analysis;
pub mod config;
pub mod error;
pub mod lambda;
pub mod logging;
pub mod server;

pub use error::{Error, Result};
