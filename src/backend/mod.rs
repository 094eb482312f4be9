//! Backend module: persistence, configuration and routing.

pub mod services;
pub mod utils;
