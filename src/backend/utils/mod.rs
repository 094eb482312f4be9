//! Backend utilities: paths, config, routing and embedded resources.

pub mod config;
pub mod css;
pub mod paths;
pub mod route;
