//! Frontend services for session state and view selection.

pub mod context;
pub mod controller;
