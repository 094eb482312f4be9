//! Backend services.

pub mod candidates;
pub mod session;

pub use candidates::CandidateRecord;
pub use session::{SessionStore, UserSession};
