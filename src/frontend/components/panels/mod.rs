//! Feature panels shown inside the main page.

pub mod outreach;
pub mod results;
pub mod search;
pub mod upload;

pub use outreach::OutreachTemplates;
pub use results::CandidateResults;
pub use search::SearchInterface;
pub use upload::ResumeUpload;
