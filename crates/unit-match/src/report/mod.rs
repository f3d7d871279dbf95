mod outreach;
mod summary;
pub mod views;

pub use outreach::{outreach_message, DEFAULT_OUTREACH_LIMIT};
pub use summary::{project_statistics, summary_line, ProjectStats, NO_MATCHES_MESSAGE};
