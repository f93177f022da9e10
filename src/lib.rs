pub mod activity;
pub mod config;
pub mod error;
pub mod output;
pub mod readings;
pub mod scoring;
pub mod source;

pub use activity::{Activity, DiscGolf};
pub use error::{ScoreError, SourceError};
