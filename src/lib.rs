//! Scores water quality sample sheets into a 0-100 index and star rating.

pub mod config;
pub mod output;
pub mod samples;
pub mod scoring;
