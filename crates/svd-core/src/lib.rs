//! Core of the SVD social video downloader: link validation, platform
//! classification, and the fetch flow that lists downloadable formats.

pub mod config;
pub mod logging;

pub mod control;
pub mod download;
pub mod fetch;
pub mod link;
pub mod orchestrator;
pub mod result;
pub mod session;

pub use link::{classify_platform, validate};
