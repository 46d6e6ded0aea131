pub mod config;
pub mod feed;
pub mod item;
pub mod report;
pub mod scoring;
