pub mod config;
pub mod error;
pub mod feed;
pub mod lab;
pub mod navigation;
pub mod telemetry;
