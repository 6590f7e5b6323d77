//! Media Object Gateway Library

pub mod cache;
pub mod config;
pub mod http;
pub mod observability;
pub mod security;
pub mod storage;

pub use config::GatewayConfig;
pub use http::HttpServer;
