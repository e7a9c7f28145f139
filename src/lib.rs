//! # sentcorr lib

use std::env;

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
pub mod sentiment;
pub mod utils;

pub fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();
}
