// Library interface for social-swarm (for testing purposes)
pub mod app;
pub mod config;

#[macro_use]
pub mod logging;

pub mod query;
pub mod seed;
pub mod store;
pub mod ui;
