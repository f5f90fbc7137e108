pub mod config;
pub mod github;
pub mod page;
pub mod server;
