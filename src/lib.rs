pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod furniture;
pub mod handlers;
pub mod server;
pub mod store;
