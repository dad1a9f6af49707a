pub mod assets;
pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
