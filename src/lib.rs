pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod lookup;
pub mod messages;
pub mod paths;
pub mod resolver;
pub mod server;
