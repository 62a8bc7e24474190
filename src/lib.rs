pub mod config;
pub mod forum;
pub mod logging;
