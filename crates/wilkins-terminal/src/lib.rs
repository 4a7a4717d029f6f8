pub mod commands;
pub mod config;
pub mod logging;
pub mod print;
pub mod screens;
pub mod session;
pub mod ticker;
