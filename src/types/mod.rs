pub mod application;
pub mod config;
pub mod history;
pub mod prediction;
