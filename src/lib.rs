pub mod config;
pub mod datasources;
pub mod error;
pub mod export;
pub mod logic;
pub mod models;
pub mod pipeline;
