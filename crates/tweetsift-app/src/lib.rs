pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod sink;
pub mod sources;
pub mod text;
