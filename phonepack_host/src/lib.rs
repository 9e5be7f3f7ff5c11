pub mod cli;
pub mod config;
pub mod ops;
pub mod report;
