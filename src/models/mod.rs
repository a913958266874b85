pub mod config;

pub use config::{BenchConfig, Overrides, CONFIG_ENV};
