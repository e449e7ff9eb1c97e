pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod provider;
pub mod services;
pub mod spec;
