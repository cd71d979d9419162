//! faareg Core - Foundation crate for the FAA registration lookup tools.
//!
//! This crate provides the shared configuration, error types, and the
//! tail number newtype that the fetcher and CLI crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Shared newtypes (`TailNumber`)
//!
//! # Example
//!
//! ```rust
//! use faareg_core::{AppConfig, TailNumber};
//!
//! let config = AppConfig::default();
//! assert!(config.registry.base_url.starts_with("https://registry.faa.gov/"));
//!
//! let tail = TailNumber::new("265FT");
//! assert_eq!(tail.registration(), "N265FT");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, HttpConfig, RegistryConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, ConfigResult};
pub use types::TailNumber;
