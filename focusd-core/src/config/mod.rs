//! Configuration Management for focusd.
//!
//! This module defines how the daemon's ambient configuration is structured,
//! loaded, and validated. The configuration is ambient only: nothing on the
//! D-Bus method contract depends on it.
//!
//! ## Key Components
//!
//! - [`types`]: The configuration struct definitions, [`CoreConfig`],
//!   [`LoggingConfig`], and [`RegistryConfig`].
//! - [`defaults`]: Default values used when the configuration file is missing
//!   or incomplete.
//! - [`loader`]: The [`ConfigLoader`], which locates `config.toml` in the
//!   application's XDG configuration directory, parses it, and validates the
//!   result. A missing file yields the default configuration.

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, RegistryConfig};
