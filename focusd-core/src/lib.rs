//! # Focusd Core Library (`focusd-core`)
//!
//! `focusd-core` is the foundational library for the focusd project. It
//! provides the infrastructure the higher layers build on:
//!
//! - **Error Handling**: A unified error system through the [`CoreError`] enum
//!   and its associated specific error types [`ConfigError`] and
//!   [`LoggingError`].
//! - **Core Data Types**: The [`DesktopEntryId`] application identifier with
//!   its `.desktop` normalization rule, and the [`EventTimestamp`] used for
//!   focus-stealing-prevention validation.
//! - **Configuration Management**: TOML-based configuration loading with
//!   default fallbacks and validation, through [`ConfigLoader`] and
//!   [`CoreConfig`].
//! - **Logging**: A logging framework built on top of the `tracing` crate,
//!   configurable for console and file output in text or JSON format.
//!
//! Key components are re-exported at the crate root for ease of use.
//!
//! ```rust,ignore
//! use focusd_core::config::ConfigLoader;
//! use focusd_core::error::CoreError;
//! use focusd_core::logging::init_logging;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging)?;
//!     tracing::info!("focusd core initialized.");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, RegistryConfig};
pub use error::{ConfigError, CoreError, LoggingError};
pub use types::{DesktopEntryId, EventTimestamp, DESKTOP_ENTRY_SUFFIX};
