//! Registry of admin-tool applications and the API servers they target
//!
//! The built-in table lives in [`registry::BUILTIN_APPS`]; a TOML file can
//! replace it (see [`config::RegistryConfig`]).

pub mod config;
pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{AppDescriptor, AppRegistry};
