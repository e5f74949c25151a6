use thiserror::Error;

/// Rejected registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("entry {index} has an empty appName")]
    EmptyAppName { index: usize },

    #[error("app '{app_name}' has an empty apiServerURL")]
    EmptyApiServerUrl { app_name: String },
}
