//! Registry of admin-tool applications
//!
//! Each entry pairs an application name with the `host:port` of the API
//! server that backs it. The registry is built once and never mutated; pass
//! it by reference to whatever needs to pick a backend.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Applications known out of the box, in display order.
///
/// When adding or removing an application, update ONLY this array.
pub const BUILTIN_APPS: &[(&str, &str)] = &[
    ("bonda", "localhost:8000"),
    ("vrhorror", "localhost:8000"),
];

/// A single application and the API server it talks to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDescriptor {
    #[serde(rename = "appName")]
    pub app_name: String,
    /// `host:port`, no scheme
    #[serde(rename = "apiServerURL")]
    pub api_server_url: String,
}

impl AppDescriptor {
    pub fn new(app_name: impl Into<String>, api_server_url: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            api_server_url: api_server_url.into(),
        }
    }
}

/// Ordered, immutable list of [`AppDescriptor`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRegistry {
    entries: Vec<AppDescriptor>,
}

impl AppRegistry {
    /// Validate and wrap `entries`, keeping their order.
    ///
    /// Both fields of every entry must be non-empty. Duplicate names are
    /// accepted; see [`AppRegistry::duplicate_names`].
    pub fn new(entries: Vec<AppDescriptor>) -> Result<Self, RegistryError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.app_name.is_empty() {
                return Err(RegistryError::EmptyAppName { index });
            }
            if entry.api_server_url.is_empty() {
                return Err(RegistryError::EmptyApiServerUrl {
                    app_name: entry.app_name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The compiled-in table from [`BUILTIN_APPS`].
    pub fn builtin() -> Self {
        Self {
            entries: builtin_descriptors(),
        }
    }

    pub fn entries(&self) -> &[AppDescriptor] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AppDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.app_name.as_str())
    }

    /// First entry named `app_name`, if any.
    pub fn get(&self, app_name: &str) -> Option<&AppDescriptor> {
        self.entries.iter().find(|e| e.app_name == app_name)
    }

    /// API server of the first entry named `app_name`, or `None` if there
    /// is no such application.
    pub fn lookup(&self, app_name: &str) -> Option<&str> {
        self.get(app_name).map(|e| e.api_server_url.as_str())
    }

    /// Names that appear more than once, in order of their first repeat.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, entry) in self.entries.iter().enumerate() {
            let name = entry.app_name.as_str();
            if dups.contains(&name) {
                continue;
            }
            if self.entries[..i].iter().any(|e| e.app_name == name) {
                dups.push(name);
            }
        }
        dups
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a AppRegistry {
    type Item = &'a AppDescriptor;
    type IntoIter = std::slice::Iter<'a, AppDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub(crate) fn builtin_descriptors() -> Vec<AppDescriptor> {
    BUILTIN_APPS
        .iter()
        .map(|(name, url)| AppDescriptor::new(*name, *url))
        .collect()
}
