//! Lookup implementations backed by static configuration.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{FilesystemConfig, FilesystemsConfig, USERNAME_PLACEHOLDER};
use crate::session::SessionHandle;

use super::{BucketResolver, FilesystemHandle, FilesystemResolver, HomeResolver, JailResolver};

/// Every session stores into the same bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBucket(String);

impl FixedBucket {
    pub fn new(bucket: impl Into<String>) -> Self {
        Self(bucket.into())
    }
}

impl BucketResolver for FixedBucket {
    fn bucket(&self, _session: &SessionHandle) -> Option<String> {
        (!self.0.is_empty()).then(|| self.0.clone())
    }
}

/// A path with `{username}` substituted per session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Render for a user; an empty template renders to nothing.
    pub fn render(&self, username: &str) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0.replace(USERNAME_PLACEHOLDER, username))
    }
}

/// Home directory rendered from a template, e.g. `users/{username}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateHome(PathTemplate);

impl TemplateHome {
    pub fn new(template: impl Into<String>) -> Self {
        Self(PathTemplate::new(template))
    }
}

impl HomeResolver for TemplateHome {
    fn home_path(&self, session: &SessionHandle) -> Option<String> {
        self.0.render(session.username())
    }
}

/// Jail rendered from a template, usually a fixed prefix like `users`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateJail(PathTemplate);

impl TemplateJail {
    pub fn new(template: impl Into<String>) -> Self {
        Self(PathTemplate::new(template))
    }
}

impl JailResolver for TemplateJail {
    fn jail(&self, session: &SessionHandle) -> Option<String> {
        self.0.render(session.username())
    }
}

/// A filesystem described by configuration.
///
/// Holds the backend description only; connecting to it is up to the
/// storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectStoreFilesystem {
    name: String,
    backend: FilesystemConfig,
}

impl ObjectStoreFilesystem {
    pub fn new(name: impl Into<String>, backend: FilesystemConfig) -> Self {
        Self {
            name: name.into(),
            backend,
        }
    }

    /// An in-memory filesystem, mostly useful for tests
    pub fn memory(name: impl Into<String>) -> Self {
        Self::new(name, FilesystemConfig::Memory)
    }

    pub fn backend(&self) -> &FilesystemConfig {
        &self.backend
    }
}

impl FilesystemHandle for ObjectStoreFilesystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.name, self.backend)
    }
}

/// Username to filesystem table, with an optional fallback.
#[derive(Debug, Clone, Default)]
pub struct FilesystemTable {
    users: HashMap<String, Arc<ObjectStoreFilesystem>>,
    default: Option<Arc<ObjectStoreFilesystem>>,
}

impl FilesystemTable {
    pub fn from_config(config: &FilesystemsConfig) -> Self {
        let users = config
            .users
            .iter()
            .map(|(username, backend)| {
                let filesystem = ObjectStoreFilesystem::new(username.as_str(), backend.clone());
                (username.clone(), Arc::new(filesystem))
            })
            .collect();
        let default = config
            .default
            .as_ref()
            .map(|backend| Arc::new(ObjectStoreFilesystem::new("default", backend.clone())));

        Self { users, default }
    }

    pub fn insert(&mut self, username: impl Into<String>, filesystem: ObjectStoreFilesystem) {
        self.users.insert(username.into(), Arc::new(filesystem));
    }

    pub fn set_default(&mut self, filesystem: ObjectStoreFilesystem) {
        self.default = Some(Arc::new(filesystem));
    }
}

impl FilesystemResolver for FilesystemTable {
    fn resolve(&self, username: &str) -> Option<Arc<dyn FilesystemHandle>> {
        let filesystem = self.users.get(username).or(self.default.as_ref())?;
        Some(filesystem.clone() as Arc<dyn FilesystemHandle>)
    }
}
