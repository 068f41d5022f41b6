//! Per-session lookups of bucket, home, jail and backing filesystem
//!
//! The transport layer supplies one implementation of each capability
//! trait. [`Resolvers::resolve_context`] calls all four and produces the
//! immutable [`SessionContext`] that path translation works from.
//! Ready-made implementations driven by configuration live in
//! [`configured`].

pub mod configured;

use std::fmt;
use std::sync::Arc;

use crate::config::JailConfig;
use crate::error::JailError;
use crate::session::SessionHandle;

/// The filesystem a session's storage operations run against.
///
/// Path resolution only requires that one exists; anything beyond a
/// name is the transport layer's business.
pub trait FilesystemHandle: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Human readable summary for diagnostics
    fn describe(&self) -> String {
        self.name().to_string()
    }
}

/// Looks up the bucket a session stores into
pub trait BucketResolver: Send + Sync {
    fn bucket(&self, session: &SessionHandle) -> Option<String>;
}

/// Looks up a session's home directory, relative to its bucket
pub trait HomeResolver: Send + Sync {
    fn home_path(&self, session: &SessionHandle) -> Option<String>;
}

/// Looks up the path prefix a session may never leave
pub trait JailResolver: Send + Sync {
    fn jail(&self, session: &SessionHandle) -> Option<String>;
}

/// Finds the filesystem bound to an authenticated user
pub trait FilesystemResolver: Send + Sync {
    fn resolve(&self, username: &str) -> Option<Arc<dyn FilesystemHandle>>;
}

/// Everything path translation needs to know about a session.
///
/// Resolved once and never modified afterwards.
#[derive(Debug, Clone)]
pub struct SessionContext {
    bucket: String,
    home: String,
    jail: String,
    filesystem: Arc<dyn FilesystemHandle>,
}

impl SessionContext {
    pub fn new(
        bucket: impl Into<String>,
        home: impl Into<String>,
        jail: impl Into<String>,
        filesystem: Arc<dyn FilesystemHandle>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            home: home.into(),
            jail: jail.into(),
            filesystem,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn jail(&self) -> &str {
        &self.jail
    }

    pub fn filesystem(&self) -> &Arc<dyn FilesystemHandle> {
        &self.filesystem
    }
}

/// The four lookup capabilities a session is resolved with.
#[derive(Clone)]
pub struct Resolvers {
    bucket: Arc<dyn BucketResolver>,
    home: Arc<dyn HomeResolver>,
    jail: Arc<dyn JailResolver>,
    filesystem: Arc<dyn FilesystemResolver>,
}

impl fmt::Debug for Resolvers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolvers").finish_non_exhaustive()
    }
}

impl Resolvers {
    pub fn new(
        bucket: Arc<dyn BucketResolver>,
        home: Arc<dyn HomeResolver>,
        jail: Arc<dyn JailResolver>,
        filesystem: Arc<dyn FilesystemResolver>,
    ) -> Self {
        Self {
            bucket,
            home,
            jail,
            filesystem,
        }
    }

    /// Build resolvers from a loaded configuration file
    pub fn from_config(config: &JailConfig) -> Self {
        Self::new(
            Arc::new(configured::FixedBucket::new(&config.bucket)),
            Arc::new(configured::TemplateHome::new(&config.home)),
            Arc::new(configured::TemplateJail::new(&config.jail)),
            Arc::new(configured::FilesystemTable::from_config(&config.filesystems)),
        )
    }

    /// Run every lookup for `session`.
    ///
    /// A missing filesystem is fatal. Missing bucket, home or jail values
    /// default to the empty string. No caching happens here.
    pub fn resolve_context(&self, session: &SessionHandle) -> Result<SessionContext, JailError> {
        let username = session.username();
        let Some(filesystem) = self.filesystem.resolve(username) else {
            tracing::error!("no filesystem bound to user {}", username);
            return Err(JailError::FilesystemUnavailable {
                username: username.to_string(),
            });
        };

        let bucket = self.bucket.bucket(session).unwrap_or_default();
        let home = self.home.home_path(session).unwrap_or_default();
        let jail = self.jail.jail(session).unwrap_or_default();
        tracing::debug!(
            "resolved session {}: bucket={:?} home={:?} jail={:?} filesystem={}",
            session,
            bucket,
            home,
            jail,
            filesystem.name()
        );

        Ok(SessionContext {
            bucket,
            home,
            jail,
            filesystem,
        })
    }
}
