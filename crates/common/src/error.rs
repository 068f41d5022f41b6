//! Errors raised while preparing a session for path resolution.

/// Failures that stop a session from resolving any path.
///
/// Both variants are configuration level defects: retrying the same
/// request reproduces the same error, and neither one affects any
/// other session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JailError {
    /// No backing filesystem is bound to the authenticated user
    #[error("Error finding filesystem.")]
    FilesystemUnavailable { username: String },
    /// The configured home directory is not contained by the jail
    #[error("User directory is outside jailed path: {jail}: {home}")]
    JailMapping { jail: String, home: String },
}
