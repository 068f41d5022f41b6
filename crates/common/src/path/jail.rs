use crate::error::JailError;

use super::segments::Segments;

/// Check that `home` lies within `jail`.
///
/// An empty jail means no containment and always passes. Otherwise the
/// jail must equal the home or be a segment-wise prefix of it.
pub fn check_containment(home: &str, jail: &str) -> Result<(), JailError> {
    let jail_segments = Segments::parse(jail);
    if jail_segments.is_empty() || Segments::parse(home).starts_with(&jail_segments) {
        return Ok(());
    }

    tracing::warn!("home {:?} is outside jail {:?}", home, jail);
    Err(JailError::JailMapping {
        jail: jail.to_string(),
        home: home.to_string(),
    })
}

/// The containment boundary for a jailed session.
///
/// Clients see their home directory as a single visible root, named
/// after the last segment of home below the jail. When home and jail
/// are the same there is no visible root and the client sees "/".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jail {
    visible_root: Option<String>,
}

impl Jail {
    /// Build the jail for a session, failing if home escapes it.
    ///
    /// Returns `Ok(None)` when no jail is configured.
    pub fn new(home: &str, jail: &str) -> Result<Option<Self>, JailError> {
        check_containment(home, jail)?;

        let jail_segments = Segments::parse(jail);
        if jail_segments.is_empty() {
            return Ok(None);
        }

        let home_segments = Segments::parse(home);
        let visible_root = match home_segments.strip_prefix(jail_segments.parts()) {
            Some(below) if !below.is_empty() => home_segments.last().map(str::to_string),
            _ => None,
        };

        Ok(Some(Self { visible_root }))
    }

    pub fn visible_root(&self) -> Option<&str> {
        self.visible_root.as_deref()
    }
}
