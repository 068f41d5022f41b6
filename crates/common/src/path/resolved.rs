use std::fmt;

/// Join segments into a rooted path.
///
/// A path naming the session root keeps a trailing separator so the
/// storage layer treats it as a directory; any other path has none.
fn render<'a>(parts: impl IntoIterator<Item = &'a str>, root: bool) -> String {
    let mut path = String::new();
    for part in parts {
        path.push('/');
        path.push_str(part);
    }
    if root || path.is_empty() {
        path.push('/');
    }
    path
}

/// A fully bucket-qualified path, `/bucket/...`, used for storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhysicalPath {
    path: String,
    // byte offset of the bucket-relative key within `path`
    key_start: usize,
}

impl PhysicalPath {
    pub(crate) fn new<'a>(
        bucket: &'a str,
        below: impl IntoIterator<Item = &'a str>,
        root: bool,
    ) -> Self {
        let bucket = (!bucket.is_empty()).then_some(bucket);
        let path = render(bucket.into_iter().chain(below), root);
        let key_start = bucket.map_or(1, |b| b.len() + 2).min(path.len());

        Self { path, key_start }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The object key relative to the bucket, without a leading separator.
    pub fn key(&self) -> &str {
        &self.path[self.key_start..]
    }

    /// Whether this path names the session root rather than an entry.
    pub fn is_root(&self) -> bool {
        self.path.ends_with('/')
    }

    pub fn into_string(self) -> String {
        self.path
    }
}

impl AsRef<str> for PhysicalPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for PhysicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// The client-visible form of a path.
///
/// Identical to the physical path for an unjailed session. For a jailed
/// session the bucket and jail are stripped so the visible root appears
/// directly below "/".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayPath(String);

impl DisplayPath {
    pub(crate) fn new<'a>(parts: impl IntoIterator<Item = &'a str>, root: bool) -> Self {
        Self(render(parts, root))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.ends_with('/')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<PhysicalPath> for DisplayPath {
    fn from(path: PhysicalPath) -> Self {
        Self(path.path)
    }
}

impl AsRef<str> for DisplayPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
