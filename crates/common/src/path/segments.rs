/// A "/" separated path broken into its meaningful segments.
///
/// Parsing is total: every string yields a value. "." and empty
/// segments (from repeated or trailing separators) are dropped, while
/// ".." is kept verbatim. Upward traversal is never collapsed here;
/// resolving it is left to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    absolute: bool,
    parts: Vec<String>,
}

impl Segments {
    pub fn parse(path: &str) -> Self {
        let parts = path
            .split('/')
            .filter(|part| !part.is_empty() && *part != ".")
            .map(str::to_string)
            .collect();

        Self {
            absolute: path.starts_with('/'),
            parts,
        }
    }

    /// Whether the source string started with a separator
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn first(&self) -> Option<&str> {
        self.parts.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.parts.last().map(String::as_str)
    }

    /// Return true if `prefix` names this path or one of its parents.
    ///
    /// Comparison happens segment by segment, so `users` is a prefix of
    /// `users/bob` but not of `userstuff`.
    pub fn starts_with(&self, prefix: &Segments) -> bool {
        self.strip_prefix(prefix.parts()).is_some()
    }

    /// The segments left after removing `prefix`, if it matches.
    pub fn strip_prefix<S: AsRef<str>>(&self, prefix: &[S]) -> Option<&[String]> {
        if prefix.len() > self.parts.len() {
            return None;
        }
        let matches = self
            .parts
            .iter()
            .zip(prefix)
            .all(|(part, expected)| part == expected.as_ref());

        matches.then(|| &self.parts[prefix.len()..])
    }

    /// The segments joined back with "/", without any leading separator.
    pub fn join(&self) -> String {
        self.parts.join("/")
    }
}
