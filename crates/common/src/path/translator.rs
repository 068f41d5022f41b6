use crate::error::JailError;
use crate::resolver::SessionContext;

use super::jail::Jail;
use super::resolved::{DisplayPath, PhysicalPath};
use super::segments::Segments;

/// Translates client paths for one session.
///
/// Construction validates the jail; after that every operation is
/// total over any input string and never touches storage.
#[derive(Debug, Clone)]
pub struct PathTranslator {
    // normalized bucket, no leading or trailing separator
    bucket: String,
    bucket_parts: Segments,
    home: Segments,
    // bucket followed by home, the physical location of the session root
    qualified_home: Vec<String>,
    jail: Option<Jail>,
}

impl PathTranslator {
    pub fn new(context: &SessionContext) -> Result<Self, JailError> {
        Self::from_parts(context.bucket(), context.home(), context.jail())
    }

    /// Build a translator straight from the resolved lookup values.
    pub fn from_parts(bucket: &str, home: &str, jail: &str) -> Result<Self, JailError> {
        let jail = Jail::new(home, jail)?;
        let home = Segments::parse(home);
        let bucket_parts = Segments::parse(bucket);
        let qualified_home = bucket_parts
            .parts()
            .iter()
            .chain(home.parts())
            .cloned()
            .collect();

        Ok(Self {
            bucket: bucket_parts.join(),
            bucket_parts,
            home,
            qualified_home,
            jail,
        })
    }

    pub fn is_jailed(&self) -> bool {
        self.jail.is_some()
    }

    /// Resolve a client path to the physical path used for storage.
    pub fn resolve(&self, requested: &str) -> PhysicalPath {
        let requested = Segments::parse(requested);
        match self.locate(&requested) {
            Location::Bucket(below) => PhysicalPath::new(
                &self.bucket,
                below.iter().map(String::as_str),
                below.is_empty(),
            ),
            Location::Home(below) => PhysicalPath::new(
                &self.bucket,
                self.home.parts().iter().chain(below).map(String::as_str),
                below.is_empty() && (self.is_jailed() || self.home.is_empty()),
            ),
        }
    }

    /// Resolve a client path to the form shown back to the client.
    pub fn display(&self, requested: &str) -> DisplayPath {
        let Some(jail) = &self.jail else {
            return self.resolve(requested).into();
        };

        let requested = Segments::parse(requested);
        let below = match self.locate(&requested) {
            Location::Home(below) | Location::Bucket(below) => below,
        };

        DisplayPath::new(
            jail.visible_root()
                .into_iter()
                .chain(below.iter().map(String::as_str)),
            below.is_empty(),
        )
    }

    /// Work out what the requested path is relative to.
    ///
    /// Already qualified input (`/bucket/...`, or for a jailed session
    /// the physical session root or `/visibleRoot/...`) is recognised so
    /// resolving a resolved path is a no-op. Everything else, absolute or
    /// not, is taken relative to home, so a jailed client can never name
    /// anything above its visible root.
    fn locate<'s>(&self, requested: &'s Segments) -> Location<'s> {
        let parts = requested.parts();
        if !requested.is_absolute() {
            return Location::Home(parts);
        }

        let Some(jail) = &self.jail else {
            if self.bucket.is_empty() {
                return Location::Home(parts);
            }
            return match requested.strip_prefix(self.bucket_parts.parts()) {
                Some(below) => Location::Bucket(below),
                None => Location::Home(parts),
            };
        };

        if let Some(below) = requested.strip_prefix(self.qualified_home.as_slice()) {
            return Location::Home(below);
        }
        match jail.visible_root() {
            Some(root) if requested.first() == Some(root) => Location::Home(&parts[1..]),
            _ => Location::Home(parts),
        }
    }
}

enum Location<'s> {
    /// Relative to the bucket root
    Bucket(&'s [String]),
    /// Relative to the session home
    Home(&'s [String]),
}

#[cfg(test)]
mod test {
    use super::*;

    fn translator(home: &str, jail: &str) -> PathTranslator {
        PathTranslator::from_parts("bucket", home, jail).unwrap()
    }

    #[test]
    fn test_root_home() {
        let t = translator("", "");
        assert!(!t.is_jailed());
        assert_eq!(t.resolve(".").as_str(), "/bucket/");
        assert_eq!(t.resolve("").as_str(), "/bucket/");
        assert_eq!(t.resolve("/").as_str(), "/bucket/");
        assert_eq!(t.resolve("/subdir").as_str(), "/bucket/subdir");
        assert_eq!(t.resolve("/file.txt").as_str(), "/bucket/file.txt");
        assert_eq!(t.resolve("/bucket/file.txt").as_str(), "/bucket/file.txt");
        assert_eq!(t.resolve("dir/.").as_str(), "/bucket/dir");
        assert_eq!(t.resolve("dir/subdir/..").as_str(), "/bucket/dir/subdir/..");
    }

    #[test]
    fn test_user_home() {
        let t = translator("bob", "");
        assert_eq!(t.resolve("").as_str(), "/bucket/bob");
        assert_eq!(t.resolve(".").as_str(), "/bucket/bob");
        assert_eq!(t.resolve("file.txt").as_str(), "/bucket/bob/file.txt");
        assert_eq!(t.resolve("/subdir").as_str(), "/bucket/bob/subdir");
        assert_eq!(t.resolve("/file.txt").as_str(), "/bucket/bob/file.txt");
        assert_eq!(
            t.resolve("/bucket/bob/file.txt").as_str(),
            "/bucket/bob/file.txt"
        );
        assert_eq!(t.resolve("dir/.").as_str(), "/bucket/bob/dir");
        assert_eq!(
            t.resolve("dir/subdir/..").as_str(),
            "/bucket/bob/dir/subdir/.."
        );
    }

    #[test]
    fn test_unjailed_display_matches_physical() {
        let t = translator("bob", "");
        for path in [".", "/subdir", "/bucket/bob/file.txt", "dir/subdir/.."] {
            assert_eq!(t.display(path).as_str(), t.resolve(path).as_str());
        }
    }

    #[test]
    fn test_jailed_display() {
        let t = translator("users/bob", "users");
        assert!(t.is_jailed());
        assert_eq!(t.display(".").as_str(), "/bob/");
        assert_eq!(t.display("/bob").as_str(), "/bob/");
        assert_eq!(t.display("/bob/file.txt").as_str(), "/bob/file.txt");
        assert_eq!(
            t.display("/bucket/users/bob/file.txt").as_str(),
            "/bob/file.txt"
        );
        assert_eq!(t.display("/bob/dir/.").as_str(), "/bob/dir");
        assert_eq!(
            t.display("/bob/dir/subdir/..").as_str(),
            "/bob/dir/subdir/.."
        );
        assert_eq!(t.display("/").as_str(), "/bob/");
    }

    #[test]
    fn test_jailed_physical() {
        let t = translator("users/bob", "users");
        assert_eq!(t.resolve(".").as_str(), "/bucket/users/bob/");
        assert_eq!(t.resolve("/").as_str(), "/bucket/users/bob/");
        assert_eq!(t.resolve("file.txt").as_str(), "/bucket/users/bob/file.txt");
        assert_eq!(
            t.resolve("/file.txt").as_str(),
            "/bucket/users/bob/file.txt"
        );
        assert_eq!(
            t.resolve("/bob/file.txt").as_str(),
            "/bucket/users/bob/file.txt"
        );
        assert_eq!(
            t.resolve("/bucket/users/bob/file.txt").as_str(),
            "/bucket/users/bob/file.txt"
        );
    }

    #[test]
    fn test_jailed_cannot_name_bucket_root() {
        let t = translator("users/bob", "users");
        assert_eq!(t.resolve("/bucket").as_str(), "/bucket/users/bob/bucket");
        assert_eq!(
            t.resolve("/bucket/users/alice/secret").as_str(),
            "/bucket/users/bob/bucket/users/alice/secret"
        );
        assert_eq!(t.display("/bucket/users").as_str(), "/bob/bucket/users");
    }

    #[test]
    fn test_jailed_parent_segments_are_literal() {
        let t = translator("users/bob", "users");
        assert_eq!(t.resolve("../alice").as_str(), "/bucket/users/bob/../alice");
        assert_eq!(t.display("/..").as_str(), "/bob/..");
    }

    #[test]
    fn test_home_equal_to_jail() {
        let t = translator("users", "users");
        assert_eq!(t.display(".").as_str(), "/");
        assert_eq!(t.display("/bob/file.txt").as_str(), "/bob/file.txt");
        assert_eq!(t.resolve("/").as_str(), "/bucket/users/");
        assert_eq!(t.resolve("/bob").as_str(), "/bucket/users/bob");
    }

    #[test]
    fn test_deep_home_shows_last_segment() {
        let t = translator("srv/users/bob/docs", "srv/users");
        assert_eq!(t.display("/").as_str(), "/docs/");
        assert_eq!(t.display("/docs/a").as_str(), "/docs/a");
        assert_eq!(t.resolve("/docs/a").as_str(), "/bucket/srv/users/bob/docs/a");
    }

    #[test]
    fn test_jail_mapping_rejected() {
        let err = PathTranslator::from_parts("bucket", "home", "jail").unwrap_err();
        assert_eq!(
            err.to_string(),
            "User directory is outside jailed path: jail: home"
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for (home, jail) in [("", ""), ("bob", ""), ("users/bob", "users"), ("users", "users")] {
            let t = translator(home, jail);
            for path in [".", "", "/", "/x", "x/y", "a/../b", "/bucket/users/bob/f"] {
                let physical = t.resolve(path);
                let display = t.display(path);
                assert_eq!(t.resolve(physical.as_str()), physical, "{home}/{jail}: {path}");
                assert_eq!(t.resolve(display.as_str()), physical, "{home}/{jail}: {path}");
                assert_eq!(t.display(display.as_str()), display, "{home}/{jail}: {path}");
            }
        }
    }

    #[test]
    fn test_bucket_separators_are_normalized() {
        for bucket in ["/bucket", "bucket/", "//bucket//"] {
            let t = PathTranslator::from_parts(bucket, "bob", "").unwrap();
            let physical = t.resolve("file.txt");
            assert_eq!(physical.as_str(), "/bucket/bob/file.txt");
            assert_eq!(physical.key(), "bob/file.txt");
            assert_eq!(t.resolve(physical.as_str()), physical);
            assert_eq!(t.resolve("/").as_str(), "/bucket/bob");
        }

        let t = PathTranslator::from_parts("/bucket/", "users/bob", "users").unwrap();
        let physical = t.resolve("/bob/file.txt");
        assert_eq!(physical.as_str(), "/bucket/users/bob/file.txt");
        assert_eq!(t.resolve(physical.as_str()), physical);
    }

    #[test]
    fn test_nested_bucket_prefix() {
        let t = PathTranslator::from_parts("store/bucket", "", "").unwrap();
        let physical = t.resolve("/store/bucket/file.txt");
        assert_eq!(physical.as_str(), "/store/bucket/file.txt");
        assert_eq!(physical.key(), "file.txt");
        assert_eq!(t.resolve("/").as_str(), "/store/bucket/");
    }

    #[test]
    fn test_jailed_paths_stay_contained() {
        let t = translator("users/bob", "users");
        for path in ["/", ".", "", "/bucket", "/bucket/users", "/users", "//", "/bob/../.."] {
            let physical = t.resolve(path);
            assert!(
                physical.as_str().starts_with("/bucket/users/bob/"),
                "{path} escaped to {physical}"
            );
        }
    }
}
