//! Shared test utilities for session resolution integration tests
#![allow(dead_code)]

use std::sync::Arc;

use common::resolver::configured::{
    FilesystemTable, FixedBucket, ObjectStoreFilesystem, TemplateHome, TemplateJail,
};
use common::resolver::Resolvers;
use common::session::SessionHandle;
use common::subsystem::JailedSubsystem;

pub const BUCKET: &str = "bucket";
pub const USERNAME: &str = "bob";

/// Resolvers for `bucket` with the given home and jail templates, where
/// only `bob` has a filesystem.
pub fn resolvers(home: &str, jail: &str) -> Resolvers {
    let mut filesystems = FilesystemTable::default();
    filesystems.insert(USERNAME, ObjectStoreFilesystem::memory("s3"));

    Resolvers::new(
        Arc::new(FixedBucket::new(BUCKET)),
        Arc::new(TemplateHome::new(home)),
        Arc::new(TemplateJail::new(jail)),
        Arc::new(filesystems),
    )
}

/// A subsystem for a fresh `bob` session
pub fn setup_subsystem(home: &str, jail: &str) -> JailedSubsystem {
    JailedSubsystem::new(SessionHandle::new(USERNAME), resolvers(home, jail))
}

/// A subsystem for a session whose user has no filesystem
pub fn setup_unmapped_subsystem(username: &str) -> JailedSubsystem {
    JailedSubsystem::new(SessionHandle::new(username), resolvers("", ""))
}
