/**
 * Attribute filtering and change notification
 *  for attribute writes.
 */
pub mod attributes;
/**
 * TOML configuration describing the bucket,
 *  home and jail layout and the filesystems
 *  bound to users.
 */
pub mod config;
pub mod error;
/**
 * Client path parsing, jail containment and
 *  translation between virtual, physical and
 *  display paths.
 */
pub mod path;
/**
 * Capability traits for the per-session lookups
 *  and the resolved session context.
 */
pub mod resolver;
pub mod session;
/**
 * The per-session facade used by the transport
 *  layer: lazy context resolution, path
 *  translation and attribute writes.
 */
pub mod subsystem;

pub mod prelude {
    pub use crate::attributes::{
        filter_attributes, AttributeChange, AttributeChangeListener, Attributes,
    };
    pub use crate::config::{ConfigError, FilesystemConfig, JailConfig};
    pub use crate::error::JailError;
    pub use crate::path::{DisplayPath, PathTranslator, PhysicalPath};
    pub use crate::resolver::{
        BucketResolver, FilesystemHandle, FilesystemResolver, HomeResolver, JailResolver,
        Resolvers, SessionContext,
    };
    pub use crate::session::SessionHandle;
    pub use crate::subsystem::JailedSubsystem;
}
