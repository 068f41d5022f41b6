use std::collections::BTreeMap;

use crate::path::PhysicalPath;
use crate::session::SessionHandle;

/// Attribute key that is never passed on to storage
pub const PERMISSIONS_ATTRIBUTE: &str = "permissions";

/// Loosely typed attribute map as sent by a client
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// Drop attributes the backing store must not receive.
///
/// Only the exact key `permissions` is removed; every other entry is
/// passed through untouched.
pub fn filter_attributes<V>(mut attributes: BTreeMap<String, V>) -> BTreeMap<String, V> {
    if attributes.remove(PERMISSIONS_ATTRIBUTE).is_some() {
        tracing::debug!("dropped {} attribute", PERMISSIONS_ATTRIBUTE);
    }
    attributes
}

/// Observer for attribute writes.
///
/// Listeners see the filtered attributes and the resolved physical path,
/// never what the client originally sent.
pub trait AttributeChangeListener: Send + Sync {
    fn modifying_attributes(
        &self,
        session: &SessionHandle,
        path: &PhysicalPath,
        attributes: &Attributes,
    );
}

/// The outcome of an attribute write, ready for the storage layer
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeChange {
    pub path: PhysicalPath,
    pub attributes: Attributes,
}
